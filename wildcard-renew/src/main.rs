//! Command-line entry point.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use wildcard_renew::cli::{Cli, usage};
use wildcard_renew::logging::init_logging;
use wildcard_renew::{
    Certbot, RenewError, RenewalCycle, RenewalOptions, RenewalReport, load_api_token,
    validate_zone_name,
};
use wildcard_renew_provider::{ProviderCredentials, create_provider};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let Some(options) = cli.options() else {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| "wildcard-renew".to_string());
        println!("{}", usage(&program));
        return ExitCode::SUCCESS;
    };

    init_logging(cli.verbose);

    match run(&options).await {
        Ok(report) => {
            summarize(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            match e.downcast_ref::<RenewError>() {
                Some(RenewError::Config(config)) if config.is_inaccessible() => {
                    eprintln!("{config}");
                }
                Some(RenewError::Provider(provider)) if provider.is_transient() => {
                    tracing::error!("{e:#}");
                    tracing::info!("No record was touched; running again later may succeed");
                }
                _ => tracing::error!("{e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(options: &RenewalOptions) -> anyhow::Result<RenewalReport> {
    validate_zone_name(&options.zone_name)?;
    let token = load_api_token(&options.credentials_file).map_err(RenewError::from)?;
    let provider = create_provider(ProviderCredentials::Cloudflare {
        api_token: token.expose().to_string(),
    })
    .context("Failed to create Cloudflare client")?;

    let report = RenewalCycle::new(provider, Arc::new(Certbot::new()))
        .run(options)
        .await
        .with_context(|| format!("Renewal of {} aborted", options.zone_name))?;
    Ok(report)
}

fn summarize(report: &RenewalReport) {
    let clean = report.records.iter().filter(|o| o.is_clean()).count();
    tracing::info!(
        "Cycled {} NS record(s) in {}, {clean} without errors",
        report.records.len(),
        report.zone.name
    );
    for record in report.missing_records() {
        tracing::warn!(
            "NS record {} -> {} was not recreated, add it back manually",
            record.name,
            record.content
        );
    }
}
