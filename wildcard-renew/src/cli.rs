//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::renewal::{DEFAULT_PROPAGATION, RenewalOptions};

/// Renew `*.<zone>` and `*.dns.<zone>` with certbot by cycling the zone's NS
/// records on Cloudflare.
///
/// The API token needs Zone.DNS edit and Zone.Zone read permissions.
#[derive(Parser, Debug)]
#[command(name = "wildcard-renew", version, about)]
pub struct Cli {
    /// Zone to renew, e.g. mycanary.com
    pub zone_name: Option<String>,

    /// Credential file, first line `dns_cloudflare_api_token=<token>`
    pub credential_file: Option<PathBuf>,

    /// Seconds to wait after deleting each NS record
    #[arg(default_value_t = DEFAULT_PROPAGATION.as_secs())]
    pub propagation_seconds: u64,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Renewal options, or `None` when a required positional is missing and
    /// usage should be shown instead.
    pub fn options(&self) -> Option<RenewalOptions> {
        Some(RenewalOptions {
            zone_name: self.zone_name.clone()?,
            credentials_file: self.credential_file.clone()?,
            propagation: Duration::from_secs(self.propagation_seconds),
        })
    }
}

/// Usage text printed when positionals are missing.
pub fn usage(program: &str) -> String {
    format!(
        "Usage: sudo {program} zone_name cloudflare_token_file [propagation_time]\n\
         Example: sudo {program} mycanary.com ~/cloudflare_token.ini\n\
         cloudflare_token.ini example: dns_cloudflare_api_token=XXXXXXXXXXXXXXXXXXX"
    )
}
