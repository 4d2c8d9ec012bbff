//! # wildcard-renew
//!
//! Renews the wildcard certificates of a Cloudflare zone (`*.<zone>` and
//! `*.dns.<zone>`) with certbot's DNS-01 plugin.
//!
//! A zone that delegates a subdomain through NS records cannot be validated
//! while the delegation is in place, so each NS record is cycled:
//!
//! 1. delete the record,
//! 2. wait for the deletion to propagate,
//! 3. run certbot,
//! 4. recreate the record (always unproxied).
//!
//! Every step is best-effort: a failing delete, certbot run or recreate is
//! logged and recorded in the [`RenewalReport`], and the next step runs
//! anyway. Nothing is retried or rolled back.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use wildcard_renew::{Certbot, RenewalCycle, RenewalOptions, load_api_token};
//! use wildcard_renew_provider::{ProviderCredentials, create_provider};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let token = load_api_token("cloudflare.ini".as_ref())?;
//! let provider = create_provider(ProviderCredentials::Cloudflare {
//!     api_token: token.expose().to_string(),
//! })?;
//!
//! let report = RenewalCycle::new(provider, Arc::new(Certbot::new()))
//!     .run(&RenewalOptions {
//!         zone_name: "example.com".to_string(),
//!         credentials_file: "cloudflare.ini".into(),
//!         propagation: Duration::from_secs(10),
//!     })
//!     .await?;
//! println!("{} record(s) cycled", report.records.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod issuer;
pub mod logging;
pub mod renewal;
pub mod zone;

pub use config::{ApiToken, ConfigError, load_api_token};
pub use error::RenewError;
pub use issuer::{Certbot, CertificateIssuer, IssueOutcome, IssueRequest, IssuerError};
pub use renewal::{
    DEFAULT_PROPAGATION, RecordOutcome, RenewalCycle, RenewalOptions, RenewalReport,
};
pub use zone::{resolve_zone, validate_zone_name};
