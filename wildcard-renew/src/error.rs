//! Errors that abort a renewal run.

use thiserror::Error;
use wildcard_renew_provider::ProviderError;

use crate::config::ConfigError;

/// Fatal renewal error. Per-record step failures are not fatal and are
/// reported through [`RecordOutcome`](crate::RecordOutcome) instead.
#[derive(Debug, Error)]
pub enum RenewError {
    #[error("Zone name is empty")]
    EmptyZoneName,

    #[error("Zone name '{zone}' contains non-ASCII characters; punycode is unsupported")]
    NonAsciiZone { zone: String },

    #[error("No zone named '{zone}' is visible to this API token")]
    ZoneNotFound { zone: String },

    #[error("Expected exactly one zone named '{zone}', found {count}")]
    AmbiguousZone { zone: String, count: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
