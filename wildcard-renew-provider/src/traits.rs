use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{CreateDnsRecordRequest, DnsRecord, ProviderZone, RecordQueryParams};

/// First entry of an API error list, before mapping.
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Numeric code as text, e.g. `"81044"`.
    pub code: Option<String>,
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// What the failing request was about, so mapped errors can name it.
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    pub record_name: Option<String>,
    pub record_id: Option<String>,
    /// Zone name for lookups, zone id for record calls.
    pub domain: Option<String>,
}

pub(crate) trait ProviderErrorMapper {
    fn provider_name(&self) -> &'static str;

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// DNS provider operations needed to cycle a zone's records around a
/// certificate issuance.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Short backend name used in log lines, e.g. `"cloudflare"`.
    fn id(&self) -> &'static str;

    /// Look up zones whose name matches `name` exactly.
    ///
    /// An empty result is not an error; callers decide how many matches they
    /// accept.
    async fn find_zones(&self, name: &str) -> Result<Vec<ProviderZone>>;

    /// List every record of a zone matching `params`, following pagination.
    async fn list_records(&self, zone_id: &str, params: &RecordQueryParams)
    -> Result<Vec<DnsRecord>>;

    /// Create a record and return it as stored by the provider.
    async fn create_record(&self, req: &CreateDnsRecordRequest) -> Result<DnsRecord>;

    /// Delete one record by id. A record that is already gone is
    /// [`ProviderError::RecordNotFound`].
    async fn delete_record(&self, record_id: &str, zone_id: &str) -> Result<()>;
}
