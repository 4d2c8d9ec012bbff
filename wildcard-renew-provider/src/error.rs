use std::fmt;

use serde::Serialize;

/// Error returned by every [`DnsProvider`](crate::DnsProvider) call.
///
/// `provider` names the backend that failed. `raw_message`, where present, is
/// the provider's own wording, kept for logs. Serializes with a snake_case
/// `code` tag.
///
/// The HTTP layer never retries. [`is_transient`](Self::is_transient) tells a
/// caller whether running again later could help.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ProviderError {
    /// Connection, DNS or TLS failure, or a 502-504 from the API.
    NetworkError { provider: String, detail: String },

    /// Token rejected or missing a scope (`Zone.Zone:Read`, `Zone.DNS:Edit`).
    InvalidCredentials {
        provider: String,
        raw_message: Option<String>,
    },

    /// Recreating a record that is still (or again) present.
    RecordExists {
        provider: String,
        record_name: String,
        raw_message: Option<String>,
    },

    /// Deleting a record id the zone no longer has.
    RecordNotFound {
        provider: String,
        record_id: String,
        raw_message: Option<String>,
    },

    InvalidParameter {
        provider: String,
        param: String,
        detail: String,
    },

    /// A listed record of a type [`DnsRecordType`](crate::DnsRecordType)
    /// does not model.
    UnsupportedRecordType {
        provider: String,
        record_type: String,
    },

    QuotaExceeded {
        provider: String,
        raw_message: Option<String>,
    },

    /// HTTP 429. `retry_after` is the `Retry-After` header in seconds.
    RateLimited {
        provider: String,
        retry_after: Option<u64>,
        raw_message: Option<String>,
    },

    /// The client's connect or request timeout elapsed.
    Timeout { provider: String, detail: String },

    /// Zone id unknown to the API or not visible to the token.
    DomainNotFound {
        provider: String,
        domain: String,
        raw_message: Option<String>,
    },

    /// Response body was not the JSON shape expected.
    ParseError { provider: String, detail: String },

    /// API error with a code the mapping table does not know.
    Unknown {
        provider: String,
        raw_code: Option<String>,
        raw_message: String,
    },
}

impl ProviderError {
    /// Bad input or a missing resource rather than a fault; logged at `warn`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::RecordExists { .. }
                | Self::RecordNotFound { .. }
                | Self::InvalidParameter { .. }
                | Self::UnsupportedRecordType { .. }
                | Self::QuotaExceeded { .. }
                | Self::DomainNotFound { .. }
        )
    }

    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

/// Appends `: <msg>` when the provider supplied one.
struct Detail<'a>(Option<&'a str>);

impl fmt::Display for Detail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(msg) => write!(f, ": {msg}"),
            None => Ok(()),
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => write!(
                f,
                "[{provider}] Invalid credentials{}",
                Detail(raw_message.as_deref())
            ),
            Self::RecordExists {
                provider,
                record_name,
                ..
            } => write!(f, "[{provider}] Record '{record_name}' already exists"),
            Self::RecordNotFound {
                provider,
                record_id,
                ..
            } => write!(f, "[{provider}] Record '{record_id}' not found"),
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => write!(f, "[{provider}] Invalid parameter '{param}': {detail}"),
            Self::UnsupportedRecordType {
                provider,
                record_type,
            } => write!(f, "[{provider}] Unsupported record type: {record_type}"),
            Self::QuotaExceeded { provider, .. } => write!(f, "[{provider}] Quota exceeded"),
            Self::RateLimited {
                provider,
                retry_after: Some(secs),
                ..
            } => write!(f, "[{provider}] Rate limited (retry after {secs}s)"),
            Self::RateLimited { provider, .. } => write!(f, "[{provider}] Rate limited"),
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::DomainNotFound {
                provider,
                domain,
                raw_message,
            } => write!(
                f,
                "[{provider}] Zone '{domain}' not found{}",
                Detail(raw_message.as_deref())
            ),
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_code: Some(code),
                raw_message,
            } => write!(f, "[{provider}] {raw_message} (code {code})"),
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => write!(f, "[{provider}] {raw_message}"),
        }
    }
}

impl std::error::Error for ProviderError {}

pub type Result<T> = std::result::Result<T, ProviderError>;
