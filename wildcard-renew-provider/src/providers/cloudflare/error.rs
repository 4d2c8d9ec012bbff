//! Cloudflare error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::CloudflareProvider;

/// Maps the `errors[0].code` of a `success: false` envelope.
///
/// Codes seen by the NS record cycle: 10000 for a bad token, 81044 when a
/// record was already deleted, 81056/81057 when a recreate races an existing
/// record, 7003 for a stale zone id.
/// See <https://developers.cloudflare.com/fundamentals/api/troubleshooting/>.
impl ProviderErrorMapper for CloudflareProvider {
    fn provider_name(&self) -> &'static str {
        "cloudflare"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let provider = self.provider_name().to_string();
        let or_unknown = |v: Option<String>| v.unwrap_or_else(|| "<unknown>".to_string());

        let Some(code) = raw.code.as_deref() else {
            return self.unknown_error(raw);
        };

        match code {
            "6003" | "6103" | "6111" | "9109" | "10000" => ProviderError::InvalidCredentials {
                provider,
                raw_message: Some(raw.message),
            },
            "1004" | "9000" | "9021" | "9041" => ProviderError::InvalidParameter {
                provider,
                param: match code {
                    "9000" => "name",
                    "9021" => "ttl",
                    "9041" => "proxied",
                    _ => "general",
                }
                .to_string(),
                detail: raw.message,
            },
            "81056" | "81057" | "81058" => ProviderError::RecordExists {
                provider,
                record_name: or_unknown(context.record_name),
                raw_message: Some(raw.message),
            },
            "81044" => ProviderError::RecordNotFound {
                provider,
                record_id: or_unknown(context.record_id),
                raw_message: Some(raw.message),
            },
            "81045" => ProviderError::QuotaExceeded {
                provider,
                raw_message: Some(raw.message),
            },
            "7000" | "7003" => ProviderError::DomainNotFound {
                provider,
                domain: or_unknown(context.domain),
                raw_message: Some(raw.message),
            },
            _ => self.unknown_error(raw),
        }
    }
}
