//! Sending a provider request and reading its body.
//!
//! Providers build the `RequestBuilder` (URL, auth, body) and decode the
//! returned text themselves.
//!
//! Requests are sent exactly once. Transient failures are surfaced to the
//! caller as [`ProviderError::NetworkError`], [`ProviderError::Timeout`] or
//! [`ProviderError::RateLimited`].

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

pub struct HttpUtils;

fn transport_error(provider: &str, e: &reqwest::Error) -> ProviderError {
    let provider = provider.to_string();
    let detail = e.to_string();
    if e.is_timeout() {
        ProviderError::Timeout { provider, detail }
    } else {
        ProviderError::NetworkError { provider, detail }
    }
}

impl HttpUtils {
    /// Send once and return `(status, body)`.
    ///
    /// 4xx bodies are returned as-is since Cloudflare explains them in its
    /// envelope. 429 becomes [`ProviderError::RateLimited`] and 502-504 become
    /// [`ProviderError::NetworkError`]. `method_name` and `url` are for logs.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| transport_error(provider_name, &e))?;

        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;
        log::debug!(
            "[{provider_name}] HTTP {status}: {}",
            truncate_for_log(&body)
        );

        match status {
            429 => {
                log::warn!("[{provider_name}] Rate limited, retry_after={retry_after:?}");
                Err(ProviderError::RateLimited {
                    provider: provider_name.to_string(),
                    retry_after,
                    raw_message: Some(truncate_for_log(&body)),
                })
            }
            502..=504 => {
                log::warn!("[{provider_name}] Upstream unavailable (HTTP {status})");
                Err(ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: format!("HTTP {status}: {}", truncate_for_log(&body)),
                })
            }
            _ => Ok((status, body)),
        }
    }

    /// Decode a body, logging a truncated copy on failure.
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
