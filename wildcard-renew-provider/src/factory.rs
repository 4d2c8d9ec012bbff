//! Builds a provider from stored credentials.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::CloudflareProvider;
use crate::traits::DnsProvider;
use crate::types::ProviderCredentials;

/// The backend is chosen by the credentials variant. Only the HTTP client is
/// built here; the token is first checked by the zone lookup.
///
/// ```rust,no_run
/// use wildcard_renew_provider::{create_provider, ProviderCredentials};
///
/// let cloudflare = create_provider(ProviderCredentials::Cloudflare {
///     api_token: std::env::var("CF_API_TOKEN").unwrap_or_default(),
/// });
/// ```
pub fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn DnsProvider>> {
    log::debug!("Creating {} provider", credentials.provider_type());
    match credentials {
        ProviderCredentials::Cloudflare { api_token } => {
            Ok(Arc::new(CloudflareProvider::new(api_token)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloudflare_credentials_build_cloudflare_provider() {
        let credentials = ProviderCredentials::Cloudflare {
            api_token: "token".to_string(),
        };
        let expected = credentials.provider_type().to_string();
        let provider = create_provider(credentials).unwrap();
        assert_eq!(provider.id(), expected);
    }
}
