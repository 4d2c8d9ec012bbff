//! # wildcard-renew-provider
//!
//! DNS provider abstraction used by `wildcard-renew` to look up zones and to
//! list, delete and recreate DNS records while a wildcard certificate is
//! being issued.
//!
//! ## Supported Providers
//!
//! | Provider | Auth Method |
//! |----------|-------------|
//! | [Cloudflare](https://www.cloudflare.com/) | Bearer Token |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for static builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wildcard_renew_provider::{
//!     create_provider, DnsProvider, DnsRecordType, ProviderCredentials, RecordQueryParams,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ProviderCredentials::Cloudflare {
//!         api_token: "your-token".to_string(),
//!     })?;
//!
//!     let zones = provider.find_zones("example.com").await?;
//!     let records = provider
//!         .list_records(&zones[0].id, &RecordQueryParams::of_type(DnsRecordType::Ns))
//!         .await?;
//!     for record in &records {
//!         println!("{} NS {}", record.name, record.content);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! Requests are never retried: transient failures (`NetworkError`, `Timeout`,
//! `RateLimited`) are reported to the caller as-is.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};

pub use factory::create_provider;

pub use traits::DnsProvider;

pub use types::{
    CreateDnsRecordRequest, DnsRecord, DnsRecordType, DomainStatus, ProviderCredentials,
    ProviderType, ProviderZone, RecordQueryParams,
};

pub use utils::log_sanitizer;

pub use providers::CloudflareProvider;
