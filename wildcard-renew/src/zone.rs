//! Zone name validation and lookup.

use wildcard_renew_provider::{DnsProvider, ProviderZone};

use crate::error::RenewError;

/// Reject names the renewal cannot handle before any request is made.
pub fn validate_zone_name(name: &str) -> Result<(), RenewError> {
    if name.is_empty() {
        return Err(RenewError::EmptyZoneName);
    }
    if !name.is_ascii() {
        return Err(RenewError::NonAsciiZone {
            zone: name.to_string(),
        });
    }
    Ok(())
}

/// Resolve `name` to the single zone carrying it.
pub async fn resolve_zone(
    provider: &dyn DnsProvider,
    name: &str,
) -> Result<ProviderZone, RenewError> {
    validate_zone_name(name)?;

    let mut zones = provider.find_zones(name).await?;
    match zones.len() {
        0 => Err(RenewError::ZoneNotFound {
            zone: name.to_string(),
        }),
        1 => {
            let zone = zones.remove(0);
            tracing::info!("Resolved zone {} to id {} on {}", zone.name, zone.id, provider.id());
            Ok(zone)
        }
        count => Err(RenewError::AmbiguousZone {
            zone: name.to_string(),
            count,
        }),
    }
}
