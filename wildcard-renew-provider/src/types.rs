use serde::{Deserialize, Serialize};

// ============ Query Parameters ============

/// Filters for DNS record listing.
///
/// The default has no filter: every record of the zone is returned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordQueryParams {
    /// Only return records of this type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_type: Option<DnsRecordType>,
}

impl RecordQueryParams {
    /// Query matching every record of the given type.
    #[must_use]
    pub fn of_type(record_type: DnsRecordType) -> Self {
        Self {
            record_type: Some(record_type),
        }
    }
}

// ============ Provider Types ============

/// Identifies which DNS provider implementation to use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Cloudflare DNS.
    Cloudflare,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cloudflare => write!(f, "cloudflare"),
        }
    }
}

/// Credentials used to construct a provider.
///
/// Serialized as a tagged enum with `"provider"` as the tag and `"credentials"` as the content:
///
/// ```json
/// { "provider": "cloudflare", "credentials": { "api_token": "..." } }
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// Cloudflare API token. Needs `Zone.DNS:Edit` and `Zone.Zone:Read`.
    #[serde(rename = "cloudflare")]
    Cloudflare {
        /// Cloudflare API token.
        api_token: String,
    },
}

impl ProviderCredentials {
    /// The provider these credentials belong to.
    pub fn provider_type(&self) -> ProviderType {
        match self {
            Self::Cloudflare { .. } => ProviderType::Cloudflare,
        }
    }
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cloudflare { .. } => f
                .debug_struct("Cloudflare")
                .field("api_token", &"<redacted>")
                .finish(),
        }
    }
}

// ============ Zone Types ============

/// Status of a zone within a DNS provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    /// Zone is active and resolving.
    Active,
    /// Zone has moved away from the provider.
    Paused,
    /// Zone is pending activation/verification.
    Pending,
    /// Status could not be determined.
    Unknown,
}

/// A zone managed by a DNS provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderZone {
    /// Provider-specific zone identifier.
    pub id: String,
    /// Zone name (e.g., `"example.com"`).
    pub name: String,
    /// Which provider manages this zone.
    pub provider: ProviderType,
    /// Current zone status.
    pub status: DomainStatus,
}

// ============ DNS Record Types ============

/// DNS record type identifier.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"NS"`, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Text record.
    Txt,
    /// Name server record.
    Ns,
    /// Service locator record.
    Srv,
    /// Certificate Authority Authorization record.
    Caa,
}

impl DnsRecordType {
    /// Wire name of the record type (`"NS"`, `"TXT"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Srv => "SRV",
            Self::Caa => "CAA",
        }
    }
}

impl std::fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DNS record as returned by the provider.
///
/// Names are kept fully qualified so a deleted record can be recreated from
/// this value without knowing the zone name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Provider-specific record identifier.
    pub id: String,
    /// Zone identifier this record belongs to.
    pub zone_id: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    /// Fully qualified record name (e.g., `"example.com"`).
    pub name: String,
    /// Record content; the nameserver hostname for NS records.
    pub content: String,
    /// Time to live in seconds (`1` means automatic on Cloudflare).
    pub ttl: u32,
    /// Whether the Cloudflare proxy is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    /// The record object exactly as the API returned it, fields this type
    /// does not model included.
    #[serde(skip)]
    pub raw: Option<serde_json::Value>,
}

/// Request to create a new DNS record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDnsRecordRequest {
    /// Zone identifier to create the record in.
    pub zone_id: String,
    /// Record type.
    pub record_type: DnsRecordType,
    /// Fully qualified record name.
    pub name: String,
    /// Record content.
    pub content: String,
    /// Time to live in seconds; provider default when `None`.
    pub ttl: Option<u32>,
    /// Enable the Cloudflare proxy.
    pub proxied: Option<bool>,
}

impl CreateDnsRecordRequest {
    /// Request recreating `record` with identical name and content and the
    /// proxy explicitly disabled.
    #[must_use]
    pub fn recreate_unproxied(record: &DnsRecord) -> Self {
        Self {
            zone_id: record.zone_id.clone(),
            record_type: record.record_type,
            name: record.name.clone(),
            content: record.content.clone(),
            ttl: None,
            proxied: Some(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ns_record(proxied: Option<bool>) -> DnsRecord {
        DnsRecord {
            id: "rec-1".to_string(),
            zone_id: "zone-1".to_string(),
            record_type: DnsRecordType::Ns,
            name: "example.com".to_string(),
            content: "ns1.example.com".to_string(),
            ttl: 86400,
            proxied,
            raw: None,
        }
    }

    #[test]
    fn recreate_preserves_name_and_content() {
        let req = CreateDnsRecordRequest::recreate_unproxied(&ns_record(None));
        assert_eq!(req.zone_id, "zone-1");
        assert_eq!(req.record_type, DnsRecordType::Ns);
        assert_eq!(req.name, "example.com");
        assert_eq!(req.content, "ns1.example.com");
    }

    #[test]
    fn recreate_always_disables_proxy() {
        for proxied in [None, Some(false), Some(true)] {
            let req = CreateDnsRecordRequest::recreate_unproxied(&ns_record(proxied));
            assert_eq!(req.proxied, Some(false));
        }
    }

    #[test]
    fn record_type_serializes_uppercase() {
        let json = serde_json::to_string(&DnsRecordType::Aaaa).unwrap();
        assert_eq!(json, "\"AAAA\"");
        assert_eq!(DnsRecordType::Ns.to_string(), "NS");
    }

    #[test]
    fn credentials_debug_redacts_token() {
        let cred = ProviderCredentials::Cloudflare {
            api_token: "super-secret".to_string(),
        };
        let debug = format!("{cred:?}");
        assert!(!debug.contains("super-secret"));
        assert_eq!(cred.provider_type(), ProviderType::Cloudflare);
    }

    #[test]
    fn credentials_tagged_serialization() {
        let cred = ProviderCredentials::Cloudflare {
            api_token: "t".to_string(),
        };
        let json = serde_json::to_value(&cred).unwrap();
        assert_eq!(json["provider"], "cloudflare");
        assert_eq!(json["credentials"]["api_token"], "t");
    }
}
