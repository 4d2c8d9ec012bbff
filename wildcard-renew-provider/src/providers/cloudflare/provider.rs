//! Cloudflare DnsProvider trait implementation

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{
    CreateDnsRecordRequest, DnsRecord, DnsRecordType, DomainStatus, ProviderType, ProviderZone,
    RecordQueryParams,
};

use super::types::CreateRecordBody;
use super::{CloudflareDnsRecord, CloudflareProvider, CloudflareZone, MAX_PAGE_SIZE_RECORDS};

impl CloudflareProvider {
    /// Convert a Cloudflare zone to a `ProviderZone`
    /// Cloudflare statuses: active, pending, initializing, moved
    pub(crate) fn zone_to_provider_zone(zone: CloudflareZone) -> ProviderZone {
        let status = match zone.status.as_str() {
            "active" => DomainStatus::Active,
            "pending" | "initializing" => DomainStatus::Pending,
            "moved" => DomainStatus::Paused,
            _ => DomainStatus::Unknown,
        };

        ProviderZone {
            id: zone.id,
            name: zone.name,
            provider: ProviderType::Cloudflare,
            status,
        }
    }

    pub(crate) fn parse_record_type(&self, record_type: &str) -> Result<DnsRecordType> {
        match record_type.to_uppercase().as_str() {
            "A" => Ok(DnsRecordType::A),
            "AAAA" => Ok(DnsRecordType::Aaaa),
            "CNAME" => Ok(DnsRecordType::Cname),
            "MX" => Ok(DnsRecordType::Mx),
            "TXT" => Ok(DnsRecordType::Txt),
            "NS" => Ok(DnsRecordType::Ns),
            "SRV" => Ok(DnsRecordType::Srv),
            "CAA" => Ok(DnsRecordType::Caa),
            _ => Err(ProviderError::UnsupportedRecordType {
                provider: self.provider_name().to_string(),
                record_type: record_type.to_string(),
            }),
        }
    }

    /// Convert a Cloudflare record to a `DnsRecord`
    pub(crate) fn cf_record_to_dns_record(
        &self,
        cf_record: CloudflareDnsRecord,
        zone_id: &str,
    ) -> Result<DnsRecord> {
        Ok(DnsRecord {
            id: cf_record.id,
            zone_id: zone_id.to_string(),
            record_type: self.parse_record_type(&cf_record.record_type)?,
            name: cf_record.name,
            content: cf_record.content,
            ttl: cf_record.ttl,
            proxied: cf_record.proxied,
            raw: None,
        })
    }

    /// Decode one record object, keeping the object itself as `raw`.
    pub(crate) fn record_from_value(
        &self,
        value: serde_json::Value,
        zone_id: &str,
    ) -> Result<DnsRecord> {
        let cf_record: CloudflareDnsRecord =
            serde_json::from_value(value.clone()).map_err(|e| self.parse_error(e))?;
        Ok(DnsRecord {
            raw: Some(value),
            ..self.cf_record_to_dns_record(cf_record, zone_id)?
        })
    }

    fn records_path(zone_id: &str, params: &RecordQueryParams, page: u32) -> String {
        let mut path = format!(
            "/zones/{zone_id}/dns_records?page={page}&per_page={MAX_PAGE_SIZE_RECORDS}"
        );
        if let Some(record_type) = params.record_type {
            path.push_str(&format!("&type={}", record_type.as_str()));
        }
        path
    }
}

#[async_trait]
impl DnsProvider for CloudflareProvider {
    fn id(&self) -> &'static str {
        "cloudflare"
    }

    async fn find_zones(&self, name: &str) -> Result<Vec<ProviderZone>> {
        let ctx = ErrorContext {
            domain: Some(name.to_string()),
            ..ErrorContext::default()
        };
        let (zones, _) = self
            .get_page::<CloudflareZone>(&format!("/zones?name={}", urlencoding::encode(name)), ctx)
            .await?;

        Ok(zones.into_iter().map(Self::zone_to_provider_zone).collect())
    }

    async fn list_records(
        &self,
        zone_id: &str,
        params: &RecordQueryParams,
    ) -> Result<Vec<DnsRecord>> {
        let mut records = Vec::new();
        let mut page = 1;

        loop {
            let ctx = ErrorContext {
                domain: Some(zone_id.to_string()),
                ..ErrorContext::default()
            };
            let (values, info) = self
                .get_page::<serde_json::Value>(&Self::records_path(zone_id, params, page), ctx)
                .await?;

            for value in values {
                match self.record_from_value(value, zone_id) {
                    Ok(record) => records.push(record),
                    Err(e) => log::warn!("Skipping record: {e}"),
                }
            }

            match info {
                Some(info) if page < info.total_pages => page += 1,
                _ => break,
            }
        }

        log::debug!("Listed {} record(s) in zone {zone_id}", records.len());
        Ok(records)
    }

    async fn create_record(&self, req: &CreateDnsRecordRequest) -> Result<DnsRecord> {
        let body = CreateRecordBody {
            record_type: req.record_type.as_str(),
            name: &req.name,
            content: &req.content,
            ttl: req.ttl,
            proxied: req.proxied,
        };
        let ctx = ErrorContext {
            record_name: Some(req.name.clone()),
            domain: Some(req.zone_id.clone()),
            ..ErrorContext::default()
        };

        let created: serde_json::Value = self
            .post(&format!("/zones/{}/dns_records", req.zone_id), &body, ctx)
            .await?;

        self.record_from_value(created, &req.zone_id)
    }

    async fn delete_record(&self, record_id: &str, zone_id: &str) -> Result<()> {
        let ctx = ErrorContext {
            record_id: Some(record_id.to_string()),
            domain: Some(zone_id.to_string()),
            ..ErrorContext::default()
        };
        self.delete(&format!("/zones/{zone_id}/dns_records/{record_id}"), ctx)
            .await
    }
}
