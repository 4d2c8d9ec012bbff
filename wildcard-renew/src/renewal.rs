//! The NS record cycle.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use wildcard_renew_provider::{
    CreateDnsRecordRequest, DnsProvider, DnsRecord, DnsRecordType, ProviderError, ProviderZone,
    RecordQueryParams,
};

use crate::error::RenewError;
use crate::issuer::{CertificateIssuer, IssueOutcome, IssueRequest, IssuerError};
use crate::zone::resolve_zone;

/// Wait after each NS deletion when none is given.
pub const DEFAULT_PROPAGATION: Duration = Duration::from_secs(10);

/// Inputs of one renewal run.
#[derive(Debug, Clone)]
pub struct RenewalOptions {
    /// Zone name as given by the operator.
    pub zone_name: String,
    /// Credential file, passed on to the issuer.
    pub credentials_file: PathBuf,
    /// Wait between deleting a record and running the issuer.
    pub propagation: Duration,
}

/// What happened to one NS record.
#[derive(Debug)]
pub struct RecordOutcome {
    /// The record as listed before it was deleted.
    pub record: DnsRecord,
    pub delete: Result<(), ProviderError>,
    pub issue: Result<IssueOutcome, IssuerError>,
    /// The recreated record.
    pub recreate: Result<DnsRecord, ProviderError>,
}

impl RecordOutcome {
    /// Every step succeeded and the issuer exited with status 0.
    pub fn is_clean(&self) -> bool {
        self.delete.is_ok()
            && self.issue.as_ref().is_ok_and(|o| o.success())
            && self.recreate.is_ok()
    }
}

/// Per-record outcomes of a completed run.
#[derive(Debug)]
pub struct RenewalReport {
    pub zone: ProviderZone,
    pub records: Vec<RecordOutcome>,
}

impl RenewalReport {
    /// Records whose recreation failed; these are missing from the zone now.
    pub fn missing_records(&self) -> impl Iterator<Item = &DnsRecord> {
        self.records
            .iter()
            .filter(|o| o.recreate.is_err())
            .map(|o| &o.record)
    }
}

/// Drives the delete, wait, issue, recreate sequence for every NS record of
/// a zone.
pub struct RenewalCycle {
    provider: Arc<dyn DnsProvider>,
    issuer: Arc<dyn CertificateIssuer>,
}

impl RenewalCycle {
    pub fn new(provider: Arc<dyn DnsProvider>, issuer: Arc<dyn CertificateIssuer>) -> Self {
        Self { provider, issuer }
    }

    /// Resolve the zone, list its NS records and cycle each one in turn.
    ///
    /// Fails before touching any record if the zone name is invalid, the zone
    /// does not resolve to exactly one zone, or the records cannot be listed.
    pub async fn run(&self, options: &RenewalOptions) -> Result<RenewalReport, RenewError> {
        let zone = resolve_zone(self.provider.as_ref(), &options.zone_name).await?;

        let records = self
            .provider
            .list_records(&zone.id, &RecordQueryParams::of_type(DnsRecordType::Ns))
            .await?;
        print_records(&records);
        tracing::info!("Found {} NS record(s) in {}", records.len(), zone.name);

        let request = IssueRequest {
            zone: options.zone_name.clone(),
            credentials_file: options.credentials_file.clone(),
        };

        let mut outcomes = Vec::with_capacity(records.len());
        for record in records {
            outcomes.push(self.cycle_record(record, &request, options.propagation).await);
        }

        Ok(RenewalReport {
            zone,
            records: outcomes,
        })
    }

    async fn cycle_record(
        &self,
        record: DnsRecord,
        request: &IssueRequest,
        propagation: Duration,
    ) -> RecordOutcome {
        tracing::info!("Deleting NS record {} -> {} ({})", record.name, record.content, record.id);
        let delete = self
            .provider
            .delete_record(&record.id, &record.zone_id)
            .await;
        if let Err(e) = &delete {
            tracing::warn!("Delete of {} failed, continuing: {e}", record.id);
        }

        tracing::info!("Waiting {}s for propagation", propagation.as_secs_f32());
        tokio::time::sleep(propagation).await;

        let issue = self.issuer.issue(request).await;
        match &issue {
            Ok(outcome) if !outcome.success() => {
                tracing::warn!("Issuer exited with {:?}, continuing", outcome.exit_code);
            }
            Err(e) => tracing::warn!("{e}, continuing"),
            Ok(_) => {}
        }

        let recreate = self
            .provider
            .create_record(&CreateDnsRecordRequest::recreate_unproxied(&record))
            .await;
        match &recreate {
            Ok(created) => tracing::info!(
                "Recreated NS record {} -> {} ({})",
                created.name,
                created.content,
                created.id
            ),
            Err(e) => tracing::warn!(
                "Recreate of NS record {} -> {} failed: {e}",
                record.name,
                record.content
            ),
        }

        RecordOutcome {
            record,
            delete,
            issue,
            recreate,
        }
    }
}

/// Print the listed records to stdout as the API returned them.
fn print_records(records: &[DnsRecord]) {
    match serde_json::to_string_pretty(&listing(records)) {
        Ok(json) => println!("{json}"),
        Err(_) => println!("{records:?}"),
    }
}

/// The API's own record objects; records without one are serialized as-is.
fn listing(records: &[DnsRecord]) -> Vec<serde_json::Value> {
    records
        .iter()
        .map(|r| match &r.raw {
            Some(raw) => raw.clone(),
            None => serde_json::to_value(r).unwrap_or_default(),
        })
        .collect()
}
