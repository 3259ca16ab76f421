//! Record reconciliation: generic record batches applied through a [`ZoneClient`].

use async_trait::async_trait;

use crate::convert::{to_generic_record, to_provider_record};
use crate::error::{BatchError, BatchResult, ProviderError, Result};
use crate::traits::{DnsProvider, ZoneClient};
use crate::types::{ProviderRecord, Record, Zone};

/// Applies [`Record`] batches to one provider through its [`ZoneClient`].
///
/// Holds no state besides the client: every call resolves the zone and reads
/// a fresh record snapshot. Concurrent `set_records` calls on the same zone
/// are not coordinated.
pub struct RecordReconciler<C> {
    client: C,
}

impl<C: ZoneClient> RecordReconciler<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    fn provider(&self) -> &'static str {
        self.client.provider_name()
    }

    /// Resolve the zone and read all of its records.
    async fn snapshot(&self, zone: &str) -> Result<(Zone, Vec<ProviderRecord>)> {
        let zone = self.client.resolve_zone(zone).await?;
        let records = self.client.list_records(zone.id).await?;
        log::debug!(
            "[{}] Zone {} ({}) has {} record(s)",
            self.provider(),
            zone.name,
            zone.id,
            records.len()
        );
        Ok((zone, records))
    }

    /// Generic form of a record the provider just returned; falls back to the
    /// requested record when the response cannot be translated.
    fn applied(&self, response: &ProviderRecord, requested: &Record) -> Record {
        match to_generic_record(response, self.provider()) {
            Ok(record) => record,
            Err(e) => {
                log::warn!(
                    "[{}] Record {:?} was applied but the response is unreadable: {e}",
                    self.provider(),
                    response.id
                );
                requested.clone()
            }
        }
    }

    fn stop(&self, operation: &str, processed: Vec<Record>, error: ProviderError) -> BatchError {
        log::warn!(
            "[{}] {operation} stopped after {} record(s): {error}",
            self.provider(),
            processed.len()
        );
        BatchError::new(processed, error)
    }
}

/// First existing record with the same name and type.
pub(crate) fn find_record<'a>(
    existing: &'a [ProviderRecord],
    wanted: &ProviderRecord,
) -> Option<&'a ProviderRecord> {
    existing.iter().find(|r| r.same_name_and_type(wanted))
}

/// First existing record with the same name, type and value, including the
/// MX/SRV/CAA fields kept outside `data`.
pub(crate) fn find_record_with_value<'a>(
    existing: &'a [ProviderRecord],
    wanted: &ProviderRecord,
) -> Option<&'a ProviderRecord> {
    existing.iter().find(|r| r.same_value_as(wanted))
}

#[async_trait]
impl<C: ZoneClient> DnsProvider for RecordReconciler<C> {
    fn id(&self) -> &'static str {
        self.provider()
    }

    async fn list_records(&self, zone: &str) -> Result<Vec<Record>> {
        let (zone, existing) = self.snapshot(zone).await?;

        let records = existing
            .iter()
            .filter_map(|wire| match to_generic_record(wire, self.provider()) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!(
                        "[{}] Skipping record {:?} in zone {}: {e}",
                        self.provider(),
                        wire.id,
                        zone.name
                    );
                    None
                }
            })
            .collect();

        Ok(records)
    }

    async fn append_records(&self, zone: &str, records: &[Record]) -> BatchResult {
        let zone = self
            .client
            .resolve_zone(zone)
            .await
            .map_err(BatchError::before_any)?;

        let mut results = Vec::with_capacity(records.len());
        for record in records {
            let wire = match to_provider_record(record, self.provider()) {
                Ok(wire) => wire,
                Err(e) => return Err(self.stop("append", results, e)),
            };
            match self.client.create_record(zone.id, &wire).await {
                Ok(created) => results.push(self.applied(&created, record)),
                Err(e) => return Err(self.stop("append", results, e)),
            }
        }

        Ok(results)
    }

    // Matches against the snapshot taken at the start of the batch: two
    // requests for one (name, type) on an empty zone both create.
    async fn set_records(&self, zone: &str, records: &[Record]) -> BatchResult {
        let (zone, existing) = self.snapshot(zone).await.map_err(BatchError::before_any)?;

        let mut results = Vec::with_capacity(records.len());
        for record in records {
            let wanted = match to_provider_record(record, self.provider()) {
                Ok(wire) => wire,
                Err(e) => return Err(self.stop("set", results, e)),
            };

            let outcome = if let Some(current) = find_record(&existing, &wanted) {
                let mut update = current.clone();
                update.take_value_from(&wanted);
                log::debug!(
                    "[{}] Updating {} (id {:?}) in place",
                    self.provider(),
                    record,
                    update.id
                );
                self.client.update_record(zone.id, &update).await
            } else {
                log::debug!("[{}] No match for {}, creating it", self.provider(), record);
                self.client.create_record(zone.id, &wanted).await
            };

            match outcome {
                Ok(applied) => results.push(self.applied(&applied, record)),
                Err(e) => return Err(self.stop("set", results, e)),
            }
        }

        Ok(results)
    }

    async fn delete_records(&self, zone: &str, records: &[Record]) -> BatchResult {
        let (zone, mut existing) = self.snapshot(zone).await.map_err(BatchError::before_any)?;

        let mut results = Vec::with_capacity(records.len());
        for record in records {
            let wanted = match to_provider_record(record, self.provider()) {
                Ok(wire) => wire,
                Err(e) => return Err(self.stop("delete", results, e)),
            };

            let target = find_record_with_value(&existing, &wanted).and_then(|r| r.id);
            let Some(record_id) = target else {
                let e = ProviderError::RecordNotFound {
                    provider: self.provider().to_string(),
                    record: record.to_string(),
                    raw_message: None,
                };
                return Err(self.stop("delete", results, e));
            };

            if let Err(e) = self.client.delete_record(zone.id, record_id).await {
                return Err(self.stop("delete", results, e));
            }
            // A repeated request must not match the record just removed
            existing.retain(|r| r.id != Some(record_id));
            results.push(record.clone());
        }

        Ok(results)
    }
}
