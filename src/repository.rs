//! The repository owns the authoritative record collection: id assignment,
//! ordering, and merge-on-import. It is the sole writer against its
//! [`RecordStore`] within a running instance.
//!
//! Every mutating operation either fully succeeds (the store holds the new
//! state) or fully fails (the store is unchanged for that record and the
//! error is returned to the caller). There is no partially applied state
//! for a single record, and no cross-record transaction: a batch import is
//! a sequence of independent single-record writes.

use crate::error::{LogbookError, Result};
use crate::model::{new_case_id, CaseFields, CaseRecord};
use crate::store::RecordStore;
use std::cmp::Ordering;

/// Outcome of a bulk import. Partial success is expected and reported,
/// never escalated to whole-batch failure.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Records persisted.
    pub added: usize,
    /// Per-item failures, keyed by position in the input batch.
    pub errors: Vec<(usize, String)>,
}

pub struct CaseRepository<S: RecordStore> {
    pub(crate) store: S,
}

impl<S: RecordStore> CaseRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read every stored record, newest first: descending by date, ties
    /// broken by descending id.
    ///
    /// Entries that cannot be read back, or that carry no id, are skipped
    /// and logged rather than failing the whole load; keeping the good
    /// data reachable wins over completeness of one read. Only a store
    /// that cannot enumerate its keys at all fails the call.
    pub fn load_all(&self) -> Result<Vec<CaseRecord>> {
        let keys = self.store.list_keys()?;
        let mut records = Vec::with_capacity(keys.len());

        for key in keys {
            match self.store.get(&key) {
                Ok(Some(record)) => {
                    if record.id.is_empty() {
                        tracing::warn!(key = %key, "skipping stored entry without an id");
                    } else {
                        records.push(record);
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "skipping unreadable entry");
                }
            }
        }

        records.sort_by(compare_newest_first);
        Ok(records)
    }

    /// Fetch a single record by id.
    pub fn get(&self, id: &str) -> Result<CaseRecord> {
        self.store
            .get(id)?
            .ok_or_else(|| LogbookError::CaseNotFound(id.to_string()))
    }

    /// Persist a new record built from `fields`, assigning a fresh id.
    ///
    /// On failure nothing becomes visible: the record is only returned
    /// once the store has acknowledged the write.
    pub fn create(&mut self, fields: CaseFields) -> Result<CaseRecord> {
        let record = CaseRecord::new(fields);
        self.store.set(&record.id, &record)?;
        Ok(record)
    }

    /// Replace a stored record wholesale.
    ///
    /// Upsert semantics: an id that is not currently stored is written as
    /// a new entry rather than rejected. A record without an id is refused.
    pub fn update(&mut self, record: &CaseRecord) -> Result<()> {
        if record.id.is_empty() {
            return Err(LogbookError::MissingId);
        }
        self.store.set(&record.id, record)
    }

    /// Remove a record. Idempotent: deleting an absent id succeeds.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        self.store.delete(id)
    }

    /// Remove every record. Irreversible; meant for an explicit user
    /// reset. The store stays usable afterwards.
    pub fn clear_all(&mut self) -> Result<()> {
        self.store.clear()
    }

    /// Merge an externally supplied batch, one persisted record per item.
    ///
    /// Items without an id get a fresh one; identity is never inferred
    /// from content, so re-importing id-less rows produces new records
    /// every time. Items that do carry an id keep it, which makes
    /// re-importing a previous export replace by id. Per-item failures
    /// are collected and the rest of the batch continues.
    pub fn import_batch(&mut self, batch: Vec<CaseRecord>) -> Result<ImportReport> {
        let mut report = ImportReport::default();

        for (index, mut record) in batch.into_iter().enumerate() {
            if record.id.is_empty() {
                record.id = new_case_id();
            }
            match self.store.set(&record.id, &record) {
                Ok(()) => report.added += 1,
                Err(err) => {
                    tracing::warn!(index, error = %err, "import item failed");
                    report.errors.push((index, err.to_string()));
                }
            }
        }

        Ok(report)
    }
}

/// Descending by date, ties broken by descending id, so records sharing a
/// date keep a stable, deterministic order.
fn compare_newest_first(a: &CaseRecord, b: &CaseRecord) -> Ordering {
    b.fields
        .date
        .cmp(&a.fields.date)
        .then_with(|| b.id.cmp(&a.id))
}
