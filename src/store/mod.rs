//! # Storage Layer
//!
//! This module defines the persistence boundary for the logbook. The
//! [`RecordStore`] trait is a key-value contract over whole records, keyed
//! by the record id.
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `MemoryStore` (no filesystem needed)
//! - Allow **future backends** (embedded database, sync target) without
//!   changing repository logic
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One JSON document per record: `case-{id}.json`
//!   - Writes are atomic (temp file then rename)
//! - [`memory::MemoryStore`]: In-memory storage for testing, with failure
//!   simulation hooks
//!
//! ## Contract
//!
//! A failed operation must leave previously committed entries intact.
//! Deleting an absent key is not an error. `clear` removes every record
//! but nothing outside the store's own namespace.

use crate::error::Result;
use crate::model::CaseRecord;

pub mod fs;
pub mod memory;

/// Abstract key-value interface for record persistence.
pub trait RecordStore {
    /// Fetch a record by key. `Ok(None)` means the key is absent; `Err`
    /// is reserved for entries that exist but cannot be read back.
    fn get(&self, key: &str) -> Result<Option<CaseRecord>>;

    /// Write a record under a key (create or replace).
    fn set(&mut self, key: &str, record: &CaseRecord) -> Result<()>;

    /// Remove a key. Removing an absent key succeeds.
    fn delete(&mut self, key: &str) -> Result<()>;

    /// List every key currently stored.
    fn list_keys(&self) -> Result<Vec<String>>;

    /// Remove every record.
    fn clear(&mut self) -> Result<()>;
}
