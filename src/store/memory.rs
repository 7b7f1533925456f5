use super::RecordStore;
use crate::error::{LogbookError, Result};
use crate::model::CaseRecord;
use std::collections::{HashMap, HashSet};

/// In-memory store for testing.
///
/// Besides plain storage it can simulate the failure modes the repository
/// has to tolerate: refusing all writes, refusing writes to one key, and
/// entries that exist but cannot be read back.
#[derive(Default)]
pub struct MemoryStore {
    records: HashMap<String, CaseRecord>,
    unreadable: HashSet<String>,
    unwritable: HashSet<String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, for error-path testing.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Make writes to one key fail while the rest of the store keeps
    /// working, for partial-batch testing.
    pub fn set_unwritable(&mut self, key: &str) {
        self.unwritable.insert(key.to_string());
    }

    /// Mark a stored key as unreadable, as if its entry were corrupt.
    /// The key still shows up in `list_keys`.
    pub fn set_unreadable(&mut self, key: &str) {
        self.unreadable.insert(key.to_string());
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<CaseRecord>> {
        if self.unreadable.contains(key) {
            return Err(LogbookError::Storage(format!(
                "simulated unreadable entry: {}",
                key
            )));
        }
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, record: &CaseRecord) -> Result<()> {
        if self.fail_writes || self.unwritable.contains(key) {
            return Err(LogbookError::Storage("simulated write error".to_string()));
        }
        self.records.insert(key.to_string(), record.clone());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.records.remove(key);
        self.unreadable.remove(key);
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        Ok(self.records.keys().cloned().collect())
    }

    fn clear(&mut self) -> Result<()> {
        if self.fail_writes {
            return Err(LogbookError::Storage("simulated write error".to_string()));
        }
        self.records.clear();
        self.unreadable.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CaseFields, CaseRecord};

    fn record(id: &str) -> CaseRecord {
        CaseRecord {
            id: id.to_string(),
            fields: CaseFields::default(),
        }
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut store = MemoryStore::new();
        store.set("a", &record("a")).unwrap();

        let loaded = store.get("a").unwrap();
        assert_eq!(loaded.unwrap().id, "a");
    }

    #[test]
    fn test_get_absent_key_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_delete_absent_key_succeeds() {
        let mut store = MemoryStore::new();
        store.delete("missing").unwrap();
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut store = MemoryStore::new();
        store.set("a", &record("a")).unwrap();
        store.set("b", &record("b")).unwrap();
        store.clear().unwrap();
        assert!(store.list_keys().unwrap().is_empty());
    }

    #[test]
    fn test_simulated_write_error() {
        let mut store = MemoryStore::new();
        store.set_fail_writes(true);
        assert!(store.set("a", &record("a")).is_err());
        assert!(store.list_keys().unwrap().is_empty());
    }

    #[test]
    fn test_unreadable_key_still_listed() {
        let mut store = MemoryStore::new();
        store.set("a", &record("a")).unwrap();
        store.set_unreadable("a");

        assert_eq!(store.list_keys().unwrap(), vec!["a".to_string()]);
        assert!(store.get("a").is_err());
    }
}
