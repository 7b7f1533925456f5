use super::RecordStore;
use crate::error::{LogbookError, Result};
use crate::model::CaseRecord;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const RECORD_PREFIX: &str = "case-";
const RECORD_EXT: &str = ".json";

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// File-based store: one JSON document per record, named
/// `case-{id}.json`, inside a dedicated directory.
///
/// The filename prefix keeps record files apart from anything else that
/// ends up in the directory, so `clear` and `list_keys` never touch
/// unrelated files.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(LogbookError::Io)?;
        }
        Ok(())
    }

    fn record_path(&self, key: &str) -> Result<PathBuf> {
        if !is_valid_key(key) {
            return Err(LogbookError::Storage(format!(
                "key not usable as a filename: {:?}",
                key
            )));
        }
        Ok(self
            .root
            .join(format!("{}{}{}", RECORD_PREFIX, key, RECORD_EXT)))
    }
}

impl RecordStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<CaseRecord>> {
        // A key that could never be stored is necessarily absent.
        let path = match self.record_path(key) {
            Ok(path) => path,
            Err(_) => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(LogbookError::Io)?;
        let record = serde_json::from_str(&content).map_err(LogbookError::Serialization)?;
        Ok(Some(record))
    }

    fn set(&mut self, key: &str, record: &CaseRecord) -> Result<()> {
        self.ensure_root()?;
        let target = self.record_path(key)?;
        let content = serde_json::to_string_pretty(record).map_err(LogbookError::Serialization)?;

        // Atomic write: a failed write never clobbers the committed document.
        let tmp = self.root.join(format!(".case-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, content).map_err(LogbookError::Io)?;
        fs::rename(&tmp, target).map_err(LogbookError::Io)?;

        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        // A key that could never be stored is necessarily absent.
        let path = match self.record_path(key) {
            Ok(path) => path,
            Err(_) => return Ok(()),
        };
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(LogbookError::Io(err)),
        }
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        let entries = fs::read_dir(&self.root).map_err(LogbookError::Io)?;
        for entry in entries {
            let entry = entry.map_err(LogbookError::Io)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                if let Some(key) = name
                    .strip_prefix(RECORD_PREFIX)
                    .and_then(|s| s.strip_suffix(RECORD_EXT))
                {
                    if is_valid_key(key) {
                        keys.push(key.to_string());
                    }
                }
            }
        }
        Ok(keys)
    }

    fn clear(&mut self) -> Result<()> {
        for key in self.list_keys()? {
            let path = self.record_path(&key)?;
            fs::remove_file(&path).map_err(LogbookError::Io)?;
        }
        Ok(())
    }
}
