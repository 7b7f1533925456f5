//! Store bootstrap: choosing where the logbook lives on disk.

use crate::error::{LogbookError, Result};
use crate::repository::CaseRepository;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

/// The per-user data directory for the logbook.
pub fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "caselog", "caselog").ok_or_else(|| {
        LogbookError::Storage("could not determine a user data directory".to_string())
    })?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

/// Open a repository over the default on-disk store location.
pub fn open_default() -> Result<CaseRepository<FileStore>> {
    Ok(CaseRepository::new(FileStore::new(default_data_dir()?)))
}
