//! Local filesystem storage
//!
//! Serves a single root directory. Every handle is opened and released
//! within one operation; nothing is held across calls.

use log::debug;
use std::fs;
use std::io::{Read, Seek, SeekFrom};
use std::path::PathBuf;
use std::time::UNIX_EPOCH;

use crate::error::StorageError;
use crate::path;
use crate::storage::results::FileRecord;
use crate::storage::validation::confine;
use crate::storage::Storage;

/// Storage over a local root directory.
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute path for a client-supplied name, confined under the root.
    fn resolve(&self, name: &str) -> PathBuf {
        confine(&self.root, name)
    }
}

impl Storage for LocalStorage {
    fn stat(&self, name: &str) -> Result<FileRecord, StorageError> {
        let real_path = self.resolve(name);
        let metadata =
            fs::metadata(&real_path).map_err(|_| StorageError::NotFound(name.to_string()))?;

        let relative = path::clean(name);
        let parent = path::parent_of(&relative).unwrap_or("").to_string();

        debug!("stat {} (real: {})", relative, real_path.display());

        Ok(FileRecord {
            relative_path: relative,
            parent,
            is_dir: metadata.is_dir(),
            size: metadata.len(),
            modified: metadata.modified().unwrap_or(UNIX_EPOCH),
        })
    }

    fn list(&self, name: &str) -> Result<Vec<FileRecord>, StorageError> {
        let real_path = self.resolve(name);
        let entries =
            fs::read_dir(&real_path).map_err(|_| StorageError::NotFound(name.to_string()))?;

        let parent = path::clean(name);
        let mut records = Vec::new();

        for entry in entries {
            let entry = entry?;
            let metadata = entry.metadata()?;
            let child_name = entry.file_name().to_string_lossy().to_string();
            let relative = if parent.is_empty() {
                child_name
            } else {
                format!("{}/{}", parent, child_name)
            };
            records.push(FileRecord {
                relative_path: relative,
                parent: parent.clone(),
                is_dir: metadata.is_dir(),
                size: metadata.len(),
                modified: metadata.modified().unwrap_or(UNIX_EPOCH),
            });
        }

        // fs::read_dir order is platform-defined; listings are name-ordered.
        records.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        debug!(
            "list {} (real: {}) - {} entries",
            parent,
            real_path.display(),
            records.len()
        );

        Ok(records)
    }

    fn read_access_control(&self, name: &str) -> Option<Vec<u8>> {
        fs::read(self.resolve(name)).ok()
    }

    fn read_at(&self, name: &str, offset: u64, max_length: u64) -> Result<Vec<u8>, StorageError> {
        let real_path = self.resolve(name);
        let mut file =
            fs::File::open(&real_path).map_err(|_| StorageError::NotFound(name.to_string()))?;

        file.seek(SeekFrom::Start(offset))?;

        let mut data = Vec::new();
        file.take(max_length).read_to_end(&mut data)?;

        debug!(
            "read_at {} offset={} -> {} bytes",
            name,
            offset,
            data.len()
        );

        Ok(data)
    }
}
