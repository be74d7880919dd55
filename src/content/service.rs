//! Content resolution
//!
//! Decodes a block reference back into a relative path and byte offset,
//! then serves at most one block-size worth of bytes from there.

use log::debug;
use std::sync::Arc;

use crate::BLOCK_SIZE;
use crate::content::results::FetchResult;
use crate::error::ContentError;
use crate::reference;
use crate::storage::Storage;

/// Resolves block references to file bytes.
pub struct ContentService<S> {
    storage: Arc<S>,
}

impl<S: Storage> ContentService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Fetch the bytes behind `reference`.
    ///
    /// Returns at most one block, shorter at end-of-file. Malformed and
    /// foreign references fail as not-exist, as does the transport's
    /// metadata-root probe, which never touches storage.
    pub fn fetch(&self, reference: &str) -> Result<FetchResult, ContentError> {
        debug!("fetch {}", reference);

        if reference == reference::METADATA_BASE_REF {
            return Err(ContentError::NotExist(reference.to_string()));
        }

        let (relative, offset) = reference::decode(reference)
            .ok_or_else(|| ContentError::NotExist(reference.to_string()))?;

        let data = self.storage.read_at(relative, offset, BLOCK_SIZE)?;

        Ok(FetchResult {
            reference: reference.to_string(),
            data,
        })
    }
}
