//! Access resolution
//!
//! Walks from the target directory up to the principal's root looking
//! for the nearest access-control file; the deepest existing file
//! governs, and every failure path denies.

use log::debug;
use std::sync::Arc;

use crate::access::evaluator::{Capability, Evaluator, FileReader};
use crate::access::ACCESS_FILE;
use crate::error::AccessError;
use crate::path::PathName;
use crate::storage::Storage;

/// Resolves list-permission questions against stored access files.
pub struct AccessResolver<S, E> {
    storage: Arc<S>,
    evaluator: E,
}

impl<S: Storage, E: Evaluator> AccessResolver<S, E> {
    pub fn new(storage: Arc<S>, evaluator: E) -> Self {
        Self { storage, evaluator }
    }

    /// May `requester` list the contents of `dir`?
    ///
    /// Performs at most one storage lookup per ancestor level. With no
    /// authenticated requester, or no governing file anywhere up to and
    /// including the root, the answer is deny.
    pub fn can_list(&self, requester: Option<&str>, dir: &PathName) -> bool {
        let Some(requester) = requester else {
            debug!("list {} denied: no authenticated principal", dir.full());
            return false;
        };

        let mut current = dir.clone();
        loop {
            let access_name = access_file_at(current.relative());
            if let Some(contents) = self.storage.read_access_control(&access_name) {
                let read_file: FileReader<'_> =
                    &|name: &str| Err(AccessError::IndirectRule(name.to_string()));
                return match self.evaluator.evaluate(
                    requester,
                    Capability::List,
                    &current,
                    &contents,
                    read_file,
                ) {
                    Ok(allowed) => allowed,
                    Err(e) => {
                        // Fail closed; indistinguishable from denial.
                        debug!("access file {} rejected: {}", access_name, e);
                        false
                    }
                };
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }
}

/// Location of the access-control file governing `dir`.
fn access_file_at(dir: &str) -> String {
    if dir.is_empty() {
        ACCESS_FILE.to_string()
    } else {
        format!("{}/{}", dir, ACCESS_FILE)
    }
}
