//! Metadata queries
//!
//! Answers "what exists at this path" and "what is under this path",
//! rejecting foreign principals and access-checking listings.

use log::debug;
use std::sync::Arc;

use crate::access::{AccessResolver, Evaluator};
use crate::error::MetadataError;
use crate::packing::{EntrySynthesizer, MetadataEntry, Packing, Signer};
use crate::path::PathName;
use crate::storage::Storage;

/// Path-named metadata over one principal's tree.
pub struct MetadataService<S, E, G> {
    principal: String,
    storage: Arc<S>,
    access: AccessResolver<S, E>,
    synthesizer: EntrySynthesizer<G>,
}

impl<S: Storage, E: Evaluator, G: Signer> MetadataService<S, E, G> {
    pub fn new(principal: String, storage: Arc<S>, evaluator: E, signer: G) -> Self {
        let access = AccessResolver::new(Arc::clone(&storage), evaluator);
        let synthesizer = EntrySynthesizer::new(principal.clone(), Packing::Plain, signer);
        Self {
            principal,
            storage,
            access,
            synthesizer,
        }
    }

    /// Stat-by-path: the signed metadata entry for one file or directory.
    pub fn lookup(&self, name: &str) -> Result<MetadataEntry, MetadataError> {
        debug!("lookup {}", name);

        let path = PathName::parse(name)?;
        if path.principal() != self.principal {
            return Err(MetadataError::UnknownPrincipal(
                path.principal().to_string(),
            ));
        }

        let record = self.storage.stat(path.relative())?;
        Ok(self.synthesizer.synthesize(&record)?)
    }

    /// List-by-pattern: entries under a principal-prefixed directory
    /// pattern with a trailing `*` wildcard, access-checked against the
    /// requesting principal.
    pub fn list(
        &self,
        requester: Option<&str>,
        pattern: &str,
    ) -> Result<Vec<MetadataEntry>, MetadataError> {
        debug!("list {} for {:?}", pattern, requester);

        let target = pattern.strip_suffix('*').unwrap_or(pattern);
        let path = PathName::parse(target)?;
        if path.principal() != self.principal {
            return Err(MetadataError::UnknownPrincipal(
                path.principal().to_string(),
            ));
        }

        if !self.access.can_list(requester, &path) {
            return Err(MetadataError::AccessDenied(path.full()));
        }

        let records = self.storage.list(path.relative())?;
        let mut entries = Vec::with_capacity(records.len());
        for record in &records {
            entries.push(self.synthesizer.synthesize(record)?);
        }

        Ok(entries)
    }
}
