//! Storage result types
//!
//! Defines result structures returned by storage operations.

use std::time::SystemTime;

/// A raw filesystem entry as seen by storage.
///
/// Immutable once constructed; lives only as long as the call that
/// produced it.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Cleaned root-relative path, without a leading slash.
    pub relative_path: String,
    /// Relative path of the enclosing directory; empty at the root.
    pub parent: String,
    pub is_dir: bool,
    pub size: u64,
    pub modified: SystemTime,
}
