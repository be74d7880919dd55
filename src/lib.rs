//! Dirgate
//!
//! Exposes a local directory tree as a remotely addressable, path-named
//! file hierarchy: a metadata service answers path and listing queries
//! with access control, and a content service serves bounded byte
//! ranges addressed by opaque block references.

pub mod access;
pub mod config;
pub mod content;
pub mod error;
pub mod metadata;
pub mod packing;
pub mod path;
pub mod reference;
pub mod storage;

pub use content::ContentService;
pub use metadata::MetadataService;
pub use storage::LocalStorage;

/// Fixed maximum byte length of any single content block; also bounds a
/// single content read.
pub const BLOCK_SIZE: u64 = 1024 * 1024;
