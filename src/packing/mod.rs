//! Metadata packing
//!
//! Turns raw file records into signed protocol-level metadata entries
//! with deterministic block chunking.

pub mod entry;
pub mod signer;

pub use entry::{BlockDescriptor, EntrySynthesizer, MetadataEntry, Packing};
pub use signer::{KeySigner, Signer};
