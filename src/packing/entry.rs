//! Entry synthesis
//!
//! Builds the canonical metadata record for a file or directory:
//! block chunking with reference encoding for files, then a delegated
//! signature over the entry hash.

use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::SigningError;
use crate::packing::signer::Signer;
use crate::reference;
use crate::storage::FileRecord;
use crate::BLOCK_SIZE;

/// Content packing scheme stamped into each entry.
///
/// Selected once at construction. `Plain` serves cleartext blocks and
/// signs the entry hash only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Packing {
    Plain,
}

impl Packing {
    /// Stable one-byte identifier folded into the entry hash.
    pub fn id(self) -> u8 {
        match self {
            Packing::Plain => 1,
        }
    }
}

/// One content block of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDescriptor {
    pub reference: String,
    pub byte_offset: u64,
    pub byte_length: u64,
}

/// Protocol-level record for one file or directory.
///
/// Constructed fresh on every request and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct MetadataEntry {
    pub name: String,
    pub writer: String,
    pub is_dir: bool,
    pub packing: Packing,
    pub timestamp: i64,
    pub blocks: Vec<BlockDescriptor>,
    pub signature: Vec<u8>,
}

/// Builds signed metadata entries for one served principal.
pub struct EntrySynthesizer<G> {
    principal: String,
    packing: Packing,
    signer: G,
}

impl<G: Signer> EntrySynthesizer<G> {
    pub fn new(principal: String, packing: Packing, signer: G) -> Self {
        Self {
            principal,
            packing,
            signer,
        }
    }

    /// Synthesize the metadata entry for `record`.
    ///
    /// A signer failure aborts the single request; it indicates a
    /// misconfigured identity and is never retried here.
    pub fn synthesize(&self, record: &FileRecord) -> Result<MetadataEntry, SigningError> {
        let name = format!("{}/{}", self.principal, record.relative_path);
        let blocks = if record.is_dir {
            Vec::new()
        } else {
            block_descriptors(&record.relative_path, record.size)
        };
        let timestamp = unix_seconds(record.modified);
        let hash = entry_hash(&name, record.is_dir, self.packing, timestamp);
        let signature = self.signer.sign(&hash)?;

        Ok(MetadataEntry {
            name,
            writer: self.principal.clone(),
            is_dir: record.is_dir,
            packing: self.packing,
            timestamp,
            blocks,
            signature,
        })
    }
}

/// Split a file of `size` bytes into fixed-size block descriptors:
/// offsets 0, C, 2C, ...; every length C except a shorter final block.
fn block_descriptors(relative: &str, size: u64) -> Vec<BlockDescriptor> {
    let mut blocks = Vec::new();
    let mut offset = 0;
    let mut remaining = size;

    while remaining > 0 {
        let length = remaining.min(BLOCK_SIZE);
        blocks.push(BlockDescriptor {
            reference: reference::encode(relative, offset),
            byte_offset: offset,
            byte_length: length,
        });
        offset += length;
        remaining -= length;
    }

    blocks
}

/// Hash handed to the signer. The two zeroed buffers are placeholders
/// for a block-encryption key and a content checksum: content is served
/// unencrypted and unchecksummed under plain packing.
fn entry_hash(name: &str, is_dir: bool, packing: Packing, timestamp: i64) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update([is_dir as u8]);
    hasher.update([packing.id()]);
    hasher.update(timestamp.to_le_bytes());
    hasher.update([0u8; 32]);
    hasher.update([0u8; 32]);
    hasher.finalize().into()
}

fn unix_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs() as i64,
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct FixedSigner;

    impl Signer for FixedSigner {
        fn sign(&self, _hash: &[u8]) -> Result<Vec<u8>, SigningError> {
            Ok(vec![0xab; 64])
        }
    }

    struct BrokenSigner;

    impl Signer for BrokenSigner {
        fn sign(&self, _hash: &[u8]) -> Result<Vec<u8>, SigningError> {
            Err(SigningError::InvalidKey("no identity".to_string()))
        }
    }

    fn record(relative: &str, is_dir: bool, size: u64) -> FileRecord {
        FileRecord {
            relative_path: relative.to_string(),
            parent: crate::path::parent_of(relative).unwrap_or("").to_string(),
            is_dir,
            size,
            modified: UNIX_EPOCH + Duration::from_secs(1_700_000_000),
        }
    }

    fn synthesizer() -> EntrySynthesizer<FixedSigner> {
        EntrySynthesizer::new("a@x.com".to_string(), Packing::Plain, FixedSigner)
    }

    #[test]
    fn test_file_entry() {
        let entry = synthesizer()
            .synthesize(&record("docs/report.bin", false, 1_500_000))
            .unwrap();

        assert_eq!(entry.name, "a@x.com/docs/report.bin");
        assert_eq!(entry.writer, "a@x.com");
        assert!(!entry.is_dir);
        assert_eq!(entry.packing, Packing::Plain);
        assert_eq!(entry.timestamp, 1_700_000_000);
        assert_eq!(entry.signature, vec![0xab; 64]);
    }

    #[test]
    fn test_large_file_splits_into_two_blocks() {
        let entry = synthesizer()
            .synthesize(&record("docs/report.bin", false, 1_500_000))
            .unwrap();

        assert_eq!(
            entry.blocks,
            vec![
                BlockDescriptor {
                    reference: "docs/report.bin-0".to_string(),
                    byte_offset: 0,
                    byte_length: 1_048_576,
                },
                BlockDescriptor {
                    reference: "docs/report.bin-1048576".to_string(),
                    byte_offset: 1_048_576,
                    byte_length: 451_424,
                },
            ]
        );
    }

    #[test]
    fn test_exact_multiple_has_full_final_block() {
        let entry = synthesizer()
            .synthesize(&record("big", false, 2 * BLOCK_SIZE))
            .unwrap();

        assert_eq!(entry.blocks.len(), 2);
        assert_eq!(entry.blocks[1].byte_offset, BLOCK_SIZE);
        assert_eq!(entry.blocks[1].byte_length, BLOCK_SIZE);
    }

    #[test]
    fn test_empty_file_has_no_blocks() {
        let entry = synthesizer().synthesize(&record("empty", false, 0)).unwrap();
        assert!(entry.blocks.is_empty());
    }

    #[test]
    fn test_directory_has_no_blocks() {
        let entry = synthesizer()
            .synthesize(&record("docs", true, 4096))
            .unwrap();
        assert!(entry.is_dir);
        assert!(entry.blocks.is_empty());
    }

    #[test]
    fn test_chunking_covers_the_file_exactly() {
        for size in [1, BLOCK_SIZE - 1, BLOCK_SIZE, BLOCK_SIZE + 1, 3 * BLOCK_SIZE + 5] {
            let entry = synthesizer().synthesize(&record("f", false, size)).unwrap();

            assert_eq!(entry.blocks.len() as u64, size.div_ceil(BLOCK_SIZE));
            let mut expected_offset = 0;
            for block in &entry.blocks {
                assert_eq!(block.byte_offset, expected_offset);
                assert!(block.byte_length <= BLOCK_SIZE);
                expected_offset += block.byte_length;
            }
            assert_eq!(expected_offset, size);
        }
    }

    #[test]
    fn test_signer_failure_aborts() {
        let synthesizer =
            EntrySynthesizer::new("a@x.com".to_string(), Packing::Plain, BrokenSigner);
        assert!(synthesizer
            .synthesize(&record("docs/report.bin", false, 10))
            .is_err());
    }
}
