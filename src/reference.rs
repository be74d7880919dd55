//! Block references
//!
//! Opaque strings encoding (relative path, byte offset) so content
//! retrieval is indirected through the metadata layer instead of using
//! real filenames.

/// Sentinel reference the transport layer sends to probe the metadata
/// root; it never resolves to content.
pub const METADATA_BASE_REF: &str = "metadata:base";

/// Encode the block reference for `relative` at `offset`.
pub fn encode(relative: &str, offset: u64) -> String {
    format!("{}-{}", relative, offset)
}

/// Decode a block reference into (relative path, byte offset).
///
/// The split is on the last `-`: file names may themselves contain `-`,
/// so the offset suffix must be unambiguous from the right. The offset
/// must be all decimal digits.
pub fn decode(reference: &str) -> Option<(&str, u64)> {
    let (relative, digits) = reference.rsplit_once('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let offset = digits.parse().ok()?;
    Some((relative, offset))
}
