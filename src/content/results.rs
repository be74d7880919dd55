//! Content result types
//!
//! Defines result structures returned by content operations.

/// Bytes served for one block reference.
///
/// The reference is echoed back as a receipt for the transport layer.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub reference: String,
    pub data: Vec<u8>,
}
