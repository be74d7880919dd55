//! Content service
//!
//! Serves bounded byte ranges addressed by opaque block references.

pub mod results;
pub mod service;

pub use results::FetchResult;
pub use service::ContentService;
