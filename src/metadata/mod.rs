//! Metadata service
//!
//! The produced query surface: stat-by-path and list-by-pattern over
//! the served principal's tree.

pub mod service;

pub use service::MetadataService;
