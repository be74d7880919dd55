//! Error handling
//!
//! Defines error types and handling for the file gate.

pub mod types;

pub use types::*;
