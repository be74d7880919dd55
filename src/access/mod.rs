//! Access control
//!
//! Decides whether a requesting principal may list a directory by
//! locating the nearest governing access-control file in the ancestor
//! chain and delegating rule evaluation.

pub mod evaluator;
pub mod resolver;

pub use evaluator::{Capability, Evaluator, FileReader, RuleEvaluator};
pub use resolver::AccessResolver;

/// Name of the per-directory access-control file.
pub const ACCESS_FILE: &str = "Access";
