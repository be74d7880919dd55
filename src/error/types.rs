//! Error types
//!
//! Defines domain-specific error types for each module of the file gate.

use std::fmt;
use std::io;

/// Path parsing errors
#[derive(Debug)]
pub enum PathError {
    Empty,
    MissingPrincipal(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Empty => write!(f, "Empty path"),
            PathError::MissingPrincipal(s) => {
                write!(f, "First path segment {:?} is not a principal name", s)
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    NotFound(String),
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NotFound(p) => write!(f, "Not found: {}", p),
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

/// Access rule evaluation errors; every one of these denies (fail closed)
#[derive(Debug)]
pub enum AccessError {
    Malformed(String),
    UnknownRight(String),
    IndirectRule(String),
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::Malformed(line) => write!(f, "Malformed access rule: {}", line),
            AccessError::UnknownRight(right) => write!(f, "Unknown access right: {}", right),
            AccessError::IndirectRule(name) => {
                write!(f, "Indirect access rule not supported: {}", name)
            }
        }
    }
}

impl std::error::Error for AccessError {}

/// Signing errors
#[derive(Debug)]
pub enum SigningError {
    InvalidKey(String),
    IoError(io::Error),
}

impl fmt::Display for SigningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigningError::InvalidKey(msg) => write!(f, "Invalid signing key: {}", msg),
            SigningError::IoError(e) => write!(f, "IO error reading signing key: {}", e),
        }
    }
}

impl std::error::Error for SigningError {}

impl From<io::Error> for SigningError {
    fn from(error: io::Error) -> Self {
        SigningError::IoError(error)
    }
}

/// Metadata service errors
#[derive(Debug)]
pub enum MetadataError {
    InvalidPath(PathError),
    UnknownPrincipal(String),
    AccessDenied(String),
    Storage(StorageError),
    Signing(SigningError),
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::InvalidPath(e) => write!(f, "Invalid path: {}", e),
            MetadataError::UnknownPrincipal(p) => {
                write!(f, "Principal {:?} is not served here", p)
            }
            MetadataError::AccessDenied(p) => write!(f, "Access denied: {}", p),
            MetadataError::Storage(e) => write!(f, "Storage error: {}", e),
            MetadataError::Signing(e) => write!(f, "Signing error: {}", e),
        }
    }
}

impl std::error::Error for MetadataError {}

impl From<PathError> for MetadataError {
    fn from(error: PathError) -> Self {
        MetadataError::InvalidPath(error)
    }
}

impl From<StorageError> for MetadataError {
    fn from(error: StorageError) -> Self {
        MetadataError::Storage(error)
    }
}

impl From<SigningError> for MetadataError {
    fn from(error: SigningError) -> Self {
        MetadataError::Signing(error)
    }
}

/// Content service errors
#[derive(Debug)]
pub enum ContentError {
    NotExist(String),
    IoError(io::Error),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::NotExist(r) => write!(f, "No such reference: {}", r),
            ContentError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ContentError {}

impl From<StorageError> for ContentError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::NotFound(p) => ContentError::NotExist(p),
            StorageError::IoError(e) => ContentError::IoError(e),
        }
    }
}

/// General server error that encompasses all error types
#[derive(Debug)]
pub enum ServerError {
    Metadata(MetadataError),
    Content(ContentError),
    Signing(SigningError),
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Metadata(e) => write!(f, "Metadata error: {}", e),
            ServerError::Content(e) => write!(f, "Content error: {}", e),
            ServerError::Signing(e) => write!(f, "Signing error: {}", e),
            ServerError::Config(e) => write!(f, "Configuration error: {}", e),
            ServerError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<MetadataError> for ServerError {
    fn from(error: MetadataError) -> Self {
        ServerError::Metadata(error)
    }
}

impl From<ContentError> for ServerError {
    fn from(error: ContentError) -> Self {
        ServerError::Content(error)
    }
}

impl From<SigningError> for ServerError {
    fn from(error: SigningError) -> Self {
        ServerError::Signing(error)
    }
}

impl From<config::ConfigError> for ServerError {
    fn from(error: config::ConfigError) -> Self {
        ServerError::Config(error)
    }
}

impl From<io::Error> for ServerError {
    fn from(error: io::Error) -> Self {
        ServerError::IoError(error)
    }
}
