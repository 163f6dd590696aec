//! Error types for ipspan.
//!
//! Uses `thiserror` for ergonomic error definitions.

use crate::types::{Address, AddressError, CidrError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by range decomposition and CIDR normalization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecomposeError {
    #[error(transparent)]
    InvalidAddress(#[from] AddressError),

    #[error("address family mismatch: {start} is {}, {end} is {}", .start.family(), .end.family())]
    FamilyMismatch { start: Address, end: Address },

    #[error("invalid range: start {start} is greater than end {end}")]
    InvalidRange { start: Address, end: Address },

    #[error("invalid CIDR block: {0}")]
    InvalidCidr(CidrError),
}

impl From<CidrError> for DecomposeError {
    fn from(err: CidrError) -> Self {
        match err {
            CidrError::Address(e) => Self::InvalidAddress(e),
            other => Self::InvalidCidr(other),
        }
    }
}

/// Result type alias for decomposition operations.
pub type DecomposeResult<T> = Result<T, DecomposeError>;

/// Errors raised while reading registry allocation data.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("invalid registry response: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    #[error("registry record has neither a CIDR list nor a start/end address pair")]
    NoAllocation,

    #[error("invalid CIDR entry at index {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error(transparent)]
    Decompose(#[from] DecomposeError),
}

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid configuration format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error for CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Decompose(#[from] DecomposeError),

    #[error(transparent)]
    Registry(RegistryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Other(String),
}

impl From<RegistryError> for CliError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Decompose(e) => Self::Decompose(e),
            other => Self::Registry(other),
        }
    }
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
