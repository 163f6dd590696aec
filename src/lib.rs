//! # ipspan - Minimal CIDR cover of IP address ranges
//!
//! ipspan turns an inclusive range of IPv4 or IPv6 addresses into the
//! smallest ordered list of CIDR blocks that covers exactly that range, and
//! validates/deduplicates lists of blocks that are already split.
//!
//! ## Example Usage
//!
//! ```rust
//! use ipspan::{decompose_range, normalize_cidrs, DecomposeError};
//!
//! let blocks = decompose_range("10.0.0.4", "10.0.0.11").unwrap();
//! assert_eq!(blocks, vec!["10.0.0.4/30", "10.0.0.8/30"]);
//!
//! let blocks = normalize_cidrs(["10.0.0.0/8", "10.0.0.0/8"]).unwrap();
//! assert_eq!(blocks, vec!["10.0.0.0/8"]);
//!
//! assert!(matches!(
//!     decompose_range("10.0.0.0", "::1"),
//!     Err(DecomposeError::FamilyMismatch { .. })
//! ));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Address, range and CIDR block value types
//! - [`decompose`] - The greedy range decomposition and normalization
//! - [`registry`] - Registry allocation records handed to the core
//! - [`config`] - Settings management
//! - [`error`] - Error types
//! - [`output`] - Output formatting utilities
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod decompose;
pub mod error;
pub mod output;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use decompose::{
    decompose, decompose_blocks, decompose_range, normalize_blocks, normalize_cidrs, Decomposition,
};
pub use error::{CliError, DecomposeError};
pub use types::{Address, AddressRange, CidrBlock, Family};
