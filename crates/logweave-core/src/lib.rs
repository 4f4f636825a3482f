//! # logweave-core
//!
//! Core types shared across all logweave crates.
//!
//! This crate provides:
//! - `Node`, the owned configuration element tree that sources are parsed into
//!   and that the merge engine folds
//! - `Attributes`, a case-insensitive, case-preserving attribute map
//! - `Category` and `FilterKind`, the resolved capability tags used for merge dispatch
//! - `Level`, the diagnostic severity scale used by the `status` root attribute
//! - `LogweaveError` for unified error handling
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Tree and attribute types
//! - `error`: Error types and result aliases

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{LogweaveError, LogweaveResult};
pub use types::{eq_folded, Attributes, Category, FilterKind, Level, LevelError, LoggerIdentity, Node};
