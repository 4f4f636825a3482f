//! Core data types for logweave configuration trees.
//!
//! This module provides the fundamental types used throughout the workspace:
//! - The configuration element tree (`Node`) and its attribute map
//! - Category tags resolved once per node and used for merge dispatch
//! - Severity levels for the root `status` attribute

pub mod attributes;
pub mod category;
pub mod level;
pub mod node;

// Re-export all public types
pub use attributes::{eq_folded, Attributes};
pub use category::{Category, FilterKind};
pub use level::{Level, LevelError};
pub use node::{LoggerIdentity, Node, NAME_ATTRIBUTE, REF_ATTRIBUTE};
