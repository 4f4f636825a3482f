//! Multi-source configuration merge engine for logweave
//!
//! This crate folds an ordered list of parsed configuration trees into one
//! deterministic tree of appenders, loggers, filters and properties, and
//! interprets the merged root attributes into global settings.

pub mod composite;
pub mod document;
pub mod merge;
pub mod resolver;
pub mod settings;
pub mod source;
pub mod watch;

// Re-export main types
pub use composite::CompositeConfiguration;
pub use document::{DocumentFactory, DocumentFormat, NodeDocument};
pub use merge::{DefaultMergeStrategy, MergeStrategy};
pub use resolver::{DefaultPluginResolver, GroupDescriptor, PluginResolver};
pub use settings::{Destination, Settings};
pub use source::{ConfigurationFactory, Locator, Source};
pub use watch::{ChangeCallback, WatchManager};

use logweave_core::error::LogweaveError;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, LogweaveError>;
