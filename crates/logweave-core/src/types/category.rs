//! Capability tags used to dispatch merge rules.
//!
//! A node's category is resolved once (by a plugin resolver) and every merge
//! decision matches on it instead of re-deriving behavior from element names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of filter element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterKind {
    /// A single filter (ThresholdFilter, MarkerFilter, ...)
    Simple,
    /// A filter group whose members are themselves filters
    Composite,
}

/// Resolved capability of a configuration element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// `Properties`: substitution variables keyed by `name`
    PropertiesGroup,
    /// `Scripts`: named scripts keyed by `name`
    ScriptsGroup,
    /// `Appenders`: output targets keyed by `name`
    AppendersGroup,
    /// `Loggers`: named loggers plus the single root logger
    LoggersGroup,
    /// Any filter element
    Filter(FilterKind),
    /// Anything else, merged by the append-all fallback
    #[default]
    Other,
}

impl Category {
    /// Whether this category is a filter of either kind
    pub fn is_filter(&self) -> bool {
        matches!(self, Category::Filter(_))
    }

    /// Whether this category is a filter group
    pub fn is_filter_group(&self) -> bool {
        matches!(self, Category::Filter(FilterKind::Composite))
    }

    /// Whether children of this category are replaced wholesale by `name`
    pub fn is_keyed_group(&self) -> bool {
        matches!(
            self,
            Category::PropertiesGroup | Category::ScriptsGroup | Category::AppendersGroup
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::PropertiesGroup => "properties",
            Category::ScriptsGroup => "scripts",
            Category::AppendersGroup => "appenders",
            Category::LoggersGroup => "loggers",
            Category::Filter(FilterKind::Simple) => "filter",
            Category::Filter(FilterKind::Composite) => "filter-group",
            Category::Other => "other",
        };
        f.write_str(label)
    }
}
