//! Merge strategy: folds independently authored configuration trees into one.
//!
//! Merging runs in two passes. The root-attribute fold combines the global
//! settings carried on each document root and runs once per source, in order,
//! including the source that seeded the accumulator. The tree fold then
//! consumes every later source and folds its top-level groups into the
//! accumulator.

use std::str::FromStr;

use logweave_core::{eq_folded, Level, Node};

use crate::resolver::PluginResolver;

mod tree;


/// Root attribute carrying the internal status threshold
pub const STATUS: &str = "status";

/// Root attribute carrying the reload check interval in seconds
pub const MONITOR_INTERVAL: &str = "monitorInterval";

/// Root attribute carrying the comma separated plugin packages
pub const PACKAGES: &str = "packages";

/// Element name of a logger's appender reference
pub const APPENDER_REF: &str = "AppenderRef";

/// Policy for combining configuration trees
pub trait MergeStrategy: Send + Sync {
    /// Fold the attributes of `source_root` onto `root`.
    ///
    /// Must be idempotent when `source_root` is the tree `root` was seeded from.
    fn merge_root_properties(&self, root: &mut Node, source_root: &Node);

    /// Fold the children of `source` into `target`, consuming `source`
    fn merge_configurations(&self, target: &mut Node, source: Node, resolver: &dyn PluginResolver);
}

/// The standard merge rules
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMergeStrategy;

impl MergeStrategy for DefaultMergeStrategy {
    fn merge_root_properties(&self, root: &mut Node, source_root: &Node) {
        for (key, value) in source_root.attributes().iter() {
            let Some(current) = root.attr(key).map(str::to_string) else {
                root.set_attr(key, value);
                continue;
            };

            let merged = if eq_folded(key, STATUS) {
                merge_status(&current, value)
            } else if eq_folded(key, MONITOR_INTERVAL) {
                merge_monitor_interval(&current, value)
            } else if eq_folded(key, PACKAGES) {
                merge_packages(&current, value)
            } else {
                value.to_string()
            };

            if merged != current {
                tracing::trace!(key, from = %current, to = %merged, "root attribute merged");
                root.set_attr(key, merged);
            }
        }
    }

    fn merge_configurations(&self, target: &mut Node, source: Node, resolver: &dyn PluginResolver) {
        tree::fold_children(target, source, resolver);
    }
}

fn parse_level(key: &str, value: &str) -> Option<Level> {
    match Level::from_str(value) {
        Ok(level) => Some(level),
        Err(e) => {
            tracing::warn!(key, value, "ignoring unparseable status: {}", e);
            None
        },
    }
}

fn parse_interval(value: &str) -> Option<u32> {
    match value.trim().parse::<u32>() {
        Ok(seconds) => Some(seconds),
        Err(e) => {
            tracing::warn!(key = MONITOR_INTERVAL, value, "ignoring unparseable interval: {}", e);
            None
        },
    }
}

/// The less specific of two status levels wins
fn merge_status(current: &str, incoming: &str) -> String {
    match (parse_level(STATUS, current), parse_level(STATUS, incoming)) {
        (Some(existing), Some(level)) if level.is_less_specific_than(existing) => {
            incoming.to_string()
        },
        (None, Some(_)) => incoming.to_string(),
        _ => current.to_string(),
    }
}

/// A disabled interval always yields; otherwise the smaller positive interval wins
fn merge_monitor_interval(current: &str, incoming: &str) -> String {
    match (parse_interval(current), parse_interval(incoming)) {
        (Some(0), Some(_)) | (None, Some(_)) => incoming.to_string(),
        (Some(existing), Some(seconds)) if seconds > 0 && seconds < existing => {
            incoming.to_string()
        },
        _ => current.to_string(),
    }
}

/// Union of both package lists, existing entries first
fn merge_packages(current: &str, incoming: &str) -> String {
    let mut packages = split_packages(current);
    for package in split_packages(incoming) {
        if !packages.contains(&package) {
            packages.push(package);
        }
    }
    packages.join(",")
}

/// Split a comma separated package list, dropping blanks
pub fn split_packages(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|package| !package.is_empty())
        .map(str::to_string)
        .collect()
}
