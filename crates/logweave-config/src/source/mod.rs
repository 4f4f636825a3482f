//! Configuration sources and the factory that (re)loads them.

use std::fmt;
use std::time::SystemTime;

use camino::{Utf8Path, Utf8PathBuf};
use logweave_core::Node;

use crate::merge::MONITOR_INTERVAL;
use crate::resolver::PluginResolver;
use crate::ConfigResult;

/// Re-resolvable address of a configuration document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    path: Utf8PathBuf,
}

impl Locator {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Lowercased file extension, if any
    pub fn extension(&self) -> Option<String> {
        self.path.extension().map(str::to_lowercase)
    }

    /// Modification time of the document, or `None` when it cannot be stat'ed
    pub fn last_modified(&self) -> Option<SystemTime> {
        std::fs::metadata(&self.path)
            .and_then(|metadata| metadata.modified())
            .ok()
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// One parsed configuration document
#[derive(Debug, Clone)]
pub struct Source {
    tree: Node,
    locator: Option<Locator>,
    watch_interval: u32,
    last_modified: Option<SystemTime>,
}

impl Source {
    /// Wrap an already-parsed tree.
    ///
    /// The watch interval is taken from the root `monitorInterval` attribute.
    pub fn new(tree: Node) -> Self {
        let watch_interval = tree
            .attr(MONITOR_INTERVAL)
            .and_then(|value| match value.trim().parse::<u32>() {
                Ok(seconds) => Some(seconds),
                Err(e) => {
                    tracing::warn!(value, "source monitor interval ignored: {}", e);
                    None
                },
            })
            .unwrap_or(0);

        Self {
            tree,
            locator: None,
            watch_interval,
            last_modified: None,
        }
    }

    /// Attach the locator the tree was loaded from
    pub fn with_locator(mut self, locator: Locator) -> Self {
        self.last_modified = locator.last_modified();
        self.locator = Some(locator);
        self
    }

    /// Override the watch interval in seconds
    pub fn with_watch_interval(mut self, seconds: u32) -> Self {
        self.watch_interval = seconds;
        self
    }

    /// Override the modification time the watch baseline starts from
    pub fn with_last_modified(mut self, last_modified: Option<SystemTime>) -> Self {
        self.last_modified = last_modified;
        self
    }

    pub fn tree(&self) -> &Node {
        &self.tree
    }

    pub fn locator(&self) -> Option<&Locator> {
        self.locator.as_ref()
    }

    /// Seconds between change checks; 0 disables watching
    pub fn watch_interval(&self) -> u32 {
        self.watch_interval
    }

    pub fn last_modified(&self) -> Option<SystemTime> {
        self.last_modified
    }

    /// Locators this source wants watched, with their last known modification time
    pub fn watched(&self) -> Vec<(Locator, Option<SystemTime>)> {
        match &self.locator {
            Some(locator) if self.watch_interval > 0 => {
                vec![(locator.clone(), self.last_modified)]
            },
            _ => Vec::new(),
        }
    }

    /// Resolve the category of every node so merge rules can dispatch on it
    pub fn prepare(&mut self, resolver: &dyn PluginResolver) {
        resolver.categorize(&mut self.tree);
    }
}

/// Parses a locator into a source
pub trait ConfigurationFactory {
    /// Load a fresh source; failures are reported, never swallowed
    fn load(&self, locator: &Locator) -> ConfigResult<Source>;
}
