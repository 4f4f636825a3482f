//! Composite configuration: one merged tree from an ordered list of sources.
//!
//! Construction seeds the accumulator with a copy of the first source's tree,
//! folds every source's root attributes (the first one included) and
//! interprets the result into [`Settings`]. [`CompositeConfiguration::setup`]
//! then resolves categories and folds the remaining trees in order. Nothing
//! carries over between runs: reconfiguring builds a new composite.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use logweave_core::{LogweaveError, Node};

use crate::merge::{DefaultMergeStrategy, MergeStrategy};
use crate::resolver::PluginResolver;
use crate::settings::Settings;
use crate::source::{ConfigurationFactory, Source};
use crate::watch::{ChangeCallback, WatchManager};
use crate::ConfigResult;


/// Merged view over several configuration sources
pub struct CompositeConfiguration {
    sources: Vec<Source>,
    strategy: Box<dyn MergeStrategy>,
    resolver: Arc<dyn PluginResolver>,
    root: Node,
    settings: Settings,
    watch_manager: WatchManager,
    reconfigure_requested: Arc<AtomicBool>,
    prepared: bool,
}

impl CompositeConfiguration {
    /// Construct with the default merge strategy
    pub fn new(sources: Vec<Source>, resolver: Arc<dyn PluginResolver>) -> ConfigResult<Self> {
        Self::with_strategy(sources, resolver, Box::new(DefaultMergeStrategy))
    }

    /// Construct with a custom merge strategy
    pub fn with_strategy(
        sources: Vec<Source>,
        resolver: Arc<dyn PluginResolver>,
        strategy: Box<dyn MergeStrategy>,
    ) -> ConfigResult<Self> {
        let first = sources.first().ok_or(LogweaveError::NoSources)?;

        // Never fold into the caller's first tree
        let mut root = first.tree().clone();
        for source in &sources {
            strategy.merge_root_properties(&mut root, source.tree());
        }
        let settings = Settings::from_root(&root);

        tracing::debug!(
            sources = sources.len(),
            name = settings.name.as_deref().unwrap_or("<unnamed>"),
            status = %settings.status,
            "composite configuration constructed"
        );

        Ok(Self {
            sources,
            strategy,
            resolver,
            root,
            settings,
            watch_manager: WatchManager::new(),
            reconfigure_requested: Arc::new(AtomicBool::new(false)),
            prepared: false,
        })
    }

    /// Construct and set up in one step
    pub fn build(sources: Vec<Source>, resolver: Arc<dyn PluginResolver>) -> ConfigResult<Self> {
        let mut composite = Self::new(sources, resolver)?;
        composite.setup();
        Ok(composite)
    }

    /// Prepare every source and fold sources 2..N into the accumulator.
    ///
    /// Only the first call has an effect.
    pub fn setup(&mut self) {
        if self.prepared {
            tracing::debug!("composite configuration already set up");
            return;
        }
        self.prepared = true;

        let resolver = Arc::clone(&self.resolver);
        for source in &mut self.sources {
            source.prepare(resolver.as_ref());
        }
        resolver.categorize(&mut self.root);

        self.register_watchers(0);
        for index in 1..self.sources.len() {
            let tree = self.sources[index].tree().clone();
            self.strategy
                .merge_configurations(&mut self.root, tree, resolver.as_ref());
            self.register_watchers(index);
        }

        tracing::info!(
            sources = self.sources.len(),
            elements = self.root.size(),
            watch_interval = self.watch_manager.interval_seconds(),
            "composite configuration merged"
        );
    }

    /// Merge the source's watch interval and watch its documents on behalf of the composite
    fn register_watchers(&mut self, index: usize) {
        let source = &self.sources[index];
        let interval = source.watch_interval();
        if interval == 0 {
            return;
        }

        let current = self.watch_manager.interval_seconds();
        if current == 0 || interval < current {
            self.watch_manager.set_interval_seconds(interval);
        }

        for (locator, last_modified) in source.watched() {
            let flag = Arc::clone(&self.reconfigure_requested);
            let on_change: ChangeCallback = Arc::new(move |_, _| {
                flag.store(true, Ordering::SeqCst);
            });
            self.watch_manager.watch(locator, last_modified, on_change);
        }
    }

    /// Reload every source that has a locator and build a fresh composite.
    ///
    /// A source that fails to reload keeps its previous tree, watched from
    /// the document's current modification time so the broken edit does not
    /// request another reload.
    pub fn reconfigure(&self, factory: &dyn ConfigurationFactory) -> ConfigResult<Self> {
        let refreshed = self
            .sources
            .iter()
            .map(|source| match source.locator() {
                Some(locator) => factory.load(locator).unwrap_or_else(|e| {
                    tracing::warn!(%locator, "keeping previous configuration: {}", e);
                    source
                        .clone()
                        .with_last_modified(locator.last_modified().or(source.last_modified()))
                }),
                None => source.clone(),
            })
            .collect();

        Self::build(refreshed, Arc::clone(&self.resolver))
    }

    /// The merged tree
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn name(&self) -> Option<&str> {
        self.settings.name.as_deref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn watch_manager(&self) -> &WatchManager {
        &self.watch_manager
    }

    pub fn watch_manager_mut(&mut self) -> &mut WatchManager {
        &mut self.watch_manager
    }

    /// Whether a watched source changed since this composite was built
    pub fn reconfigure_requested(&self) -> bool {
        self.reconfigure_requested.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for CompositeConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeConfiguration")
            .field("sources", &self.sources.len())
            .field("settings", &self.settings)
            .field("watch_manager", &self.watch_manager)
            .field("prepared", &self.prepared)
            .finish()
    }
}
