//! Polling watch manager for configuration documents.
//!
//! The manager only records what to watch and how often; the caller decides
//! when to poll by calling [`WatchManager::check_files`] every
//! [`WatchManager::interval_seconds`].

use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

use indexmap::IndexMap;

use crate::source::Locator;

/// Callback fired with the new modification time of a changed document
pub type ChangeCallback = Arc<dyn Fn(&Locator, SystemTime) + Send + Sync>;

struct Watcher {
    last_modified: Option<SystemTime>,
    on_change: ChangeCallback,
}

/// Registry of watched documents
#[derive(Default)]
pub struct WatchManager {
    interval_seconds: u32,
    watchers: IndexMap<Locator, Watcher>,
}

impl WatchManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds between checks; 0 means watching is disabled
    pub fn interval_seconds(&self) -> u32 {
        self.interval_seconds
    }

    pub fn set_interval_seconds(&mut self, seconds: u32) {
        self.interval_seconds = seconds;
    }

    /// Register (or re-register) a document
    pub fn watch(
        &mut self,
        locator: Locator,
        last_modified: Option<SystemTime>,
        on_change: ChangeCallback,
    ) {
        tracing::debug!(%locator, "watching configuration");
        self.watchers.insert(
            locator,
            Watcher {
                last_modified,
                on_change,
            },
        );
    }

    pub fn unwatch(&mut self, locator: &Locator) -> bool {
        self.watchers.shift_remove(locator).is_some()
    }

    pub fn is_watching(&self, locator: &Locator) -> bool {
        self.watchers.contains_key(locator)
    }

    /// Watched locators in registration order
    pub fn watched(&self) -> impl Iterator<Item = &Locator> {
        self.watchers.keys()
    }

    /// Stat every watched document and fire callbacks for the ones that changed.
    ///
    /// Returns the number of changed documents. Documents that cannot be
    /// stat'ed are skipped until they reappear. A document registered without
    /// a modification time takes its first observed time as the baseline.
    pub fn check_files(&mut self) -> usize {
        let mut changed = 0;
        for (locator, watcher) in &mut self.watchers {
            let Some(modified) = locator.last_modified() else {
                tracing::trace!(%locator, "watched configuration is not readable");
                continue;
            };
            let Some(previous) = watcher.last_modified else {
                tracing::trace!(%locator, "recording watch baseline");
                watcher.last_modified = Some(modified);
                continue;
            };
            if modified > previous {
                tracing::info!(%locator, "configuration changed");
                watcher.last_modified = Some(modified);
                (watcher.on_change)(locator, modified);
                changed += 1;
            }
        }
        changed
    }
}

impl fmt::Debug for WatchManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchManager")
            .field("interval_seconds", &self.interval_seconds)
            .field("watched", &self.watchers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tempfile::TempDir;

    fn counter() -> (Arc<AtomicUsize>, ChangeCallback) {
        let count = Arc::new(AtomicUsize::new(0));
        let hits = Arc::clone(&count);
        let callback: ChangeCallback = Arc::new(move |_, _| {
            hits.fetch_add(1, Ordering::SeqCst);
        });
        (count, callback)
    }

    fn temp_locator(dir: &TempDir) -> Locator {
        let path = Utf8PathBuf::try_from(dir.path().join("log.json")).unwrap();
        std::fs::write(&path, "{}").unwrap();
        Locator::new(path)
    }

    #[test]
    fn test_interval_defaults_to_disabled() {
        let mut manager = WatchManager::new();
        assert_eq!(manager.interval_seconds(), 0);
        manager.set_interval_seconds(15);
        assert_eq!(manager.interval_seconds(), 15);
    }

    #[test]
    fn test_unchanged_file_does_not_fire() {
        let dir = TempDir::new().unwrap();
        let locator = temp_locator(&dir);
        let (count, callback) = counter();

        let mut manager = WatchManager::new();
        manager.watch(locator.clone(), locator.last_modified(), callback);

        assert_eq!(manager.check_files(), 0);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_changed_file_fires_once() {
        let dir = TempDir::new().unwrap();
        let locator = temp_locator(&dir);
        let (count, callback) = counter();

        let mut manager = WatchManager::new();
        let stale = locator
            .last_modified()
            .map(|modified| modified - Duration::from_secs(60));
        manager.watch(locator, stale, callback);

        assert_eq!(manager.check_files(), 1);
        assert_eq!(manager.check_files(), 0);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unknown_baseline_is_recorded_without_firing() {
        let dir = TempDir::new().unwrap();
        let locator = temp_locator(&dir);
        let (count, callback) = counter();

        let mut manager = WatchManager::new();
        manager.watch(locator.clone(), None, callback);

        assert_eq!(manager.check_files(), 0);
        assert_eq!(manager.check_files(), 0);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        let later = locator.last_modified().unwrap() + Duration::from_secs(60);
        std::fs::File::options()
            .write(true)
            .open(locator.path())
            .unwrap()
            .set_modified(later)
            .unwrap();

        assert_eq!(manager.check_files(), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let (count, callback) = counter();
        let mut manager = WatchManager::new();
        manager.watch(Locator::new("/no/such/log.json"), None, callback);

        assert_eq!(manager.check_files(), 0);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_watch_and_unwatch() {
        let (_, callback) = counter();
        let locator = Locator::new("/etc/app/log.toml");
        let mut manager = WatchManager::new();

        manager.watch(locator.clone(), None, Arc::clone(&callback));
        manager.watch(locator.clone(), None, callback);
        assert!(manager.is_watching(&locator));
        assert_eq!(manager.watched().count(), 1);

        assert!(manager.unwatch(&locator));
        assert!(!manager.is_watching(&locator));
    }
}
