//! Case-insensitive, case-preserving attribute map.
//!
//! Configuration documents are written by hand and attribute keys show up as
//! `monitorInterval`, `monitorinterval` or `MonitorInterval` interchangeably.
//! Lookups fold keys to lowercase; storage keeps the spelling of whoever
//! wrote the key first, and values are never touched.

use indexmap::IndexMap;
use std::fmt;

/// Ordered attribute mapping with case-insensitive keys
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    /// Folded key -> (original key, value), in insertion order
    entries: IndexMap<String, (String, String)>,
}

/// Fold a key or name to its comparison form
pub fn fold(key: &str) -> String {
    key.to_lowercase()
}

/// Compare two keys or names under the same folding as the map itself
pub fn eq_folded(a: &str, b: &str) -> bool {
    a == b || fold(a) == fold(b)
}

impl Attributes {
    /// Create an empty attribute map
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value by key, ignoring case
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&fold(key)).map(|(_, value)| value.as_str())
    }

    /// Check whether a key is present, ignoring case
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&fold(key))
    }

    /// Insert or overwrite a value, returning the previous value.
    ///
    /// Overwriting keeps the key spelling already stored.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.get_mut(&fold(&key)) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.insert(fold(&key), (key, value));
                None
            },
        }
    }

    /// Remove a key, ignoring case, keeping the order of the remaining entries
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(&fold(key)).map(|(_, value)| value)
    }

    /// Copy every entry of `other` onto this map; `other` wins on collision
    pub fn merge_from(&mut self, other: &Attributes) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }

    /// Iterate `(key, value)` pairs with their original key spelling
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}
