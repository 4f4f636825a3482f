//! Diagnostic severity levels.
//!
//! Levels are ordered by intensity: `OFF` lets nothing through, `ALL` lets
//! everything through. A level with a higher intensity is *less specific*,
//! it casts a broader net.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::attributes::eq_folded;

/// Severity threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Off,
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    All,
}

/// Level parsing errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LevelError {
    #[error("Unknown level: {input}")]
    Unknown { input: String },
}

impl Level {
    /// Every level, most specific first
    pub const ALL_LEVELS: [Level; 8] = [
        Level::Off,
        Level::Fatal,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
        Level::All,
    ];

    /// Numeric intensity of this level
    pub fn intensity(self) -> u32 {
        match self {
            Level::Off => 0,
            Level::Fatal => 100,
            Level::Error => 200,
            Level::Warn => 300,
            Level::Info => 400,
            Level::Debug => 500,
            Level::Trace => 600,
            Level::All => u32::MAX,
        }
    }

    /// Canonical upper-case name
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Off => "OFF",
            Level::Fatal => "FATAL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
            Level::All => "ALL",
        }
    }

    /// Check if this level lets through strictly more events than `other`
    pub fn is_less_specific_than(self, other: Level) -> bool {
        self.intensity() > other.intensity()
    }

    /// The broader of two levels
    pub fn least_specific(self, other: Level) -> Level {
        if other.is_less_specific_than(self) {
            other
        } else {
            self
        }
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        Level::ALL_LEVELS
            .into_iter()
            .find(|level| eq_folded(level.as_str(), input))
            .ok_or_else(|| LevelError::Unknown {
                input: input.to_string(),
            })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        self.intensity().cmp(&other.intensity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing() {
        assert_eq!(Level::from_str("debug").unwrap(), Level::Debug);
        assert_eq!(Level::from_str(" WARN ").unwrap(), Level::Warn);
        assert_eq!(Level::from_str("Trace").unwrap(), Level::Trace);
        assert!(Level::from_str("verbose").is_err());
        assert!(Level::from_str("").is_err());
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Info.to_string(), "INFO");
        assert_eq!(Level::All.to_string(), "ALL");
    }

    #[test]
    fn test_less_specific() {
        assert!(Level::Debug.is_less_specific_than(Level::Warn));
        assert!(!Level::Warn.is_less_specific_than(Level::Debug));
        assert!(!Level::Warn.is_less_specific_than(Level::Warn));
        assert_eq!(Level::Warn.least_specific(Level::Debug), Level::Debug);
        assert_eq!(Level::Trace.least_specific(Level::Error), Level::Trace);
        assert_eq!(Level::Off.least_specific(Level::All), Level::All);
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Off < Level::Fatal);
        assert!(Level::Info < Level::Debug);
        assert!(Level::Trace < Level::All);
    }
}
