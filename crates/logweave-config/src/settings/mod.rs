//! Global settings interpreted from the merged root attributes.

use std::str::FromStr;
use std::time::Duration;

use camino::Utf8PathBuf;
use logweave_core::{eq_folded, Level, LogweaveError, Node};
use serde::Serialize;

use crate::merge::{split_packages, MONITOR_INTERVAL, PACKAGES, STATUS};
use crate::ConfigResult;

/// Root attribute naming the configuration
pub const NAME: &str = "name";
/// Root attribute selecting where status output goes
pub const DEST: &str = "dest";
/// Root attribute enabling verbose plugin diagnostics
pub const VERBOSE: &str = "verbose";
/// Root attribute controlling the shutdown hook
pub const SHUTDOWN_HOOK: &str = "shutdownHook";
/// Root attribute with the shutdown timeout in milliseconds
pub const SHUTDOWN_TIMEOUT: &str = "shutdownTimeout";

/// Where internal status output is written
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    #[default]
    Stdout,
    Stderr,
    File(Utf8PathBuf),
}

impl Destination {
    fn parse(value: &str) -> Self {
        match value.trim() {
            v if eq_folded(v, "out") => Destination::Stdout,
            v if eq_folded(v, "err") => Destination::Stderr,
            path => Destination::File(Utf8PathBuf::from(path)),
        }
    }
}

/// Interpreted global settings of a composite configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub name: Option<String>,
    pub status: Level,
    pub destination: Destination,
    pub verbose: bool,
    pub packages: Vec<String>,
    pub shutdown_hook: bool,
    pub shutdown_timeout: Duration,
    pub monitor_interval: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: None,
            status: Level::Error,
            destination: Destination::Stdout,
            verbose: false,
            packages: Vec::new(),
            shutdown_hook: true,
            shutdown_timeout: Duration::ZERO,
            monitor_interval: 0,
        }
    }
}

impl Settings {
    /// Interpret the attributes of a merged root.
    ///
    /// Unknown attributes are ignored; unparseable values keep their default
    /// and emit a warning.
    pub fn from_root(root: &Node) -> Self {
        let mut settings = Settings::default();

        for (key, value) in root.attributes().iter() {
            if eq_folded(key, NAME) {
                settings.name = Some(value.to_string());
            } else if eq_folded(key, STATUS) {
                match Level::from_str(value) {
                    Ok(level) => settings.status = level,
                    Err(e) => tracing::warn!(key, value, "invalid status, using default: {}", e),
                }
            } else if eq_folded(key, DEST) {
                settings.destination = Destination::parse(value);
            } else if eq_folded(key, VERBOSE) {
                settings.verbose = eq_folded(value.trim(), "true");
            } else if eq_folded(key, PACKAGES) {
                settings.packages = split_packages(value);
            } else if eq_folded(key, SHUTDOWN_HOOK) {
                settings.shutdown_hook = !eq_folded(value.trim(), "disable");
            } else if eq_folded(key, SHUTDOWN_TIMEOUT) {
                match value.trim().parse::<u64>() {
                    Ok(millis) => settings.shutdown_timeout = Duration::from_millis(millis),
                    Err(e) => tracing::warn!(key, value, "invalid shutdown timeout: {}", e),
                }
            } else if eq_folded(key, MONITOR_INTERVAL) {
                match value.trim().parse::<u32>() {
                    Ok(seconds) => settings.monitor_interval = seconds,
                    Err(e) => tracing::warn!(key, value, "invalid monitor interval: {}", e),
                }
            }
        }

        settings
    }

    /// Reject the first recognized root attribute whose value would fall
    /// back to its default
    pub fn validate(root: &Node) -> ConfigResult<()> {
        let invalid = |key: &str, value: &str, reason: String| LogweaveError::InvalidAttribute {
            key: key.to_string(),
            value: value.to_string(),
            reason,
        };

        for (key, value) in root.attributes().iter() {
            if eq_folded(key, STATUS) {
                Level::from_str(value).map_err(|e| invalid(key, value, e.to_string()))?;
            } else if eq_folded(key, SHUTDOWN_TIMEOUT) {
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| invalid(key, value, e.to_string()))?;
            } else if eq_folded(key, MONITOR_INTERVAL) {
                value
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| invalid(key, value, e.to_string()))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_bare_root() {
        let settings = Settings::from_root(&Node::new("Configuration"));
        assert_eq!(settings, Settings::default());
        assert!(settings.shutdown_hook);
        assert_eq!(settings.status, Level::Error);
    }

    #[test]
    fn test_interprets_every_setting() {
        let root = Node::new("Configuration")
            .with_attr("name", "orders-service")
            .with_attr("status", "debug")
            .with_attr("dest", "err")
            .with_attr("verbose", "TRUE")
            .with_attr("packages", "com.a, com.b")
            .with_attr("shutdownHook", "disable")
            .with_attr("shutdownTimeout", "2500")
            .with_attr("MonitorInterval", "30");

        let settings = Settings::from_root(&root);

        assert_eq!(settings.name.as_deref(), Some("orders-service"));
        assert_eq!(settings.status, Level::Debug);
        assert_eq!(settings.destination, Destination::Stderr);
        assert!(settings.verbose);
        assert_eq!(settings.packages, vec!["com.a", "com.b"]);
        assert!(!settings.shutdown_hook);
        assert_eq!(settings.shutdown_timeout, Duration::from_millis(2500));
        assert_eq!(settings.monitor_interval, 30);
    }

    #[test]
    fn test_file_destination() {
        let root = Node::new("Configuration").with_attr("dest", "/var/log/status.log");
        assert_eq!(
            Settings::from_root(&root).destination,
            Destination::File(Utf8PathBuf::from("/var/log/status.log"))
        );
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let root = Node::new("Configuration")
            .with_attr("status", "chatty")
            .with_attr("shutdownTimeout", "soon")
            .with_attr("monitorInterval", "-1");

        let settings = Settings::from_root(&root);

        assert_eq!(settings.status, Level::Error);
        assert_eq!(settings.shutdown_timeout, Duration::ZERO);
        assert_eq!(settings.monitor_interval, 0);
    }

    #[test]
    fn test_validate_reports_invalid_attribute() {
        let valid = Node::new("Configuration")
            .with_attr("status", "warn")
            .with_attr("monitorInterval", "30");
        assert!(Settings::validate(&valid).is_ok());

        let root = Node::new("Configuration").with_attr("shutdownTimeout", "soon");
        match Settings::validate(&root) {
            Err(LogweaveError::InvalidAttribute { key, value, .. }) => {
                assert_eq!(key, "shutdownTimeout");
                assert_eq!(value, "soon");
            },
            other => panic!("expected InvalidAttribute, got {:?}", other),
        }
    }
}
