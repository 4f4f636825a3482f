//! Error message formatting with actionable suggestions.

use logweave_core::error::LogweaveError;
use std::error::Error;

use super::{Painter, Style};

/// Error formatter with suggestions and cause chain
pub struct ErrorFormatter {
    painter: Painter,
}

impl ErrorFormatter {
    /// Create a new error formatter
    pub fn new() -> Self {
        Self {
            painter: Painter::detect(),
        }
    }

    /// Formatter that never emits escape codes
    pub fn plain() -> Self {
        Self {
            painter: Painter::plain(),
        }
    }

    /// Format an error with its suggestion and causes
    pub fn format_error(&self, error: &LogweaveError) -> String {
        let mut output = format!("{}: {}", self.painter.paint(Style::Red, "error"), error);

        if let Some(suggestion) = error.suggestion() {
            output.push_str(&format!(
                "\n{}: {}",
                self.painter.paint(Style::Dim, "help"),
                suggestion
            ));
        }

        let mut source = error.source();
        while let Some(err) = source {
            output.push_str(&format!(
                "\n{}: {}",
                self.painter.paint(Style::Dim, "caused by"),
                err
            ));
            source = err.source();
        }

        output
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_includes_suggestion() {
        let formatted = ErrorFormatter::plain().format_error(&LogweaveError::NoSources);
        assert_eq!(
            formatted,
            "error: Composite configuration requires at least one source\n\
             help: Pass at least one configuration document to compose"
        );
    }

    #[test]
    fn test_format_includes_cause() {
        let err = LogweaveError::io(
            "Failed to read configuration: base.json".to_string(),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let formatted = ErrorFormatter::plain().format_error(&err);
        assert!(formatted.starts_with("error: IO error: Failed to read configuration: base.json"));
        assert!(formatted.ends_with("caused by: denied"));
    }
}
