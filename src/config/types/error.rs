//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating, reading, or checking `vitrine.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed config file")]
    Toml(#[from] toml::de::Error),

    #[error("no `{0}` in this directory or any parent")]
    NotFound(PathBuf),

    // no #[from]: the diagnostics already print every message
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// One rejected config value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    /// Suggested fix, printed under the message.
    pub hint: String,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {} {}: {}", "-".red(), self.field.cyan(), self.message)?;
        write!(f, "\n    {} {}", "hint:".yellow(), self.hint)
    }
}

/// Validation results of every section, reported in one go.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rejected value along with a suggested fix.
    pub fn reject_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors.push(ConfigDiagnostic {
            field,
            message: message.into(),
            hint: hint.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// `Ok` when nothing was rejected.
    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Diagnostics(self))
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            "invalid configuration".red().bold(),
            crate::utils::plural_count(self.errors.len(), "problem")
        )?;
        for diagnostic in self.errors() {
            write!(f, "\n{diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("vitrine.toml"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(io_err.to_string(), "cannot read `vitrine.toml`");

        let not_found = ConfigError::NotFound(PathBuf::from("vitrine.toml"));
        assert_eq!(
            not_found.to_string(),
            "no `vitrine.toml` in this directory or any parent"
        );
    }

    #[test]
    fn test_diagnostics_collect_all() {
        let mut diag = ConfigDiagnostics::new();
        assert!(diag.is_empty());

        diag.reject_with_hint(
            FieldPath::new("catalogue.route"),
            "must start with `/`",
            "use \"/art\"",
        );
        diag.reject_with_hint(
            FieldPath::new("catalogue.extensions"),
            "must not be empty",
            "add at least one image extension",
        );

        assert_eq!(diag.errors().len(), 2);
        assert_eq!(diag.errors()[0].hint, "use \"/art\"");
        assert_eq!(diag.errors()[1].hint, "add at least one image extension");

        let display = diag.into_result().unwrap_err().to_string();
        assert!(display.contains("2 problems"));
        assert!(display.contains("`catalogue.route`"));
        assert!(display.contains("must not be empty"));
        assert!(display.contains("add at least one image extension"));
    }

    #[test]
    fn test_empty_diagnostics_is_ok() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());
    }
}
