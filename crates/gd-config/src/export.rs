//! Where `.ics` exports are written.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_directory() -> String {
    ".".to_string()
}

fn default_filename() -> String {
    "good-date.ics".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Directory exports are saved into. Relative paths resolve against the
    /// working directory.
    #[serde(default = "default_directory")]
    pub directory: String,

    /// File name of the saved export.
    #[serde(default = "default_filename")]
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            filename: default_filename(),
        }
    }
}

impl ExportConfig {
    #[must_use]
    pub fn directory_path(&self) -> PathBuf {
        PathBuf::from(&self.directory)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.directory.trim().is_empty() {
            return Err(ConfigError::invalid("export.directory", "must not be empty"));
        }
        let name = self.filename.trim();
        if name.is_empty() {
            return Err(ConfigError::invalid("export.filename", "must not be empty"));
        }
        if name.contains(['/', '\\']) {
            return Err(ConfigError::invalid(
                "export.filename",
                "must be a file name, not a path",
            ));
        }
        if !name.to_ascii_lowercase().ends_with(".ics") || name.len() == ".ics".len() {
            return Err(ConfigError::invalid(
                "export.filename",
                format!("expected a name ending in .ics, got '{name}'"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ExportConfig::default();
        assert_eq!(config.directory, ".");
        assert_eq!(config.filename, "good-date.ics");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_filenames() {
        for filename in ["", "  ", "calendar.txt", ".ics", "out/good.ics"] {
            let config = ExportConfig {
                filename: filename.to_string(),
                ..ExportConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidValue { ref field, .. }) if field == "export.filename"),
                "accepted {filename:?}"
            );
        }
    }

    #[test]
    fn extension_check_ignores_case() {
        let config = ExportConfig {
            filename: "Launch.ICS".to_string(),
            ..ExportConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
