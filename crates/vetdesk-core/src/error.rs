//! Error types for vetdesk

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using VetdeskError
pub type Result<T> = std::result::Result<T, VetdeskError>;

/// Main error type for vetdesk operations
#[derive(Debug, Error)]
pub enum VetdeskError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Changelog content errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while fetching changelog content.
///
/// Parsing itself never fails; only the content accessor can.
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Changelog file not found
    #[error("Changelog file not found at {0}")]
    FileNotFound(PathBuf),

    /// IO error
    #[error("IO error reading changelog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let err: VetdeskError = ConfigError::InvalidValue {
            field: "changelog.style".to_string(),
            message: "must be one of: text, markdown".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: changelog.style - must be one of: text, markdown"
        );
    }

    #[test]
    fn test_file_not_found_message() {
        let err = ChangelogError::FileNotFound(PathBuf::from("CHANGELOG.md"));
        assert!(err.to_string().contains("CHANGELOG.md"));
    }
}
