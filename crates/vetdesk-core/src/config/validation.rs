//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Display styles the CLI knows how to render
pub const VALID_STYLES: [&str; 2] = ["text", "markdown"];

/// Category keys a heading alias may point to
pub const VALID_CATEGORIES: [&str; 4] = ["added", "changed", "fixed", "security"];

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if !VALID_STYLES.contains(&config.changelog.style.as_str()) {
        return Err(ConfigError::InvalidValue {
            field: "changelog.style".to_string(),
            message: format!("must be one of: {}", VALID_STYLES.join(", ")),
        }
        .into());
    }

    if let Some(file) = &config.changelog.file {
        if file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "changelog.file".to_string(),
                message: "file cannot be empty".to_string(),
            }
            .into());
        }
    }

    for (alias, category) in &config.changelog.aliases {
        if alias.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "changelog.aliases".to_string(),
                message: "alias heading cannot be empty".to_string(),
            }
            .into());
        }

        if !VALID_CATEGORIES.contains(&category.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: format!("changelog.aliases.{}", alias),
                message: format!("must be one of: {}", VALID_CATEGORIES.join(", ")),
            }
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_invalid_style() {
        let mut config = Config::default();
        config.changelog.style = "html".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_alias_category() {
        let mut config = Config::default();
        config
            .changelog
            .aliases
            .insert("Nuevo".to_string(), "Added".to_string());
        assert!(validate_config(&config).is_ok());

        config
            .changelog
            .aliases
            .insert("Removed".to_string(), "removed".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_alias() {
        let mut config = Config::default();
        config
            .changelog
            .aliases
            .insert("  ".to_string(), "fixed".to_string());
        assert!(validate_config(&config).is_err());
    }
}
