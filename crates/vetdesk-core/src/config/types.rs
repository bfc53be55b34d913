//! Configuration types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Main configuration for vetdesk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Clinic or deployment name
    pub name: Option<String>,

    /// Changelog configuration
    pub changelog: ChangelogConfig,
}

/// Display language for changelog labels and dates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish
    #[default]
    Es,
    /// English
    En,
}

/// Changelog section of the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file to read instead of the bundled one
    pub file: Option<PathBuf>,

    /// Language for headings, labels and dates
    pub language: Language,

    /// Whether unreleased versions are shown
    pub include_unreleased: bool,

    /// Whether release dates are shown
    pub include_dates: bool,

    /// Display style (text, markdown)
    pub style: String,

    /// Extra category headings, mapped to a category key
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: None,
            language: Language::default(),
            include_unreleased: true,
            include_dates: true,
            style: "text".to_string(),
            aliases: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("changelog:\n  language: en\n").unwrap();
        assert_eq!(config.changelog.language, Language::En);
        assert!(config.changelog.include_unreleased);
        assert_eq!(config.changelog.style, "text");
        assert!(config.changelog.file.is_none());
    }

    #[test]
    fn test_unknown_language_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("changelog:\n  language: fr\n");
        assert!(result.is_err());
    }
}
