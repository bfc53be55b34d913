//! Parser configuration and report types

use std::fmt;

use serde::Serialize;
use tracing::warn;
use vetdesk_core::config::ChangelogConfig;

use crate::types::{Category, ChangelogEntry};

/// Configuration for the changelog parser
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Whether unreleased blocks produce entries
    pub include_unreleased: bool,
    /// Extra category headings on top of the built-in ones
    pub aliases: Vec<(String, Category)>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            include_unreleased: true,
            aliases: Vec::new(),
        }
    }
}

impl ParserConfig {
    /// Build parser settings from the changelog section of the config file.
    ///
    /// Aliases naming an unknown category are skipped.
    pub fn from_changelog_config(config: &ChangelogConfig) -> Self {
        let mut parser_config = Self::default().with_unreleased(config.include_unreleased);
        for (heading, key) in &config.aliases {
            match key.parse::<Category>() {
                Ok(category) => parser_config = parser_config.alias(heading.clone(), category),
                Err(()) => {
                    warn!(heading = %heading, key = %key, "ignoring alias with unknown category")
                }
            }
        }
        parser_config
    }

    /// Set whether unreleased blocks produce entries
    pub fn with_unreleased(mut self, include: bool) -> Self {
        self.include_unreleased = include;
        self
    }

    /// Add a heading alias
    pub fn alias(mut self, heading: impl Into<String>, category: Category) -> Self {
        self.aliases.push((heading.into(), category));
        self
    }
}

/// Why a version block produced no entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No recognized category heading in the block
    NoCategories,
    /// Recognized headings, but no list items under them
    EmptyCategories,
    /// Unreleased blocks are excluded by configuration
    UnreleasedExcluded,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCategories => write!(f, "no recognized category headings"),
            Self::EmptyCategories => write!(f, "category headings without list items"),
            Self::UnreleasedExcluded => write!(f, "unreleased versions are excluded"),
        }
    }
}

/// A version block that was dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedVersion {
    pub version: String,
    pub reason: SkipReason,
}

/// A third-level heading inside a version block that matched no category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoredHeading {
    pub version: String,
    pub heading: String,
}

/// Parsed entries plus what the parser left out
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseReport {
    pub entries: Vec<ChangelogEntry>,
    pub skipped: Vec<SkippedVersion>,
    pub ignored_headings: Vec<IgnoredHeading>,
}
