//! Changelog presentation

mod markdown;
mod registry;
mod text;

pub use markdown::MarkdownFormatter;
pub use registry::FormatterRegistry;
pub use text::TextFormatter;

use vetdesk_core::config::{ChangelogConfig, Language};

use crate::types::{unreleased_label, ChangelogEntry};

/// Display options shared by all formatters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Language for labels, sentinels and dates
    pub language: Language,
    /// Whether release dates are shown
    pub include_dates: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            include_dates: true,
        }
    }
}

impl FormatOptions {
    /// Options from the changelog section of the config file
    pub fn from_config(config: &ChangelogConfig) -> Self {
        Self {
            language: config.language,
            include_dates: config.include_dates,
        }
    }
}

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Render entries to a string
    fn format(&self, entries: &[ChangelogEntry], options: &FormatOptions) -> String;

    /// Name used to select this formatter
    fn name(&self) -> &'static str;
}

/// Version label, with the unreleased sentinel translated
pub(crate) fn display_version(entry: &ChangelogEntry, language: Language) -> &str {
    if entry.is_unreleased() {
        unreleased_label(language)
    } else {
        &entry.version
    }
}
