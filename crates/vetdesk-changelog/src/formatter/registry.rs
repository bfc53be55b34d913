//! Formatter registry

use std::sync::Arc;

use super::{ChangelogFormatter, MarkdownFormatter, TextFormatter};

/// Registry of available changelog formatters
pub struct FormatterRegistry {
    formatters: Vec<Arc<dyn ChangelogFormatter>>,
}

impl FormatterRegistry {
    /// Create a new registry with all built-in formatters
    pub fn new() -> Self {
        Self {
            formatters: vec![
                Arc::new(TextFormatter::new()),
                Arc::new(MarkdownFormatter::new()),
            ],
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            formatters: Vec::new(),
        }
    }

    /// Register a formatter
    pub fn register<F: ChangelogFormatter + 'static>(&mut self, formatter: F) {
        self.formatters.push(Arc::new(formatter));
    }

    /// Get formatter by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn ChangelogFormatter>> {
        self.formatters.iter().find(|f| f.name() == name).cloned()
    }

    /// Get all registered formatter names
    pub fn names(&self) -> Vec<&'static str> {
        self.formatters.iter().map(|f| f.name()).collect()
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::FormatOptions;
    use crate::types::ChangelogEntry;

    struct CountFormatter;

    impl ChangelogFormatter for CountFormatter {
        fn format(&self, entries: &[ChangelogEntry], _options: &FormatOptions) -> String {
            entries.len().to_string()
        }

        fn name(&self) -> &'static str {
            "count"
        }
    }

    #[test]
    fn test_builtin_formatters() {
        let registry = FormatterRegistry::new();
        assert_eq!(registry.names(), vec!["text", "markdown"]);
        assert!(registry.get("markdown").is_some());
        assert!(registry.get("html").is_none());
    }

    #[test]
    fn test_register_custom_formatter() {
        let mut registry = FormatterRegistry::empty();
        assert!(registry.names().is_empty());

        registry.register(CountFormatter);
        let formatter = registry.get("count").unwrap();
        let entries = vec![ChangelogEntry::new("1.0.0")];
        assert_eq!(formatter.format(&entries, &FormatOptions::default()), "1");
    }
}
