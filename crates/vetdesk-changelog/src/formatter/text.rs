//! Plain text changelog formatter

use tracing::{debug, instrument};

use super::{display_version, ChangelogFormatter, FormatOptions};
use crate::dates::format_date;
use crate::types::{Category, ChangelogEntry};

/// Terminal-friendly rendering
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        Self
    }
}

impl ChangelogFormatter for TextFormatter {
    #[instrument(skip(self, entries, options), fields(entry_count = entries.len()))]
    fn format(&self, entries: &[ChangelogEntry], options: &FormatOptions) -> String {
        let mut output = String::new();

        for entry in entries {
            output.push_str(display_version(entry, options.language));
            if options.include_dates && !entry.date.is_empty() {
                output.push_str(&format!(" ({})", format_date(&entry.date, options.language)));
            }
            output.push('\n');

            for category in Category::ALL {
                let items = entry.items(category);
                if items.is_empty() {
                    continue;
                }
                output.push_str(&format!("  {}:\n", category.label(options.language)));
                for item in items {
                    output.push_str(&format!("    - {}\n", item));
                }
            }

            output.push('\n');
        }

        debug!(output_len = output.len(), "text changelog formatted");
        output
    }

    fn name(&self) -> &'static str {
        "text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vetdesk_core::config::Language;

    fn sample() -> Vec<ChangelogEntry> {
        let mut unreleased = ChangelogEntry::new("Unreleased");
        unreleased.add_item(Category::Added, "Recordatorios por SMS");

        let mut release = ChangelogEntry::new("1.0.0").with_date("2024-01-15");
        release.add_item(Category::Fixed, "Totales de factura");
        release.add_item(Category::Added, "Agenda");

        vec![unreleased, release]
    }

    #[test]
    fn test_format_spanish() {
        let output = TextFormatter::new().format(&sample(), &FormatOptions::default());

        assert!(output.starts_with("Sin Publicar\n"));
        assert!(output.contains("1.0.0 (15 de enero de 2024)"));
        assert!(output.contains("  Agregado:\n    - Agenda\n"));
        assert!(output.contains("  Corregido:\n    - Totales de factura\n"));
        assert!(output.find("Agregado:\n    - Agenda").unwrap() < output.find("Corregido").unwrap());
    }

    #[test]
    fn test_format_english_without_dates() {
        let options = FormatOptions {
            language: Language::En,
            include_dates: false,
        };
        let output = TextFormatter::new().format(&sample(), &options);

        assert!(output.starts_with("Unreleased\n"));
        assert!(output.contains("1.0.0\n"));
        assert!(!output.contains("2024"));
        assert!(output.contains("  Fixed:\n"));
    }

    #[test]
    fn test_invalid_date_shown_verbatim() {
        let mut entry = ChangelogEntry::new("1.0.0").with_date("2024-99-99");
        entry.add_item(Category::Added, "x");

        let output = TextFormatter::new().format(&[entry], &FormatOptions::default());
        assert!(output.contains("1.0.0 (2024-99-99)"));
    }

    #[test]
    fn test_empty_entries() {
        let output = TextFormatter::new().format(&[], &FormatOptions::default());
        assert!(output.is_empty());
    }
}
