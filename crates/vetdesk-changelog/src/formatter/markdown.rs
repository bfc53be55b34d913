//! Markdown changelog formatter

use tracing::{debug, instrument};
use vetdesk_core::config::Language;

use super::{display_version, ChangelogFormatter, FormatOptions};
use crate::types::{Category, ChangelogEntry};

/// Re-emits entries as Keep a Changelog markdown
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }

    fn title(language: Language) -> &'static str {
        match language {
            Language::Es => "Registro de Cambios",
            Language::En => "Changelog",
        }
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, entries, options), fields(entry_count = entries.len()))]
    fn format(&self, entries: &[ChangelogEntry], options: &FormatOptions) -> String {
        let mut output = format!("# {}\n\n", Self::title(options.language));

        for entry in entries {
            let version = display_version(entry, options.language);
            if options.include_dates && !entry.date.is_empty() {
                output.push_str(&format!("## [{}] - {}\n\n", version, entry.date));
            } else {
                output.push_str(&format!("## [{}]\n\n", version));
            }

            for category in Category::ALL {
                let items = entry.items(category);
                if items.is_empty() {
                    continue;
                }
                output.push_str(&format!("### {}\n\n", category.label(options.language)));
                for item in items {
                    output.push_str(&format!("- {}\n", item));
                }
                output.push('\n');
            }
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }

    fn name(&self) -> &'static str {
        "markdown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_changelog;
    use crate::source::has_title_line;

    #[test]
    fn test_format_basic() {
        let mut entry = ChangelogEntry::new("1.0.0").with_date("2024-01-15");
        entry.add_item(Category::Added, "Agenda de citas");

        let output = MarkdownFormatter::new().format(&[entry], &FormatOptions::default());

        assert!(has_title_line(&output));
        assert!(output.contains("## [1.0.0] - 2024-01-15"));
        assert!(output.contains("### Agregado\n\n- Agenda de citas\n"));
    }

    #[test]
    fn test_unreleased_translated() {
        let mut entry = ChangelogEntry::new("Sin Publicar");
        entry.add_item(Category::Security, "CSP estricta");
        let options = FormatOptions {
            language: Language::En,
            include_dates: true,
        };

        let output = MarkdownFormatter::new().format(&[entry], &options);
        assert!(output.contains("## [Unreleased]\n"));
        assert!(output.contains("### Security"));
    }

    #[test]
    fn test_output_parses_back_to_same_entries() {
        let source = "# Changelog

## [2.0.0] - 2024-02-01
### Fixed
- Second fix
### Added
- Feature one
  - Nested detail

## [1.0.0] - 2024-01-15
### Seguridad
- Hardened login
";
        let entries = parse_changelog(source);
        for language in [Language::Es, Language::En] {
            let options = FormatOptions {
                language,
                include_dates: true,
            };
            let rendered = MarkdownFormatter::new().format(&entries, &options);
            assert_eq!(parse_changelog(&rendered), entries);
        }
    }
}
