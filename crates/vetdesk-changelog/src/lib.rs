//! vetdesk Changelog - the changelog content pipeline
//!
//! Parses the product's "Keep a Changelog" markdown into typed entries,
//! formats release dates for display and renders entries for the CLI.

pub mod dates;
pub mod formatter;
pub mod lint;
pub mod parser;
pub mod source;
pub mod types;

pub use dates::{format_date, format_date_spanish, parse_iso_date};
pub use formatter::{ChangelogFormatter, FormatOptions, FormatterRegistry};
pub use lint::{lint_changelog, LintReport, LintWarning};
pub use parser::{parse_changelog, ChangelogParser, ParseReport, ParserConfig};
pub use source::{get_changelog_content, ChangelogSource};
pub use types::{Category, ChangelogEntry};
pub use vetdesk_core::config::Language;
