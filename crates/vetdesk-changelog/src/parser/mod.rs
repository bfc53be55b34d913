//! Changelog parsing
//!
//! Reads "Keep a Changelog" style markdown:
//!
//! ```text
//! ## [1.0.0] - 2024-01-15
//! ### Added
//! - Appointment reminders
//! ```
//!
//! Parsing never fails. Malformed input produces fewer entries.

mod headings;
mod types;

pub use headings::HeadingTable;
pub use types::*;

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, instrument};

use crate::types::{Category, ChangelogEntry};

/// `## [version]` with an optional `- YYYY-MM-DD`
static VERSION_HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^##\s+\[(?P<version>[^\]]+)\](?:\s*[-–—]\s*(?P<date>\d{4}-\d{2}-\d{2}))?")
        .expect("Invalid regex")
});

/// Any ATX heading
static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<level>#{1,6})\s+(?P<text>.*)$").expect("Invalid regex"));

/// Bullet list item at any indentation
static LIST_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*+]\s+(?P<text>.+)$").expect("Invalid regex"));

/// Parse changelog markdown with the default bilingual headings
pub fn parse_changelog(content: &str) -> Vec<ChangelogEntry> {
    ChangelogParser::new().parse(content)
}

/// Parser for Keep a Changelog markdown
#[derive(Debug, Clone)]
pub struct ChangelogParser {
    config: ParserConfig,
    headings: HeadingTable,
}

/// Version block being accumulated
struct Block {
    entry: ChangelogEntry,
    recognized: bool,
}

impl ChangelogParser {
    /// Create a new parser with default configuration
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Create a parser with custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        let mut headings = HeadingTable::new();
        for (heading, category) in &config.aliases {
            headings.insert(heading, *category);
        }
        Self { config, headings }
    }

    /// Parser configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse content into entries, in source order
    pub fn parse(&self, content: &str) -> Vec<ChangelogEntry> {
        self.parse_with_report(content).entries
    }

    /// Parse content and record skipped blocks and ignored headings
    #[instrument(skip(self, content), fields(content_len = content.len()))]
    pub fn parse_with_report(&self, content: &str) -> ParseReport {
        let mut report = ParseReport::default();
        let mut block: Option<Block> = None;
        let mut section: Option<Category> = None;

        for line in content.lines() {
            let trimmed = line.trim_start();

            if let Some(caps) = VERSION_HEADING_REGEX.captures(trimmed) {
                if let Some(done) = block.take() {
                    self.finish(done, &mut report);
                }
                let version = caps["version"].trim().to_string();
                let date = caps
                    .name("date")
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
                block = Some(Block {
                    entry: ChangelogEntry::new(version).with_date(date),
                    recognized: false,
                });
                section = None;
                continue;
            }

            if let Some(caps) = HEADING_REGEX.captures(trimmed) {
                // Every heading closes the current category
                section = None;
                let text = caps["text"].trim();

                // Only a version heading ends a version block
                if caps["level"].len() == 3 {
                    if let Some(current) = block.as_mut() {
                        match self.headings.lookup(text) {
                            Some(category) => {
                                current.recognized = true;
                                section = Some(category);
                            }
                            None => report.ignored_headings.push(IgnoredHeading {
                                version: current.entry.version.clone(),
                                heading: text.to_string(),
                            }),
                        }
                    }
                }
                continue;
            }

            // Nested items are flattened into the same category
            if let (Some(current), Some(category)) = (block.as_mut(), section) {
                if let Some(caps) = LIST_ITEM_REGEX.captures(line) {
                    let item = caps["text"].trim();
                    if !item.is_empty() {
                        current.entry.add_item(category, item);
                    }
                }
            }
        }

        if let Some(done) = block.take() {
            self.finish(done, &mut report);
        }

        debug!(
            entries = report.entries.len(),
            skipped = report.skipped.len(),
            ignored_headings = report.ignored_headings.len(),
            "changelog parsed"
        );

        report
    }

    fn finish(&self, block: Block, report: &mut ParseReport) {
        let reason = if block.entry.is_empty() {
            Some(if block.recognized {
                SkipReason::EmptyCategories
            } else {
                SkipReason::NoCategories
            })
        } else if !self.config.include_unreleased && block.entry.is_unreleased() {
            Some(SkipReason::UnreleasedExcluded)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                debug!(version = %block.entry.version, %reason, "skipping version block");
                report.skipped.push(SkippedVersion {
                    version: block.entry.version,
                    reason,
                });
            }
            None => report.entries.push(block.entry),
        }
    }
}

impl Default for ChangelogParser {
    fn default() -> Self {
        Self::new()
    }
}
