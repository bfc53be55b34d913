//! Structural diagnostics for changelog files
//!
//! The parser drops anything it does not understand. Lint reports what was
//! dropped so maintainers can fix the file; it never fails.

use std::collections::HashSet;
use std::fmt;

use semver::Version;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::dates::parse_iso_date;
use crate::parser::{ChangelogParser, SkipReason};
use crate::source::has_title_line;
use crate::types::is_unreleased_token;

/// A single lint finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LintWarning {
    /// First non-blank line is not a `# ` title
    MissingTitle,
    /// A version block produced no entry
    SkippedVersion { version: String, reason: SkipReason },
    /// A third-level heading matched no category
    IgnoredHeading { version: String, heading: String },
    /// Version is neither semver nor the unreleased sentinel
    InvalidVersion { version: String },
    /// Date has the right shape but is not a calendar date
    InvalidDate { version: String, date: String },
    /// Same version appears more than once
    DuplicateVersion { version: String },
    /// A release is newer than the one listed above it
    OutOfOrder { version: String, previous: String },
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "changelog does not start with a '# ' title"),
            Self::SkippedVersion { version, reason } => {
                write!(f, "version {} skipped: {}", version, reason)
            }
            Self::IgnoredHeading { version, heading } => {
                write!(f, "version {}: unknown heading '{}' ignored", version, heading)
            }
            Self::InvalidVersion { version } => {
                write!(f, "version {} is not a valid semantic version", version)
            }
            Self::InvalidDate { version, date } => {
                write!(f, "version {}: invalid date '{}'", version, date)
            }
            Self::DuplicateVersion { version } => {
                write!(f, "version {} appears more than once", version)
            }
            Self::OutOfOrder { version, previous } => write!(
                f,
                "version {} is listed after older version {}",
                version, previous
            ),
        }
    }
}

/// Lint results
#[derive(Debug, Clone, Default, Serialize)]
pub struct LintReport {
    /// Number of entries the parser produced
    pub entries: usize,
    /// Findings in source order
    pub warnings: Vec<LintWarning>,
}

impl LintReport {
    /// Check if no warnings were found
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Lint changelog content with the given parser
#[instrument(skip(content, parser), fields(content_len = content.len()))]
pub fn lint_changelog(content: &str, parser: &ChangelogParser) -> LintReport {
    let parsed = parser.parse_with_report(content);
    let mut warnings = Vec::new();

    if !has_title_line(content) {
        warnings.push(LintWarning::MissingTitle);
    }

    for skipped in &parsed.skipped {
        warnings.push(LintWarning::SkippedVersion {
            version: skipped.version.clone(),
            reason: skipped.reason,
        });
    }

    for ignored in &parsed.ignored_headings {
        warnings.push(LintWarning::IgnoredHeading {
            version: ignored.version.clone(),
            heading: ignored.heading.clone(),
        });
    }

    let mut seen = HashSet::new();
    let mut previous: Option<(Version, &str)> = None;

    for entry in &parsed.entries {
        if !seen.insert(entry.version.as_str()) {
            warnings.push(LintWarning::DuplicateVersion {
                version: entry.version.clone(),
            });
        }

        if !entry.date.is_empty() && parse_iso_date(&entry.date).is_none() {
            warnings.push(LintWarning::InvalidDate {
                version: entry.version.clone(),
                date: entry.date.clone(),
            });
        }

        if is_unreleased_token(&entry.version) {
            continue;
        }

        let Ok(version) = Version::parse(&entry.version) else {
            warnings.push(LintWarning::InvalidVersion {
                version: entry.version.clone(),
            });
            continue;
        };

        if let Some((prev, prev_label)) = &previous {
            if version > *prev {
                warnings.push(LintWarning::OutOfOrder {
                    version: entry.version.clone(),
                    previous: prev_label.to_string(),
                });
            }
        }
        previous = Some((version, entry.version.as_str()));
    }

    debug!(
        entries = parsed.entries.len(),
        warnings = warnings.len(),
        "changelog linted"
    );

    LintReport {
        entries: parsed.entries.len(),
        warnings,
    }
}
