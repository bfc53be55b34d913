//! Changelog content access

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use vetdesk_core::config::ChangelogConfig;
use vetdesk_core::{ChangelogError, Result};

/// Changelog shipped with the application
pub const BUNDLED_CHANGELOG: &str = include_str!("../CHANGELOG.md");

/// Raw changelog text bundled with the application
pub fn get_changelog_content() -> &'static str {
    BUNDLED_CHANGELOG
}

/// Where raw changelog text comes from
pub trait ChangelogSource: Send + Sync {
    /// Read the full changelog text
    fn read(&self) -> Result<String>;

    /// Human-readable origin, for messages
    fn describe(&self) -> String;
}

/// The changelog compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl ChangelogSource for BundledSource {
    fn read(&self) -> Result<String> {
        Ok(get_changelog_content().to_string())
    }

    fn describe(&self) -> String {
        "bundled changelog".to_string()
    }
}

/// A changelog file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this source reads
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChangelogSource for FileSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read(&self) -> Result<String> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ChangelogError::FileNotFound(self.path.clone()),
            _ => ChangelogError::Io {
                path: self.path.clone(),
                source: e,
            },
        })?;
        debug!(bytes = content.len(), "changelog file read");
        Ok(content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick the configured file, or the bundled changelog when none is set
pub fn source_for(config: &ChangelogConfig) -> Box<dyn ChangelogSource> {
    match &config.file {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(BundledSource),
    }
}

/// Check that the first non-blank line is a `# ` title
pub fn has_title_line(content: &str) -> bool {
    content
        .lines()
        .find(|line| !line.trim().is_empty())
        .is_some_and(|line| line.trim_start().starts_with("# "))
}
