//! Changelog command

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use console::style;
use tracing::{debug, info};

use vetdesk_changelog::formatter::{FormatOptions, FormatterRegistry};
use vetdesk_changelog::source::{source_for, ChangelogSource, FileSource};
use vetdesk_changelog::types::is_unreleased_token;
use vetdesk_changelog::{ChangelogEntry, ChangelogParser, Language, ParserConfig};
use vetdesk_core::config::load_config_or_default;

use crate::cli::{Cli, OutputFormat};

/// Show the parsed changelog
#[derive(Debug, Args)]
pub struct ChangelogCommand {
    /// Changelog file (defaults to the configured or bundled changelog)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Display language
    #[arg(long, value_enum)]
    pub lang: Option<LangArg>,

    /// Only show this version
    #[arg(long = "release", value_name = "VERSION")]
    pub release: Option<String>,

    /// Only show the latest released version
    #[arg(long, conflicts_with = "release")]
    pub latest: bool,

    /// Show at most this many versions
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Display style (text, markdown)
    #[arg(long)]
    pub style: Option<String>,

    /// Hide release dates
    #[arg(long)]
    pub no_dates: bool,
}

/// Languages accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LangArg {
    /// Spanish
    Es,
    /// English
    En,
}

impl From<LangArg> for Language {
    fn from(lang: LangArg) -> Self {
        match lang {
            LangArg::Es => Language::Es,
            LangArg::En => Language::En,
        }
    }
}

impl ChangelogCommand {
    /// Execute the changelog command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            file = ?self.file,
            release = ?self.release,
            latest = self.latest,
            "executing changelog command"
        );
        let cwd = std::env::current_dir()?;
        let (mut config, _) = load_config_or_default(&cwd);

        if let Some(lang) = self.lang {
            config.changelog.language = lang.into();
        }
        if let Some(style) = &self.style {
            config.changelog.style = style.clone();
        }
        if self.no_dates {
            config.changelog.include_dates = false;
        }

        let source: Box<dyn ChangelogSource> = match &self.file {
            Some(path) => Box::new(FileSource::new(path)),
            None => source_for(&config.changelog),
        };
        let content = source.read()?;
        debug!(source = %source.describe(), bytes = content.len(), "changelog loaded");

        let parser =
            ChangelogParser::with_config(ParserConfig::from_changelog_config(&config.changelog));
        let entries = self.select(parser.parse(&content));

        if entries.is_empty() {
            if !cli.quiet {
                println!("{}", style("No changelog entries found.").yellow());
            }
            return Ok(());
        }

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
            OutputFormat::Text => {
                let registry = FormatterRegistry::new();
                let formatter = registry.get(&config.changelog.style).ok_or_else(|| {
                    anyhow::anyhow!(
                        "Unknown style '{}'. Available: {}",
                        config.changelog.style,
                        registry.names().join(", ")
                    )
                })?;
                let options = FormatOptions::from_config(&config.changelog);
                println!("{}", formatter.format(&entries, &options).trim_end());
            }
        }

        Ok(())
    }

    /// Apply the version filters, keeping source order
    fn select(&self, mut entries: Vec<ChangelogEntry>) -> Vec<ChangelogEntry> {
        if let Some(release) = &self.release {
            entries.retain(|e| matches_release(&e.version, release));
        }
        if self.latest {
            entries = entries
                .into_iter()
                .find(|e| !e.is_unreleased())
                .into_iter()
                .collect();
        }
        if let Some(limit) = self.limit {
            entries.truncate(limit);
        }
        entries
    }
}

/// Compare a version with `--release`; either unreleased spelling matches both
fn matches_release(version: &str, release: &str) -> bool {
    let release = release.trim();
    if is_unreleased_token(release) {
        is_unreleased_token(version)
    } else {
        version.eq_ignore_ascii_case(release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vetdesk_changelog::Category;

    fn command() -> ChangelogCommand {
        ChangelogCommand {
            file: None,
            lang: None,
            release: None,
            latest: false,
            limit: None,
            style: None,
            no_dates: false,
        }
    }

    fn entries() -> Vec<ChangelogEntry> {
        ["Unreleased", "1.1.0", "1.0.0"]
            .into_iter()
            .map(|version| {
                let mut entry = ChangelogEntry::new(version);
                entry.add_item(Category::Added, "item");
                entry
            })
            .collect()
    }

    fn versions(entries: &[ChangelogEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.version.as_str()).collect()
    }

    #[test]
    fn test_select_all() {
        assert_eq!(
            versions(&command().select(entries())),
            vec!["Unreleased", "1.1.0", "1.0.0"]
        );
    }

    #[test]
    fn test_select_release() {
        let cmd = ChangelogCommand {
            release: Some("1.0.0".to_string()),
            ..command()
        };
        assert_eq!(versions(&cmd.select(entries())), vec!["1.0.0"]);
    }

    #[test]
    fn test_select_release_matches_either_sentinel() {
        let cmd = ChangelogCommand {
            release: Some("Sin Publicar".to_string()),
            ..command()
        };
        assert_eq!(versions(&cmd.select(entries())), vec!["Unreleased"]);

        assert!(matches_release("Sin Publicar", "unreleased"));
        assert!(!matches_release("1.0.0", "Unreleased"));
    }

    #[test]
    fn test_select_latest_skips_unreleased() {
        let cmd = ChangelogCommand {
            latest: true,
            ..command()
        };
        assert_eq!(versions(&cmd.select(entries())), vec!["1.1.0"]);
    }

    #[test]
    fn test_select_limit() {
        let cmd = ChangelogCommand {
            limit: Some(2),
            ..command()
        };
        assert_eq!(versions(&cmd.select(entries())), vec!["Unreleased", "1.1.0"]);
    }

    #[test]
    fn test_lang_conversion() {
        assert_eq!(Language::from(LangArg::Es), Language::Es);
        assert_eq!(Language::from(LangArg::En), Language::En);
    }
}
