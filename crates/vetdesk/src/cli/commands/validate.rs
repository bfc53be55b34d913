//! Validate command

use clap::Args;
use console::style;
use tracing::info;

use vetdesk_changelog::source::{source_for, ChangelogSource};
use vetdesk_changelog::{lint_changelog, ChangelogParser, ParserConfig};
use vetdesk_core::config::{load_config_from_dir, Config};
use vetdesk_core::{ConfigError, VetdeskError};

use crate::cli::output::{header, path_style};
use crate::cli::{Cli, OutputFormat};
use crate::exit_codes;

/// Validate configuration and lint the changelog
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Only validate configuration file
    #[arg(long)]
    pub config_only: bool,

    /// Strict mode - treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            config_only = self.config_only,
            strict = self.strict,
            "executing validate command"
        );
        let cwd = std::env::current_dir()?;

        let mut errors: Vec<String> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();

        // Loading validates as well
        let (config, config_path) = match load_config_from_dir(&cwd) {
            Ok((c, p)) => (c, Some(p)),
            Err(VetdeskError::Config(ConfigError::NotFound(_))) => {
                warnings.push("No configuration file found, using defaults".to_string());
                (Config::default(), None)
            }
            Err(e) => {
                errors.push(format!("Configuration: {}", e));
                (Config::default(), None)
            }
        };
        let config_failed = !errors.is_empty();

        let mut entries = None;
        let source = source_for(&config.changelog);
        if !self.config_only {
            match source.read() {
                Ok(content) => {
                    let parser = ChangelogParser::with_config(ParserConfig::from_changelog_config(
                        &config.changelog,
                    ));
                    let report = lint_changelog(&content, &parser);
                    if report.entries == 0 {
                        warnings.push("Changelog has no displayable entries".to_string());
                    }
                    warnings.extend(report.warnings.iter().map(|w| format!("Changelog: {}", w)));
                    entries = Some(report.entries);
                }
                Err(e) => errors.push(format!("Changelog: {}", e)),
            }
        }

        if self.strict {
            errors.append(&mut warnings);
        }

        let passed = errors.is_empty();

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "valid": passed,
                    "config_path": config_path.as_ref().map(|p| p.to_string_lossy().to_string()),
                    "changelog": source.describe(),
                    "entries": entries,
                    "errors": errors,
                    "warnings": warnings
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!("{}", header("Validation Results"));
                    println!();

                    if let Some(path) = &config_path {
                        println!("Config: {}", path_style().apply_to(path.display()));
                    }
                    if !self.config_only {
                        println!("Changelog: {}", path_style().apply_to(source.describe()));
                    }
                    if let Some(count) = entries {
                        println!("Entries: {}", count);
                    }
                    println!();

                    if !errors.is_empty() {
                        println!("{}", style("Errors:").red().bold());
                        for error in &errors {
                            println!("  {} {}", style("✗").red(), error);
                        }
                        println!();
                    }

                    if !warnings.is_empty() {
                        println!("{}", style("Warnings:").yellow().bold());
                        for warning in &warnings {
                            println!("  {} {}", style("!").yellow(), warning);
                        }
                        println!();
                    }

                    if passed {
                        if warnings.is_empty() {
                            println!("{}", style("✓ All checks passed").green().bold());
                        } else {
                            println!(
                                "{} with {} warning(s)",
                                style("✓ Validation passed").green().bold(),
                                warnings.len()
                            );
                        }
                    } else {
                        println!(
                            "{} with {} error(s)",
                            style("✗ Validation failed").red().bold(),
                            errors.len()
                        );
                    }
                }
            }
        }

        if let Some(code) = exit_code(passed, config_failed) {
            std::process::exit(code);
        }

        Ok(())
    }
}

/// Process exit status for a failed run; `None` when validation passed
fn exit_code(passed: bool, config_failed: bool) -> Option<i32> {
    match (passed, config_failed) {
        (true, _) => None,
        (false, true) => Some(exit_codes::CONFIG_ERROR),
        (false, false) => Some(exit_codes::VALIDATION_ERROR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_when_passed() {
        assert_eq!(exit_code(true, false), None);
    }

    #[test]
    fn test_exit_code_for_config_errors() {
        assert_eq!(exit_code(false, true), Some(2));
    }

    #[test]
    fn test_exit_code_for_changelog_errors() {
        assert_eq!(exit_code(false, false), Some(5));
    }
}
