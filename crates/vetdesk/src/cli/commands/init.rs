//! Init command

use std::path::PathBuf;

use clap::Args;
use console::style;
use dialoguer::{Confirm, Select};
use tracing::info;

use vetdesk_core::config::{Config, DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_YAML};

use crate::cli::output::{path_style, success, warning};
use crate::cli::Cli;
use crate::exit_codes;

/// Initialize a new vetdesk configuration
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Use defaults without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, yes = self.yes, "executing init command");
        let cwd = std::env::current_dir()?;
        let config_path = self
            .output
            .clone()
            .unwrap_or_else(|| cwd.join(DEFAULT_CONFIG_YAML));

        if config_path.exists() && !self.force {
            if self.yes {
                anyhow::bail!(
                    "Configuration file already exists at {}. Use --force to overwrite.",
                    config_path.display()
                );
            }

            let overwrite = Confirm::new()
                .with_prompt(format!(
                    "Configuration file already exists at {}. Overwrite?",
                    config_path.display()
                ))
                .default(false)
                .interact()?;

            if !overwrite {
                warning("Aborted.");
                std::process::exit(exit_codes::CANCELLED);
            }
        }

        let format = if self.yes {
            "yaml"
        } else {
            let formats = vec!["yaml", "toml"];
            let selection = Select::new()
                .with_prompt("Configuration format")
                .items(&formats)
                .default(0)
                .interact()?;
            formats[selection]
        };

        let config_path =
            if format == "toml" && config_path.extension().is_some_and(|e| e == "yaml") {
                config_path.with_extension("toml")
            } else {
                config_path
            };

        let content = render_config(format)?;
        std::fs::write(&config_path, &content)?;

        if !cli.quiet {
            success(&format!(
                "Created configuration at {}",
                path_style().apply_to(config_path.display())
            ));
            println!();
            println!("Next steps:");
            println!(
                "  1. Set {} if the app should read a changelog file",
                style("changelog.file").cyan()
            );
            println!("  2. Run {} to check it", style("vetdesk validate").cyan());
            println!(
                "  3. Run {} to preview the entries",
                style("vetdesk changelog").cyan()
            );
        }

        Ok(())
    }
}

/// Default configuration in the requested format
fn render_config(format: &str) -> anyhow::Result<String> {
    if format == "toml" {
        let config: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE)?;
        Ok(toml::to_string_pretty(&config)?)
    } else {
        Ok(DEFAULT_CONFIG_TEMPLATE.to_string())
    }
}
