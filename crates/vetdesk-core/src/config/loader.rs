//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::Config;
use super::validation::validate_config;

/// Serialization format of a config file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }

    fn parse(self, content: &str) -> Result<Config> {
        let config = match self {
            Self::Toml => toml::from_str(content).map_err(ConfigError::TomlError)?,
            Self::Yaml => serde_yaml::from_str(content).map_err(ConfigError::YamlError)?,
        };
        Ok(config)
    }
}

/// Load and validate a config file.
///
/// A relative `changelog.file` is resolved against the config file's directory.
pub fn load_config(path: &Path) -> Result<Config> {
    let format = ConfigFormat::of(path);
    info!(path = %path.display(), ?format, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
    let mut config = format.parse(&content)?;
    validate_config(&config)?;

    let base = path.parent().unwrap_or(Path::new(""));
    if let Some(file) = config.changelog.file.take() {
        config.changelog.file = Some(if file.is_relative() {
            base.join(file)
        } else {
            file
        });
    }

    debug!(changelog = ?config.changelog.file, "config loaded");
    Ok(config)
}

/// Nearest config file, looking in `start_dir` and then each parent
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let found = start_dir.ancestors().find_map(|dir| {
        config_file_names()
            .into_iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    });

    match &found {
        Some(path) => info!(path = %path.display(), "found config file"),
        None => debug!(start_dir = %start_dir.display(), "no config file found"),
    }
    found
}

/// Load the nearest config file above `dir`
pub fn load_config_from_dir(dir: &Path) -> Result<(Config, PathBuf)> {
    let path = find_config(dir).ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))?;
    let config = load_config(&path)?;
    Ok((config, path))
}

/// Load the nearest config file, falling back to defaults on any error
pub fn load_config_or_default(dir: &Path) -> (Config, Option<PathBuf>) {
    load_config_from_dir(dir)
        .map(|(config, path)| (config, Some(path)))
        .unwrap_or_else(|e| {
            warn!(dir = %dir.display(), error = %e, "no usable config found, using defaults");
            (Config::default(), None)
        })
}
