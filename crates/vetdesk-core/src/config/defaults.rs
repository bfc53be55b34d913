//! Default configuration values

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "vetdesk.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "vetdesk.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".vetdesk.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".vetdesk.toml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# vetdesk configuration

name: null

changelog:
  # Read this file instead of the changelog bundled with the app
  file: null
  language: es
  include_unreleased: true
  include_dates: true
  style: text
  # Extra category headings, e.g. "Nuevo": added
  aliases: {}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{validate_config, Config};

    #[test]
    fn test_template_is_valid() {
        let config: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert!(validate_config(&config).is_ok());
        assert!(config.changelog.aliases.is_empty());
    }
}
