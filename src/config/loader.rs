//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::LabConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LabConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<LabConfig, ConfigError> {
    let config: LabConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.delays.default_seconds, 5);
        assert_eq!(config.delays.default_loop, 1000);
        assert_eq!(config.harness.requests, 10);
    }

    #[test]
    fn partial_config_overrides_one_section() {
        let config = parse_config(
            r#"
            [delays]
            default_seconds = 1

            [harness]
            read_timeout_secs = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.delays.default_seconds, 1);
        assert_eq!(config.delays.default_loop, 1000);
        assert_eq!(config.harness.read_timeout_secs, 4);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = parse_config(
            r#"
            [listener]
            bind_address = "not-an-address"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
