//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing. The prompt is written verbatim
//! after every command, so it must stay on one line.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Console configuration (user scope).
///
/// # Example
///
/// ```toml
/// prompt = "kraken> "
/// prompt_enabled = true
/// banner = "Kraken console"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Prompt literal printed after each command
    pub prompt: Option<String>,

    /// Whether the prompt is printed at all
    pub prompt_enabled: Option<bool>,

    /// Line printed when an interactive session starts
    pub banner: Option<String>,
}

impl ConsoleConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(prompt) = &self.prompt {
            if prompt.contains('\n') || prompt.contains('\r') {
                return Err(ConfigError::InvalidValue(
                    "prompt cannot contain line breaks".to_string(),
                ));
            }
        }

        if let Some(banner) = &self.banner {
            if banner.contains('\n') {
                return Err(ConfigError::InvalidValue(
                    "banner must be a single line".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full() {
        let config: ConsoleConfig = toml::from_str(
            r#"
            prompt = "> "
            prompt_enabled = false
            banner = "hello"
            "#,
        )
        .unwrap();

        assert_eq!(config.prompt.as_deref(), Some("> "));
        assert_eq!(config.prompt_enabled, Some(false));
        assert_eq!(config.banner.as_deref(), Some("hello"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_empty() {
        let config: ConsoleConfig = toml::from_str("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<ConsoleConfig, _> = toml::from_str("history = true");
        assert!(result.is_err());
    }

    #[test]
    fn multiline_prompt_rejected() {
        let config = ConsoleConfig {
            prompt: Some("a\nb".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn multiline_banner_rejected() {
        let config = ConsoleConfig {
            banner: Some("one\ntwo".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
