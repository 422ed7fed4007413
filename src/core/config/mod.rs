//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! An explicit path (from `--config`) is used as-is and must exist.
//! Otherwise the first existing file wins, searched in order:
//! 1. `$KRAKEN_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/kraken/config.toml`
//! 3. `~/.kraken/config.toml`
//!
//! Missing files are not an error; defaults are used.
//!
//! # Example
//!
//! ```no_run
//! use kraken_console::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! println!("Prompt: {:?}", config.prompt());
//! println!("Prompt enabled: {}", config.prompt_enabled());
//! ```

pub mod schema;

pub use schema::ConsoleConfig;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Prompt printed when none is configured.
pub const DEFAULT_PROMPT: &str = "kraken> ";

/// Banner printed when none is configured.
pub const DEFAULT_BANNER: &str = "Kraken console";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration with defaults applied through accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Values read from the config file
    pub console: ConsoleConfig,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration.
    ///
    /// If `explicit` is provided only that file is read. Otherwise the
    /// standard locations are searched.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed,
    /// or if an explicit path does not exist.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::search(),
        };

        let Some(path) = path else {
            return Ok(Config::default());
        };

        let console = Self::read_config(&path)?;
        console.validate()?;

        Ok(Config {
            console,
            path: Some(path),
        })
    }

    /// Find the first existing config file in the standard locations.
    fn search() -> Option<PathBuf> {
        Self::candidate_paths().into_iter().find(|p| p.exists())
    }

    /// Standard config locations in search order.
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. $KRAKEN_CONFIG
        if let Ok(path) = std::env::var("KRAKEN_CONFIG") {
            paths.push(PathBuf::from(path));
        }

        // 2. $XDG_CONFIG_HOME/kraken/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_home).join("kraken/config.toml"));
        }

        // 3. ~/.kraken/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".kraken/config.toml"));
        }

        paths
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<ConsoleConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Get the prompt literal.
    ///
    /// Defaults to `"kraken> "` if not configured.
    pub fn prompt(&self) -> &str {
        self.console.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    /// Check if the prompt is printed after each command.
    ///
    /// Defaults to `true` if not configured.
    pub fn prompt_enabled(&self) -> bool {
        self.console.prompt_enabled.unwrap_or(true)
    }

    /// Get the session banner.
    pub fn banner(&self) -> &str {
        self.console.banner.as_deref().unwrap_or(DEFAULT_BANNER)
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl From<ConsoleConfig> for Config {
    fn from(console: ConsoleConfig) -> Self {
        Config {
            console,
            path: None,
        }
    }
}
