use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub list: ListConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Number of records generated on first activation
    pub initial_count: usize,
    /// Lines occupied by each record
    pub row_height: usize,
    /// Scroll offset (lines) past which the scroll-to-top button shows
    pub scroll_threshold: usize,
    /// Prefix rendered before every price
    pub currency_symbol: String,
    /// Fixed RNG seed for reproducible data (unset = random)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Animate scroll-to-top instead of jumping
    pub smooth_scroll: bool,
    /// Event poll interval while animating, in milliseconds
    pub tick_rate_ms: u64,
    /// Capture mouse wheel and clicks
    pub mouse_capture: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            initial_count: 10_000,
            row_height: 1,
            scroll_threshold: 100,
            currency_symbol: "€".to_string(),
            seed: None,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            smooth_scroll: true,
            tick_rate_ms: 16,
            mouse_capture: true,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist. The default location is optional and
    /// falls back to built-in defaults when absent.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/sample-list/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sample-list").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Read configuration file");

        toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.list.row_height == 0 {
            return Err(ConfigError::Invalid(
                "list.row_height must be at least 1".into(),
            ));
        }
        if self.list.currency_symbol.is_empty() {
            return Err(ConfigError::Invalid(
                "list.currency_symbol must not be empty".into(),
            ));
        }
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid(
                "tui.tick_rate_ms must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
