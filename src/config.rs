//! Configuration file support for selectbox.
//!
//! Configuration is loaded from `~/.config/selectbox/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/selectbox/config.toml
//! placeholder = "Pick a topic"
//! width = 48
//!
//! [[items]]
//! id = "1"
//! label = "Science"
//! icon = "🧬"
//!
//! [[items]]
//! id = "2"
//! label = "Art"
//! icon = "🎨"
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, SelectboxError};
use crate::item::{Item, seed_items};

pub const DEFAULT_PLACEHOLDER: &str = "Select items...";
pub const DEFAULT_WIDTH: u16 = 40;
pub const PLACEHOLDER_ENV: &str = "SELECTBOX_PLACEHOLDER";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Header text shown while nothing is selected
    pub placeholder: Option<String>,

    /// Width of the dropdown in columns
    pub width: Option<u16>,

    /// Initial candidate list; the built-in list is used when empty
    pub items: Vec<Item>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        Self::load_or_default(&Self::config_path())
    }

    /// Load from `path`, warning on stderr and falling back to defaults on failure.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    /// Read and parse a config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|source| SelectboxError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("selectbox")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, placeholder: Option<String>, width: Option<u16>) -> Self {
        if placeholder.is_some() {
            self.placeholder = placeholder;
        }
        if width.is_some() {
            self.width = width;
        }
        self
    }

    /// Get the placeholder, falling back to environment variable or default.
    pub fn placeholder(&self) -> String {
        self.placeholder_with_env(std::env::var(PLACEHOLDER_ENV).ok())
    }

    fn placeholder_with_env(&self, env: Option<String>) -> String {
        self.placeholder
            .clone()
            .or(env)
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string())
    }

    pub fn width(&self) -> u16 {
        self.width.unwrap_or(DEFAULT_WIDTH).max(10)
    }

    /// Initial candidate list with duplicate ids dropped (first one wins).
    pub fn items(&self) -> Vec<Item> {
        if self.items.is_empty() {
            return seed_items();
        }

        let mut seen = HashSet::new();
        self.items
            .iter()
            .filter(|item| seen.insert(item.id.clone()))
            .cloned()
            .collect()
    }
}
