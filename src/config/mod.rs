//! Configuration system for jsonsift.
//!
//! Provides persistent defaults for the output and query options, loaded
//! from a TOML file and overridden by command-line arguments. Missing or
//! unreadable config files fall back to the built-in defaults.
//!
//! # Example
//!
//! ```
//! use jsonsift::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.indent, 4);
//! assert!(config.sort_keys);
//! assert_eq!(config.separator, '/');
//! ```

use serde::{Deserialize, Serialize};

/// Persistent defaults for jsonsift.
///
/// All fields have sensible defaults via `Config::default()` and may be set
/// in `~/.config/jsonsift/config.toml`:
///
/// ```toml
/// indent = 2
/// sort_keys = false
/// separator = "."
/// quiet = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Spaces per indentation level for JSON output (0 = compact)
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Sort object keys on output
    #[serde(default = "default_sort_keys")]
    pub sort_keys: bool,

    /// Path segment separator
    #[serde(default = "default_separator")]
    pub separator: char,

    /// Quietly ignore paths that cannot be followed
    #[serde(default)]
    pub quiet: bool,
}

/// Returns the default indent width.
fn default_indent() -> usize {
    4
}

/// Returns the default for key sorting.
fn default_sort_keys() -> bool {
    true
}

/// Returns the default path separator.
fn default_separator() -> char {
    '/'
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            sort_keys: default_sort_keys(),
            separator: default_separator(),
            quiet: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/jsonsift/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("jsonsift");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't
    /// be read or parsed.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => Self::from_toml(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
