//! Configuration management for bgate.
//!
//! Configuration is read from `~/.config/bgate/config.toml` unless another
//! file is given on the command line. If the default file doesn't exist, one
//! with comments is created. Flags and environment variables override it.

pub mod keybindings;

pub use keybindings::KeybindingConfig;

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://www.biblegateway.com/passage/";

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Translation code such as `ESV`. Unset lets the site pick its default.
    pub translation: Option<String>,
    pub interactive: bool,
    /// Horizontal padding, in columns, on each side of the text.
    pub padding: usize,
    pub base_url: String,
    pub keybindings: KeybindingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translation: None,
            interactive: false,
            padding: 0,
            base_url: DEFAULT_BASE_URL.to_string(),
            keybindings: KeybindingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default path when `None`.
    ///
    /// A missing default file is created with commented defaults. A missing
    /// explicit file is an error. Missing fields use default values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let config_path = Self::default_config_path()?;
                if !config_path.exists() {
                    Self::create_default_config(&config_path)?;
                    return Ok(Self::default());
                }
                Self::from_file(&config_path)
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/bgate/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("bgate").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn default_config_content() -> &'static str {
        r##"# bgate configuration
#
# Every setting can also be given as a flag or environment variable:
#   --translation / BGATE_TRANSLATION
#   --interactive / BGATE_INTERACTIVE
#   --padding     / BGATE_PADDING

# Translation code, e.g. "ESV", "NIV", "KJV". Leave unset for the site default.
# translation = "ESV"

# Open a scrollable view instead of printing the passage.
interactive = false

# Blank columns on each side of the text.
padding = 0

base_url = "https://www.biblegateway.com/passage/"

# Keybindings for the interactive view:
# - Single characters: "a", "A", "1"
# - Special keys: Enter, Tab, Backspace, Home, End, PageUp, PageDown,
#   Up, Down, Left, Right, Esc, Space, F1-F12
# - With modifiers: "Ctrl+c", "Shift+Tab", "Alt+Enter"
[keybindings]
quit = ["q", "Ctrl+c", "Esc"]
scroll_down = ["j", "Down"]
scroll_up = ["k", "Up"]
page_down = ["PageDown", "Space", "f"]
page_up = ["PageUp", "b"]
top = ["g", "Home"]
bottom = ["G", "End"]
"##
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
