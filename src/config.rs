//! Persistent tool configuration.
//!
//! Loaded from `~/.config/tdr/config.toml` (platform equivalent resolved via
//! the `dirs` crate). Every field carries a default, so a missing file and a
//! partially filled file both work; command-line flags override whatever the
//! file provides.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Directory under the platform config root that holds our files.
pub const CONFIG_DIR_NAME: &str = "tdr";

/// Config file name inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

fn default_output() -> PathBuf {
    PathBuf::from("demo.cast")
}

fn default_width() -> u16 {
    80
}

fn default_height() -> u16 {
    24
}

fn default_title() -> String {
    "Terminal demo".to_string()
}

fn default_typing_delay() -> f64 {
    0.05
}

fn default_env() -> BTreeMap<String, String> {
    let mut env = BTreeMap::new();
    env.insert("SHELL".to_string(), "/bin/bash".to_string());
    env.insert("TERM".to_string(), "xterm-256color".to_string());
    env
}

/// Tool configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where recordings land when `--output` is not given.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Terminal width advertised in the recording header.
    #[serde(default = "default_width")]
    pub width: u16,

    /// Terminal height advertised in the recording header.
    #[serde(default = "default_height")]
    pub height: u16,

    /// Recording title embedded in the header.
    #[serde(default = "default_title")]
    pub title: String,

    /// Seconds charged per simulated keystroke.
    #[serde(default = "default_typing_delay")]
    pub typing_delay: f64,

    /// Environment map embedded in the recording header.
    #[serde(default = "default_env")]
    pub env: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            width: default_width(),
            height: default_height(),
            title: default_title(),
            typing_delay: default_typing_delay(),
            env: default_env(),
        }
    }
}

impl Config {
    /// Full path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow!("Could not determine config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write the config file, creating its directory when needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }
}
