//! Configuration for ashactl.
//!
//! Loads settings from the user's config directory
//! (`~/.config/asha/config.toml` on Linux) or uses defaults. A malformed
//! file is reported and ignored, never fatal.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AshaConfig {
    /// Label shown before the input prompt in chat
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Column width used to wrap answer paragraphs
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,

    /// Optional external knowledge pack (JSON) replacing the built-in one
    #[serde(default)]
    pub knowledge_pack: Option<PathBuf>,
}

fn default_prompt() -> String {
    "you".to_string()
}

fn default_wrap_width() -> usize {
    80
}

impl Default for AshaConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            wrap_width: default_wrap_width(),
            knowledge_pack: None,
        }
    }
}

impl AshaConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("asha").join("config.toml"))
    }

    /// Load the user config, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!("ignoring config at {}: {err:#}", path.display());
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config =
            toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }
}
