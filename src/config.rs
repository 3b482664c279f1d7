//! Configuration for rendering content fields.
//!
//! A config file is TOML with a single `[render]` table; every key is
//! optional and falls back to the [`RenderOptions`] defaults:
//!
//! ```toml
//! [render]
//! variant = "lead"
//! color = "muted"
//! center = true
//! min_margin = 2
//! max_margin = 4
//! class_name = "about-hero-text"
//! ```

use crate::error::{Error, Result};
use crate::lines::RenderOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "LINKTEXT_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderOptions,
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let source = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}
