//! `classgraph.toml` parsing
//!
//! ```toml
//! [workspace]
//! classes = ["classes/app.json"]
//!
//! [runtime]
//! platform = true
//! classes = ["classes/lib.json"]
//!
//! [index]
//! runtime_descendants = false
//! ```
//!
//! Every section is optional. Relative paths are resolved against the
//! directory holding the config file.

use std::path::{Path, PathBuf};

use classgraph_core::IndexOptions;
use serde::{Deserialize, Serialize};

use crate::error::{LoadError, Result};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "classgraph.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub workspace: WorkspaceConfig,
    pub runtime: RuntimeConfig,
    pub index: IndexConfig,
}

/// Descriptor files making up the editable workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub classes: Vec<PathBuf>,
}

/// Reference classes available for resolution but never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Include the built-in core platform classes.
    pub platform: bool,
    pub classes: Vec<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            platform: true,
            classes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub runtime_descendants: bool,
}

impl IndexConfig {
    pub fn options(&self) -> IndexOptions {
        IndexOptions {
            runtime_descendants: self.runtime_descendants,
        }
    }
}

impl Config {
    /// Read a config file. Relative paths inside it become relative to its
    /// directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&text).map_err(|source| LoadError::Toml {
            path: path.to_path_buf(),
            source,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.rebase(base);
        tracing::debug!("Loaded config {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    fn rebase(&mut self, base: &Path) {
        for path in self
            .workspace
            .classes
            .iter_mut()
            .chain(self.runtime.classes.iter_mut())
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
