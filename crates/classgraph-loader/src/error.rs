//! Loader errors

use std::path::PathBuf;

use classgraph_core::HierarchyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid descriptor file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("cannot load classes from {}: {source}", .path.display())]
    Hierarchy {
        path: PathBuf,
        source: HierarchyError,
    },
}

pub type Result<T> = std::result::Result<T, LoadError>;
