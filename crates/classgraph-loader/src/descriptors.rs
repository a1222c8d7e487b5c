//! Class descriptor files: a JSON array of descriptors

use std::path::Path;

use classgraph_core::ClassDescriptor;

use crate::error::{LoadError, Result};

/// Read every descriptor from a JSON file.
pub fn read_descriptors(path: &Path) -> Result<Vec<ClassDescriptor>> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let descriptors: Vec<ClassDescriptor> =
        serde_json::from_str(&text).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!("Read {} descriptors from {}", descriptors.len(), path.display());
    Ok(descriptors)
}

/// Write descriptors as pretty-printed JSON.
pub fn write_descriptors(path: &Path, descriptors: &[ClassDescriptor]) -> Result<()> {
    let json = serde_json::to_string_pretty(descriptors).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
