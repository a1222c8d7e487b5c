//! Builds a hierarchy index from a loaded config

use std::sync::Arc;

use classgraph_core::{HierarchyIndex, RuntimeClasspath, Workspace};
use tracing::{info, warn};

use crate::config::Config;
use crate::descriptors::read_descriptors;
use crate::error::{LoadError, Result};

/// Counts gathered while building an index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub workspace_classes: usize,
    pub runtime_classes: usize,
    /// Workspace definitions that replaced an earlier one of the same name.
    pub redefined: usize,
}

/// Read every descriptor file named by `config` and assemble the index.
///
/// Runtime files are applied after the platform classes, later files
/// overriding earlier ones. Workspace files are applied through
/// [`HierarchyIndex::put_class`], so they get the same checks as edits.
pub fn build_index(config: &Config) -> Result<(Arc<HierarchyIndex>, LoadSummary)> {
    let mut runtime_descriptors = Vec::new();
    if config.runtime.platform {
        runtime_descriptors.extend(RuntimeClasspath::platform_descriptors());
    }
    for path in &config.runtime.classes {
        runtime_descriptors.extend(read_descriptors(path)?);
    }
    let runtime = RuntimeClasspath::from_descriptors(runtime_descriptors);

    let index = HierarchyIndex::with_options(Workspace::new(), runtime, config.index.options());
    let mut summary = LoadSummary {
        runtime_classes: index.runtime().len(),
        ..Default::default()
    };

    for path in &config.workspace.classes {
        for desc in read_descriptors(path)? {
            let name = desc.name.clone();
            let diff = index.put_class(desc).map_err(|source| LoadError::Hierarchy {
                path: path.clone(),
                source,
            })?;
            if diff.added_classes.is_empty() {
                warn!("{} redefines {}", path.display(), name);
                summary.redefined += 1;
            }
        }
    }
    summary.workspace_classes = index.workspace_classes().len();

    info!(
        "Loaded {} workspace classes, {} runtime classes",
        summary.workspace_classes, summary.runtime_classes
    );
    Ok((index, summary))
}
