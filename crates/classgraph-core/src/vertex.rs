//! Graph vertex wrapping one class descriptor

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use tracing::debug;

use crate::edge::{DirectedEdge, Vertex};
use crate::error::{HierarchyError, Result};
use crate::index::HierarchyIndex;
use crate::model::ClassDescriptor;

/// A class as a graph node.
///
/// Identity is the class name alone. The descriptor slot can be swapped for
/// a newer snapshot of the same class, which lets long-lived vertices follow
/// workspace edits.
pub struct ClassVertex {
    name: String,
    data: RwLock<Arc<ClassDescriptor>>,
    /// Lookups only. The index owns registered vertices, not the reverse.
    index: Weak<HierarchyIndex>,
}

impl ClassVertex {
    pub(crate) fn new(index: Weak<HierarchyIndex>, data: Arc<ClassDescriptor>) -> Self {
        ClassVertex {
            name: data.name.clone(),
            data: RwLock::new(data),
            index,
        }
    }

    /// Build a vertex that the index does not track.
    pub fn untracked(index: &Arc<HierarchyIndex>, data: Arc<ClassDescriptor>) -> Arc<Self> {
        Arc::new(ClassVertex::new(Arc::downgrade(index), data))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the slot without the name check. Callers guarantee the name.
    pub(crate) fn replace(&self, data: Arc<ClassDescriptor>) {
        *self.data.write() = data;
    }

    /// Reuse the registered vertex for `data`'s class, or wrap it fresh.
    fn neighbour(index: &HierarchyIndex, data: Arc<ClassDescriptor>) -> Arc<ClassVertex> {
        match index.vertex(&data.name) {
            Some(existing) => existing,
            None => Arc::new(ClassVertex::new(index.downgrade(), data)),
        }
    }
}

impl Vertex for ClassVertex {
    type Data = Arc<ClassDescriptor>;

    fn data(&self) -> Arc<ClassDescriptor> {
        Arc::clone(&self.data.read())
    }

    fn set_data(&self, data: Arc<ClassDescriptor>) -> Result<()> {
        if data.name != self.name {
            return Err(HierarchyError::NameMismatch {
                expected: self.name.clone(),
                found: data.name.clone(),
            });
        }
        self.replace(data);
        Ok(())
    }

    fn edges(self: &Arc<Self>) -> HashSet<DirectedEdge<Self>> {
        let Some(index) = self.index.upgrade() else {
            debug!("Hierarchy index for {} was dropped, no edges", self.name);
            return HashSet::new();
        };

        let neighbours = index.neighbours(&self.name);
        let mut edges = HashSet::with_capacity(neighbours.parents.len() + neighbours.descendants.len());

        for parent in neighbours.parents {
            let other = Self::neighbour(&index, parent);
            edges.insert(DirectedEdge::new(other, Arc::clone(self)));
        }
        for child in neighbours.descendants {
            let other = Self::neighbour(&index, child);
            edges.insert(DirectedEdge::new(Arc::clone(self), other));
        }

        edges
    }
}

impl PartialEq for ClassVertex {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ClassVertex {}

impl Hash for ClassVertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for ClassVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for ClassVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassVertex")
            .field("name", &self.name)
            .field("tracked", &self.index.upgrade().is_some_and(|i| i.is_tracked(self)))
            .finish()
    }
}
