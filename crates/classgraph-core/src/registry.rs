//! Canonical vertex registry keyed by class name

use std::sync::Arc;

use dashmap::DashMap;

use crate::vertex::ClassVertex;

/// Vertex handles tracked by a hierarchy index. Thread-safe for concurrent access.
///
/// At most one tracked vertex exists per class name.
pub struct VertexRegistry {
    vertices: DashMap<String, Arc<ClassVertex>>,
}

impl VertexRegistry {
    pub fn new() -> Self {
        VertexRegistry {
            vertices: DashMap::new(),
        }
    }

    /// Look up a tracked vertex by class name.
    pub fn get(&self, name: &str) -> Option<Arc<ClassVertex>> {
        self.vertices.get(name).map(|r| Arc::clone(r.value()))
    }

    /// Return the tracked vertex for `name`, creating it with `make` on a miss.
    pub fn get_or_insert_with(
        &self,
        name: &str,
        make: impl FnOnce() -> Arc<ClassVertex>,
    ) -> Arc<ClassVertex> {
        Arc::clone(self.vertices.entry(name.to_string()).or_insert_with(make).value())
    }

    /// Stop tracking `name`. Returns the vertex that was tracked.
    pub fn remove(&self, name: &str) -> Option<Arc<ClassVertex>> {
        self.vertices.remove(name).map(|(_, vertex)| vertex)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vertices.contains_key(name)
    }

    /// Names of tracked vertices, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.vertices.iter().map(|r| r.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl Default for VertexRegistry {
    fn default() -> Self {
        Self::new()
    }
}
