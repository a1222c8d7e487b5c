//! Generic vertex/edge contract consumed by traversal algorithms

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::Result;

/// A graph node whose neighbours are discovered on demand.
///
/// Equality and hashing must depend only on the vertex's identity key so
/// independently constructed handles for the same node compare equal.
pub trait Vertex: Eq + Hash + Sized {
    type Data;

    /// Current data snapshot.
    fn data(&self) -> Self::Data;

    /// Swap in a newer snapshot for the same node.
    fn set_data(&self, data: Self::Data) -> Result<()>;

    /// Edges touching this vertex, computed fresh on every call.
    fn edges(self: &Arc<Self>) -> HashSet<DirectedEdge<Self>>;
}

/// An ordered `(source, target)` pair of vertex handles.
///
/// Two edges are equal when both endpoints are equal, so a set of edges
/// deduplicates the same link discovered from either side.
pub struct DirectedEdge<V> {
    source: Arc<V>,
    target: Arc<V>,
}

impl<V> DirectedEdge<V> {
    pub fn new(source: Arc<V>, target: Arc<V>) -> Self {
        DirectedEdge { source, target }
    }

    pub fn source(&self) -> &Arc<V> {
        &self.source
    }

    pub fn target(&self) -> &Arc<V> {
        &self.target
    }
}

impl<V> Clone for DirectedEdge<V> {
    fn clone(&self) -> Self {
        DirectedEdge {
            source: Arc::clone(&self.source),
            target: Arc::clone(&self.target),
        }
    }
}

impl<V: PartialEq> PartialEq for DirectedEdge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.target == other.target
    }
}

impl<V: Eq> Eq for DirectedEdge<V> {}

impl<V: Hash> Hash for DirectedEdge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.target.hash(state);
    }
}

impl<V: fmt::Display> fmt::Display for DirectedEdge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

impl<V: fmt::Display> fmt::Debug for DirectedEdge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DirectedEdge({} -> {})", self.source, self.target)
    }
}
