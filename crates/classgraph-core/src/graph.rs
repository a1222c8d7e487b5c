//! Materialize a vertex's reachable hierarchy into a petgraph StableDiGraph

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};

use crate::edge::Vertex;
use crate::vertex::ClassVertex;

/// Snapshot of the component reachable from one vertex by following
/// `edges()`. Edges point from supertype to subtype.
///
/// Built once from the live vertices; later workspace edits are not
/// reflected. Walk again to refresh.
pub struct HierarchyGraph {
    inner: StableDiGraph<Arc<ClassVertex>, ()>,
    nodes: HashMap<String, NodeIndex>,
}

impl std::fmt::Debug for HierarchyGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HierarchyGraph")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .finish()
    }
}

impl HierarchyGraph {
    /// Breadth-first walk over `edges()` starting at `start`.
    pub fn walk(start: &Arc<ClassVertex>) -> Self {
        let mut graph = HierarchyGraph {
            inner: StableDiGraph::new(),
            nodes: HashMap::new(),
        };
        let mut queue = VecDeque::new();
        graph.node(start);
        queue.push_back(Arc::clone(start));

        while let Some(current) = queue.pop_front() {
            for edge in current.edges() {
                for endpoint in [edge.source(), edge.target()] {
                    if !graph.nodes.contains_key(endpoint.name()) {
                        graph.node(endpoint);
                        queue.push_back(Arc::clone(endpoint));
                    }
                }
                let source = graph.node(edge.source());
                let target = graph.node(edge.target());
                if graph.inner.find_edge(source, target).is_none() {
                    graph.inner.add_edge(source, target, ());
                }
            }
        }

        tracing::debug!(
            "Walked hierarchy from {}: {} classes, {} links",
            start,
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    fn node(&mut self, vertex: &Arc<ClassVertex>) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(vertex.name()) {
            return idx;
        }
        let idx = self.inner.add_node(Arc::clone(vertex));
        self.nodes.insert(vertex.name().to_string(), idx);
        idx
    }

    /// Total number of classes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of supertype links.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Class names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.nodes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Classes with a link into `name`, sorted. Descendant links are
    /// transitive, so this includes every supertype whose vertex was walked.
    pub fn supertypes(&self, name: &str) -> Vec<String> {
        self.neighbours(name, Direction::Incoming)
    }

    /// Classes `name` links to, sorted.
    pub fn subtypes(&self, name: &str) -> Vec<String> {
        self.neighbours(name, Direction::Outgoing)
    }

    fn neighbours(&self, name: &str, direction: Direction) -> Vec<String> {
        let Some(&idx) = self.nodes.get(name) else {
            return Vec::new();
        };
        let mut names: Vec<String> = self
            .inner
            .neighbors_directed(idx, direction)
            .map(|n| self.inner[n].name().to_string())
            .collect();
        names.sort();
        names
    }

    /// Class names ordered so every supertype precedes its subtypes.
    /// `None` if the snapshot contains an inheritance cycle.
    pub fn toposort(&self) -> Option<Vec<String>> {
        let order = petgraph::algo::toposort(&self.inner, None).ok()?;
        Some(
            order
                .into_iter()
                .map(|idx| self.inner[idx].name().to_string())
                .collect(),
        )
    }
}
