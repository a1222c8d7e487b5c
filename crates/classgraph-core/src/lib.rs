//! Classgraph Core: class inheritance graph over workspace and runtime classes

pub mod diff;
pub mod edge;
pub mod error;
pub mod graph;
pub mod index;
pub mod model;
pub mod registry;
pub mod runtime;
pub mod subtypes;
pub mod vertex;
pub mod workspace;


#[cfg(test)]
pub mod test_utils;

pub use model::{ClassDescriptor, ClassLookup, ClassOrigin, OBJECT};
pub use edge::{DirectedEdge, Vertex};
pub use error::HierarchyError;
pub use diff::{HierarchyDiff, InheritanceLink};
pub use graph::HierarchyGraph;
pub use index::{HierarchyIndex, IndexOptions};
pub use registry::VertexRegistry;
pub use runtime::RuntimeClasspath;
pub use subtypes::SubtypeIndex;
pub use vertex::ClassVertex;
pub use workspace::Workspace;
