//! Core data structures for the class hierarchy

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Internal name of the root of the JVM type system.
pub const OBJECT: &str = "java/lang/Object";

/// One snapshot of a class as produced by the bytecode parser.
///
/// Descriptors are never mutated in place. An edited class yields a new
/// descriptor that replaces the old one in the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Qualified internal name, e.g. `java/util/ArrayList`. Unique key.
    pub name: String,
    /// Direct superclass. `None` only for the root of the type system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_name: Option<String>,
    /// Directly implemented (or, for interfaces, extended) interfaces.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>, super_name: Option<&str>) -> Self {
        ClassDescriptor {
            name: name.into(),
            super_name: super_name.map(str::to_string),
            interfaces: Vec::new(),
        }
    }

    /// Builder-style helper for adding an interface.
    pub fn implementing(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Direct supertype names: the superclass first, then interfaces in
    /// declaration order. Duplicates are skipped.
    pub fn parent_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(self.interfaces.len() + 1);
        for name in self.super_name.iter().chain(self.interfaces.iter()) {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }

    /// Whether `name` is a direct supertype of this class.
    pub fn has_parent(&self, name: &str) -> bool {
        self.super_name.as_deref() == Some(name) || self.interfaces.iter().any(|i| i == name)
    }

    /// Copy of this descriptor with every reference to `from` replaced by `to`.
    pub fn with_renamed_reference(&self, from: &str, to: &str) -> Self {
        let swap = |n: &String| if n == from { to.to_string() } else { n.clone() };
        ClassDescriptor {
            name: swap(&self.name),
            super_name: self.super_name.as_ref().map(swap),
            interfaces: self.interfaces.iter().map(swap).collect(),
        }
    }
}

/// Anything that can turn a class name into a descriptor.
///
/// Implemented by the mutable [`Workspace`](crate::Workspace) and the
/// immutable [`RuntimeClasspath`](crate::RuntimeClasspath).
pub trait ClassLookup: Send + Sync {
    fn lookup(&self, name: &str) -> Option<Arc<ClassDescriptor>>;

    fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}

/// Where a resolved descriptor came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassOrigin {
    Workspace,
    Runtime,
}
