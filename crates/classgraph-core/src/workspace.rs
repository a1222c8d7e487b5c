//! Mutable store of the classes under edit

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{ClassDescriptor, ClassLookup};
use crate::subtypes::SubtypeIndex;

/// The workspace: user-owned class descriptors keyed by name, plus the
/// subtype links they declare.
///
/// The two maps are only changed together, so anyone holding a reference
/// sees them in agreement. Locking is left to the owner
/// ([`HierarchyIndex`](crate::HierarchyIndex) keeps it behind one `RwLock`).
#[derive(Debug, Default)]
pub struct Workspace {
    classes: HashMap<String, Arc<ClassDescriptor>>,
    subtypes: SubtypeIndex,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_descriptors(descriptors: impl IntoIterator<Item = ClassDescriptor>) -> Self {
        let mut workspace = Workspace::new();
        for desc in descriptors {
            workspace.insert(desc);
        }
        workspace
    }

    /// Add or replace a class. Returns the snapshot it replaced.
    pub fn insert(&mut self, desc: ClassDescriptor) -> Option<Arc<ClassDescriptor>> {
        let desc = Arc::new(desc);
        let previous = self.classes.insert(desc.name.clone(), Arc::clone(&desc));
        if let Some(old) = &previous {
            self.subtypes.remove(old);
        }
        self.subtypes.insert(&desc);
        previous
    }

    /// Remove a class. Returns the removed snapshot.
    pub fn remove(&mut self, name: &str) -> Option<Arc<ClassDescriptor>> {
        let removed = self.classes.remove(name)?;
        self.subtypes.remove(&removed);
        Some(removed)
    }

    /// Direct subtypes of `name` declared by workspace classes.
    pub fn children(&self, name: &str) -> impl Iterator<Item = &String> {
        self.subtypes.children(name)
    }

    /// Class names, unordered.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.classes.keys()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ClassLookup for Workspace {
    fn lookup(&self, name: &str) -> Option<Arc<ClassDescriptor>> {
        self.classes.get(name).cloned()
    }
}
