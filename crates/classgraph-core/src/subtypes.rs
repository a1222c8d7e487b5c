//! Reverse inheritance index: supertype name to its direct subtypes

use std::collections::{BTreeSet, HashMap};

use crate::model::ClassDescriptor;

/// Maps a supertype name to the names of classes that declare it directly.
///
/// Entries exist for supertypes that never resolve, so a class added later
/// under that name immediately sees its children.
#[derive(Debug, Clone, Default)]
pub struct SubtypeIndex {
    children: HashMap<String, BTreeSet<String>>,
}

impl SubtypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_descriptors<'a>(descriptors: impl IntoIterator<Item = &'a ClassDescriptor>) -> Self {
        let mut index = SubtypeIndex::new();
        for desc in descriptors {
            index.insert(desc);
        }
        index
    }

    /// Record every direct supertype link declared by `desc`.
    pub fn insert(&mut self, desc: &ClassDescriptor) {
        for parent in desc.parent_names() {
            self.children
                .entry(parent)
                .or_default()
                .insert(desc.name.clone());
        }
    }

    /// Drop the links declared by `desc`. Must be given the same snapshot
    /// that was inserted.
    pub fn remove(&mut self, desc: &ClassDescriptor) {
        for parent in desc.parent_names() {
            if let Some(set) = self.children.get_mut(&parent) {
                set.remove(&desc.name);
                if set.is_empty() {
                    self.children.remove(&parent);
                }
            }
        }
    }

    /// Direct subtypes of `name`, in name order.
    pub fn children(&self, name: &str) -> impl Iterator<Item = &String> {
        self.children.get(name).into_iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
