//! Change records produced by workspace mutations

use serde::{Deserialize, Serialize};

use crate::model::ClassDescriptor;

/// A direct supertype link, `child` declaring `parent`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InheritanceLink {
    pub parent: String,
    pub child: String,
}

impl InheritanceLink {
    pub fn new(parent: impl Into<String>, child: impl Into<String>) -> Self {
        InheritanceLink {
            parent: parent.into(),
            child: child.into(),
        }
    }
}

/// What one workspace mutation changed.
///
/// Anything caching derived hierarchy data should treat a non-empty diff as
/// an invalidation event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyDiff {
    /// Monotonically increasing mutation sequence number.
    pub sequence: u64,
    pub added_classes: Vec<String>,
    pub removed_classes: Vec<String>,
    /// Classes whose descriptor was replaced by a different one.
    pub modified_classes: Vec<String>,
    pub added_links: Vec<InheritanceLink>,
    pub removed_links: Vec<InheritanceLink>,
}

impl HierarchyDiff {
    /// Create an empty diff with given sequence number.
    pub fn new(sequence: u64) -> Self {
        HierarchyDiff {
            sequence,
            ..Default::default()
        }
    }

    /// Check if this diff is empty (no changes).
    pub fn is_empty(&self) -> bool {
        self.added_classes.is_empty()
            && self.removed_classes.is_empty()
            && self.modified_classes.is_empty()
            && self.added_links.is_empty()
            && self.removed_links.is_empty()
    }

    /// Record the replacement of `old` by `new`. Either side may be absent.
    /// Snapshots with different names count as a removal plus an addition.
    pub fn record(&mut self, old: Option<&ClassDescriptor>, new: Option<&ClassDescriptor>) {
        match (old, new) {
            (None, None) => {}
            (Some(old), Some(new)) if old.name != new.name => {
                self.record(Some(old), None);
                self.record(None, Some(new));
            }
            (None, Some(new)) => {
                self.added_classes.push(new.name.clone());
                self.added_links.extend(links_of(new));
            }
            (Some(old), None) => {
                self.removed_classes.push(old.name.clone());
                self.removed_links.extend(links_of(old));
            }
            (Some(old), Some(new)) => {
                if old == new {
                    return;
                }
                self.modified_classes.push(new.name.clone());
                let before = old.parent_names();
                let after = new.parent_names();
                for parent in after.iter().filter(|p| !before.contains(p)) {
                    self.added_links.push(InheritanceLink::new(parent.as_str(), new.name.as_str()));
                }
                for parent in before.iter().filter(|p| !after.contains(p)) {
                    self.removed_links.push(InheritanceLink::new(parent.as_str(), old.name.as_str()));
                }
            }
        }
    }
}

fn links_of(desc: &ClassDescriptor) -> impl Iterator<Item = InheritanceLink> + '_ {
    desc.parent_names()
        .into_iter()
        .map(move |parent| InheritanceLink::new(parent, desc.name.as_str()))
}
