//! Hierarchy index: dual-source name resolution and parent/descendant queries
//!
//! Names resolve against the workspace first and the runtime classpath
//! second. The workspace and its subtype links sit behind one lock, so every
//! query runs against a single consistent snapshot and every mutation is
//! serialized against queries.

use std::collections::{BTreeSet, VecDeque};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::diff::HierarchyDiff;
use crate::error::{HierarchyError, Result};
use crate::model::{ClassDescriptor, ClassLookup, ClassOrigin};
use crate::registry::VertexRegistry;
use crate::runtime::RuntimeClasspath;
use crate::vertex::ClassVertex;
use crate::workspace::Workspace;

/// Tunables for an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexOptions {
    /// Report runtime-classpath classes from descendant queries. Workspace
    /// classes are always reported.
    pub runtime_descendants: bool,
}

/// Resolved neighbours of one class, taken from a single snapshot.
#[derive(Debug)]
pub(crate) struct Neighbours {
    pub parents: Vec<Arc<ClassDescriptor>>,
    pub descendants: Vec<Arc<ClassDescriptor>>,
}

struct IndexState {
    workspace: Workspace,
    sequence: u64,
}

/// The class hierarchy of one analysis session.
pub struct HierarchyIndex {
    state: RwLock<IndexState>,
    runtime: RuntimeClasspath,
    registry: VertexRegistry,
    options: IndexOptions,
    this: Weak<HierarchyIndex>,
}

impl std::fmt::Debug for HierarchyIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("HierarchyIndex")
            .field("workspace_classes", &state.workspace.len())
            .field("runtime_classes", &self.runtime.len())
            .field("tracked_vertices", &self.registry.len())
            .field("sequence", &state.sequence)
            .finish()
    }
}

impl HierarchyIndex {
    pub fn new(workspace: Workspace, runtime: RuntimeClasspath) -> Arc<Self> {
        Self::with_options(workspace, runtime, IndexOptions::default())
    }

    pub fn with_options(
        workspace: Workspace,
        runtime: RuntimeClasspath,
        options: IndexOptions,
    ) -> Arc<Self> {
        debug!(
            "Building hierarchy index: {} workspace classes, {} runtime classes",
            workspace.len(),
            runtime.len()
        );
        Arc::new_cyclic(|this| HierarchyIndex {
            state: RwLock::new(IndexState {
                workspace,
                sequence: 0,
            }),
            runtime,
            registry: VertexRegistry::new(),
            options,
            this: this.clone(),
        })
    }

    pub fn options(&self) -> IndexOptions {
        self.options
    }

    pub(crate) fn downgrade(&self) -> Weak<HierarchyIndex> {
        self.this.clone()
    }

    // ── Resolution ──────────────────────────────────────────

    /// Resolve a class name: workspace first, then the runtime classpath.
    pub fn resolve(&self, name: &str) -> Option<Arc<ClassDescriptor>> {
        let state = self.state.read();
        self.resolve_in(&state.workspace, name)
    }

    /// Resolve a class name and report which source defined it.
    pub fn resolve_with_origin(&self, name: &str) -> Option<(Arc<ClassDescriptor>, ClassOrigin)> {
        let state = self.state.read();
        if let Some(desc) = state.workspace.lookup(name) {
            return Some((desc, ClassOrigin::Workspace));
        }
        self.runtime
            .lookup(name)
            .map(|desc| (desc, ClassOrigin::Runtime))
    }

    /// Whether `name` resolves only through the runtime classpath.
    pub fn is_library(&self, name: &str) -> bool {
        matches!(self.resolve_with_origin(name), Some((_, ClassOrigin::Runtime)))
    }

    fn resolve_in(&self, workspace: &Workspace, name: &str) -> Option<Arc<ClassDescriptor>> {
        workspace.lookup(name).or_else(|| self.runtime.lookup(name))
    }

    // ── Queries ─────────────────────────────────────────────

    /// Direct supertype names of `name`, unresolved. Empty when `name`
    /// itself does not resolve.
    pub fn parents(&self, name: &str) -> Vec<String> {
        self.resolve(name)
            .map(|desc| desc.parent_names())
            .unwrap_or_default()
    }

    /// Every known class whose supertype chain includes `name`, sorted.
    /// Never includes `name` itself.
    pub fn descendants(&self, name: &str) -> Vec<String> {
        let state = self.state.read();
        self.descendants_in(&state.workspace, name).into_iter().collect()
    }

    /// Every supertype reachable from `name`, resolved or not, sorted.
    /// Never includes `name` itself.
    pub fn all_parents(&self, name: &str) -> Vec<String> {
        let state = self.state.read();
        let mut found = BTreeSet::new();
        let mut queue = VecDeque::from([name.to_string()]);

        while let Some(current) = queue.pop_front() {
            let Some(desc) = self.resolve_in(&state.workspace, &current) else {
                continue;
            };
            for parent in desc.parent_names() {
                if parent != name && found.insert(parent.clone()) {
                    queue.push_back(parent);
                }
            }
        }

        found.into_iter().collect()
    }

    /// Whether a `child` value is assignable to `parent`. Reflexive.
    pub fn is_subtype(&self, child: &str, parent: &str) -> bool {
        child == parent || self.all_parents(child).iter().any(|p| p == parent)
    }

    /// All resolvable classes linked to `name` through any chain of parent
    /// or child links, sorted, including `name` when it resolves.
    ///
    /// Classes without a superclass (the type-system root) are members of a
    /// family but never expanded, otherwise every family would be the whole
    /// universe.
    pub fn family(&self, name: &str) -> Vec<String> {
        let state = self.state.read();
        let workspace = &state.workspace;
        let mut members = BTreeSet::new();
        let mut queue = VecDeque::new();

        if self.resolve_in(workspace, name).is_some() {
            members.insert(name.to_string());
            queue.push_back(name.to_string());
        }

        while let Some(current) = queue.pop_front() {
            let Some(desc) = self.resolve_in(workspace, &current) else {
                continue;
            };
            if desc.super_name.is_none() && current != name {
                continue;
            }
            let parents = desc
                .parent_names()
                .into_iter()
                .filter(|p| self.resolve_in(workspace, p).is_some());
            let children = self.direct_children(workspace, &current).into_iter();
            for linked in parents.chain(children) {
                if members.insert(linked.clone()) {
                    queue.push_back(linked);
                }
            }
        }

        members.into_iter().collect()
    }

    /// Names of the workspace classes, sorted.
    pub fn workspace_classes(&self) -> Vec<String> {
        let state = self.state.read();
        let mut names: Vec<String> = state.workspace.names().cloned().collect();
        names.sort();
        names
    }

    pub fn runtime(&self) -> &RuntimeClasspath {
        &self.runtime
    }

    /// Sequence number of the last applied mutation, zero before any.
    pub fn sequence(&self) -> u64 {
        self.state.read().sequence
    }

    /// Resolved direct parents and descendants of `name` from one snapshot.
    /// Unresolvable names are dropped. When `name` itself does not resolve it
    /// has no parents, but classes declaring it as a supertype still count.
    pub(crate) fn neighbours(&self, name: &str) -> Neighbours {
        let state = self.state.read();
        let workspace = &state.workspace;

        let resolve_all = |names: Vec<String>| -> Vec<Arc<ClassDescriptor>> {
            names
                .into_iter()
                .filter_map(|n| {
                    let resolved = self.resolve_in(workspace, &n);
                    if resolved.is_none() {
                        trace!("Dropping unresolvable class {} from edges of {}", n, name);
                    }
                    resolved
                })
                .collect()
        };

        let parent_names = match self.resolve_in(workspace, name) {
            Some(desc) => desc.parent_names(),
            None => {
                trace!("{} does not resolve, no parent edges", name);
                Vec::new()
            }
        };

        Neighbours {
            parents: resolve_all(parent_names),
            descendants: resolve_all(self.descendants_in(workspace, name).into_iter().collect()),
        }
    }

    /// Direct subtypes of `name`. Runtime subtypes are followed unless a
    /// workspace class of the same name shadows them.
    fn direct_children(&self, workspace: &Workspace, name: &str) -> Vec<String> {
        let mut children: Vec<String> = workspace.children(name).cloned().collect();
        children.extend(
            self.runtime
                .children(name)
                .filter(|child| !workspace.contains(child))
                .cloned(),
        );
        children
    }

    fn descendants_in(&self, workspace: &Workspace, name: &str) -> BTreeSet<String> {
        let mut visited = BTreeSet::new();
        let mut found = BTreeSet::new();
        let mut queue = VecDeque::from([name.to_string()]);

        // Runtime links are always walked so workspace classes extending a
        // runtime subtype are reached even when runtime classes aren't reported.
        while let Some(current) = queue.pop_front() {
            for child in self.direct_children(workspace, &current) {
                if child == name || !visited.insert(child.clone()) {
                    continue;
                }
                if self.options.runtime_descendants || workspace.contains(&child) {
                    found.insert(child.clone());
                }
                queue.push_back(child);
            }
        }

        found
    }

    // ── Vertices ────────────────────────────────────────────

    /// The tracked vertex for `name`, if one has been registered.
    pub fn vertex(&self, name: &str) -> Option<Arc<ClassVertex>> {
        self.registry.get(name)
    }

    /// The tracked vertex for `name`, resolving and registering it on a miss.
    /// `None` when `name` does not resolve.
    pub fn register(&self, name: &str) -> Option<Arc<ClassVertex>> {
        if let Some(vertex) = self.registry.get(name) {
            return Some(vertex);
        }
        // Held until the vertex is in the registry so a concurrent edit either
        // lands before the resolve or finds the vertex and updates it.
        let state = self.state.read();
        let desc = self.resolve_in(&state.workspace, name)?;
        Some(self.registry.get_or_insert_with(name, || {
            Arc::new(ClassVertex::new(self.downgrade(), desc))
        }))
    }

    /// Names of tracked vertices, sorted.
    pub fn tracked(&self) -> Vec<String> {
        self.registry.names()
    }

    /// Called with the write lock held, once `name` has left the workspace.
    fn untrack_removed(&self, name: &str) {
        match self.runtime.lookup(name) {
            Some(runtime) => {
                if let Some(vertex) = self.registry.get(name) {
                    vertex.replace(runtime);
                }
            }
            None => {
                self.registry.remove(name);
            }
        }
    }

    pub(crate) fn is_tracked(&self, vertex: &ClassVertex) -> bool {
        self.registry
            .get(vertex.name())
            .is_some_and(|tracked| std::ptr::eq(tracked.as_ref(), vertex))
    }

    // ── Mutations ───────────────────────────────────────────

    /// Add a class to the workspace or replace its current definition.
    ///
    /// A tracked vertex for the class picks up the new descriptor.
    pub fn put_class(&self, desc: ClassDescriptor) -> Result<HierarchyDiff> {
        if desc.has_parent(&desc.name) {
            return Err(HierarchyError::SelfInheritance(desc.name));
        }

        let mut state = self.state.write();
        state.sequence += 1;
        let mut diff = HierarchyDiff::new(state.sequence);

        let name = desc.name.clone();
        let previous = state.workspace.insert(desc);
        let current = state.workspace.lookup(&name);
        diff.record(previous.as_deref(), current.as_deref());

        if let (Some(vertex), Some(current)) = (self.registry.get(&name), current) {
            vertex.replace(current);
        }

        debug!(
            "put {} (seq {}): {} links added, {} removed",
            name,
            diff.sequence,
            diff.added_links.len(),
            diff.removed_links.len()
        );
        Ok(diff)
    }

    /// Remove a class from the workspace.
    ///
    /// A runtime class of the same name becomes visible again and a tracked
    /// vertex switches to it. Otherwise the vertex stops being tracked.
    pub fn remove_class(&self, name: &str) -> Result<HierarchyDiff> {
        let mut state = self.state.write();
        let removed = state
            .workspace
            .remove(name)
            .ok_or_else(|| HierarchyError::ClassNotFound(name.to_string()))?;

        state.sequence += 1;
        let mut diff = HierarchyDiff::new(state.sequence);
        diff.record(Some(removed.as_ref()), None);
        self.untrack_removed(name);

        debug!("removed {} (seq {})", name, diff.sequence);
        Ok(diff)
    }

    /// Rename a workspace class and rewrite every workspace reference to it.
    pub fn rename_class(&self, from: &str, to: &str) -> Result<HierarchyDiff> {
        let mut state = self.state.write();
        if !state.workspace.contains(from) {
            return Err(HierarchyError::ClassNotFound(from.to_string()));
        }
        if state.workspace.contains(to) {
            return Err(HierarchyError::ClassExists(to.to_string()));
        }

        state.sequence += 1;
        let mut diff = HierarchyDiff::new(state.sequence);

        let referencing: Vec<String> = state
            .workspace
            .children(from)
            .filter(|child| child.as_str() != from)
            .cloned()
            .collect();

        if let Some(old) = state.workspace.remove(from) {
            let renamed = old.with_renamed_reference(from, to);
            diff.record(Some(old.as_ref()), Some(&renamed));
            state.workspace.insert(renamed);
        }
        self.untrack_removed(from);

        for child in referencing {
            let Some(old) = state.workspace.lookup(&child) else {
                continue;
            };
            let rewritten = old.with_renamed_reference(from, to);
            diff.record(Some(old.as_ref()), Some(&rewritten));
            state.workspace.insert(rewritten);
            if let (Some(vertex), Some(current)) =
                (self.registry.get(&child), state.workspace.lookup(&child))
            {
                vertex.replace(current);
            }
        }

        debug!(
            "renamed {} -> {} (seq {}), {} classes rewritten",
            from,
            to,
            diff.sequence,
            diff.modified_classes.len()
        );
        Ok(diff)
    }
}
