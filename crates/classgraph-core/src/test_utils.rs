//! Test utilities for classgraph-core

use std::sync::Arc;

use crate::{ClassDescriptor, HierarchyIndex, IndexOptions, RuntimeClasspath, Workspace, OBJECT};

/// Shorthand for a descriptor with a superclass and interfaces.
pub fn class(name: &str, super_name: Option<&str>, interfaces: &[&str]) -> ClassDescriptor {
    interfaces
        .iter()
        .fold(ClassDescriptor::new(name, super_name), |desc, i| desc.implementing(*i))
}

/// Workspace with `Base` (no parent) and `Derived extends Base`, empty runtime.
pub fn base_derived() -> Arc<HierarchyIndex> {
    let workspace = Workspace::from_descriptors([
        class("Base", None, &[]),
        class("Derived", Some("Base"), &[]),
    ]);
    HierarchyIndex::new(workspace, RuntimeClasspath::empty())
}

/// An application hierarchy on top of the platform classes:
///
/// ```text
/// app/Shape  (abstract, implements java/lang/Comparable)
///   app/Circle
///   app/Polygon
///     app/Square (implements app/Drawable, lib/Missing)
/// app/Drawable (interface)
/// app/ShapeList extends java/util/ArrayList
/// app/ShapeError extends java/lang/RuntimeException
/// ```
pub fn shapes_with_options(options: IndexOptions) -> Arc<HierarchyIndex> {
    let workspace = Workspace::from_descriptors([
        class("app/Shape", Some(OBJECT), &["java/lang/Comparable"]),
        class("app/Circle", Some("app/Shape"), &[]),
        class("app/Polygon", Some("app/Shape"), &[]),
        class("app/Square", Some("app/Polygon"), &["app/Drawable", "lib/Missing"]),
        class("app/Drawable", Some(OBJECT), &[]),
        class("app/ShapeList", Some("java/util/ArrayList"), &[]),
        class("app/ShapeError", Some("java/lang/RuntimeException"), &[]),
    ]);
    HierarchyIndex::with_options(workspace, RuntimeClasspath::platform(), options)
}

pub fn shapes() -> Arc<HierarchyIndex> {
    shapes_with_options(IndexOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_build() {
        assert_eq!(base_derived().workspace_classes(), vec!["Base", "Derived"]);
        assert_eq!(shapes().workspace_classes().len(), 7);
    }
}
