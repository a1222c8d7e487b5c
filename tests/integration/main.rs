//! Integration tests for Classgraph
//!
//! These tests verify that the loader and the hierarchy core work together.

use classgraph_core::{ClassDescriptor, HierarchyGraph, HierarchyIndex, Vertex, OBJECT};
use classgraph_loader::{build_index, write_descriptors, Config, CONFIG_FILE};
use std::collections::BTreeSet;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn create_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("classes")).unwrap();

    write_descriptors(
        &root.join("classes/app.json"),
        &[
            ClassDescriptor::new("app/Animal", Some(OBJECT)).implementing("java/lang/Comparable"),
            ClassDescriptor::new("app/Dog", Some("app/Animal")),
            ClassDescriptor::new("app/Puppy", Some("app/Dog")).implementing("app/Cute"),
            ClassDescriptor::new("app/Cute", Some(OBJECT)),
            ClassDescriptor::new("app/Kennel", Some("java/util/ArrayList")),
        ],
    )
    .unwrap();

    fs::write(
        root.join(CONFIG_FILE),
        r#"
[workspace]
classes = ["classes/app.json"]
"#,
    )
    .unwrap();

    temp_dir
}

fn load(project: &TempDir) -> Arc<HierarchyIndex> {
    let config = Config::load(&project.path().join(CONFIG_FILE)).unwrap();
    build_index(&config).unwrap().0
}

/// Loading from disk yields the same answers as an in-memory index.
#[test]
fn test_loaded_hierarchy_queries() {
    let project = create_project();
    let index = load(&project);

    assert_eq!(index.parents("app/Puppy"), vec!["app/Dog", "app/Cute"]);
    assert_eq!(index.descendants("app/Animal"), vec!["app/Dog", "app/Puppy"]);
    assert_eq!(index.descendants("java/util/Collection"), vec!["app/Kennel"]);
    assert!(index.is_library("java/util/ArrayList"));
}

/// Edges seen from a registered vertex track edits made after loading.
#[test]
fn test_edges_follow_edits() {
    let project = create_project();
    let index = load(&project);
    let dog = index.register("app/Dog").unwrap();

    let before: BTreeSet<String> = dog.edges().iter().map(|e| e.to_string()).collect();
    assert_eq!(
        before,
        ["app/Animal -> app/Dog", "app/Dog -> app/Puppy"]
            .into_iter()
            .map(String::from)
            .collect()
    );

    index.remove_class("app/Puppy").unwrap();
    index
        .put_class(ClassDescriptor::new("app/Dog", Some(OBJECT)))
        .unwrap();

    let after: BTreeSet<String> = dog.edges().iter().map(|e| e.to_string()).collect();
    assert_eq!(after, [format!("{} -> app/Dog", OBJECT)].into_iter().collect());
    assert_eq!(dog.data().super_name.as_deref(), Some(OBJECT));
}

/// A rename propagates to every subclass and keeps the family intact.
#[test]
fn test_rename_propagation() {
    let project = create_project();
    let index = load(&project);

    let before = index.family("app/Dog");
    assert!(before.contains(&"app/Animal".to_string()));

    let diff = index.rename_class("app/Animal", "app/Creature").unwrap();
    assert_eq!(diff.modified_classes, vec!["app/Dog"]);

    let after = index.family("app/Dog");
    assert!(after.contains(&"app/Creature".to_string()));
    assert!(!after.contains(&"app/Animal".to_string()));
    assert!(index.is_subtype("app/Puppy", "app/Creature"));
}

/// The petgraph snapshot orders supertypes before subtypes.
#[test]
fn test_walked_graph_is_acyclic() {
    let project = create_project();
    let index = load(&project);
    let puppy = index.register("app/Puppy").unwrap();

    let graph = HierarchyGraph::walk(&puppy);
    assert!(graph.contains("app/Kennel"));

    let order = graph.toposort().expect("inheritance graph has a cycle");
    let position = |name: &str| order.iter().position(|n| n == name).unwrap();
    assert!(position("app/Animal") < position("app/Dog"));
    assert!(position("app/Dog") < position("app/Puppy"));
    assert!(position("app/Cute") < position("app/Puppy"));
}
