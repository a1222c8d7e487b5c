//! Unit tests for classgraph-loader module

use crate::*;
use classgraph_core::{ClassDescriptor, HierarchyError, OBJECT};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, path: &str, content: &str) {
    let full_path = root.join(path);
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(full_path, content).unwrap();
}

/// A project with a config, one workspace file and one runtime file.
fn create_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write(root, CONFIG_FILE, r#"
[workspace]
classes = ["classes/app.json"]

[runtime]
classes = ["classes/lib.json"]
"#);

    write(root, "classes/app.json", r#"
[
  { "name": "app/Main", "super_name": "lib/Plugin" },
  { "name": "app/Service", "super_name": "java/lang/Object", "interfaces": ["java/lang/Runnable"] },
  { "name": "app/FastService", "super_name": "app/Service" }
]
"#);

    write(root, "classes/lib.json", r#"
[
  { "name": "lib/Plugin", "super_name": "java/lang/Object" }
]
"#);

    temp_dir
}

#[test]
fn test_build_index_from_config() {
    let project = create_project();
    let config = Config::load(&project.path().join(CONFIG_FILE)).unwrap();
    let (index, summary) = build_index(&config).unwrap();

    assert_eq!(summary.workspace_classes, 3);
    assert_eq!(summary.redefined, 0);
    assert!(summary.runtime_classes > 1);

    assert!(index.is_library("lib/Plugin"));
    assert!(index.is_library(OBJECT));
    assert_eq!(index.descendants("app/Service"), vec!["app/FastService"]);
    assert_eq!(index.descendants("lib/Plugin"), vec!["app/Main"]);
    assert!(index.is_subtype("app/FastService", "java/lang/Runnable"));
}

#[test]
fn test_platform_can_be_disabled() {
    let project = create_project();
    write(project.path(), "bare.toml", r#"
[workspace]
classes = ["classes/app.json"]

[runtime]
platform = false
"#);
    let config = Config::load(&project.path().join("bare.toml")).unwrap();
    let (index, summary) = build_index(&config).unwrap();

    assert_eq!(summary.runtime_classes, 0);
    assert!(index.resolve(OBJECT).is_none());
    assert!(index.resolve("lib/Plugin").is_none());
}

#[test]
fn test_redefinition_is_counted() {
    let project = create_project();
    write(project.path(), "classes/patch.json", r#"
[ { "name": "app/Main", "super_name": "java/lang/Object" } ]
"#);
    write(project.path(), "patched.toml", r#"
[workspace]
classes = ["classes/app.json", "classes/patch.json"]
"#);
    let config = Config::load(&project.path().join("patched.toml")).unwrap();
    let (index, summary) = build_index(&config).unwrap();

    assert_eq!(summary.redefined, 1);
    assert_eq!(index.parents("app/Main"), vec![OBJECT]);
}

#[test]
fn test_missing_descriptor_file() {
    let project = create_project();
    write(project.path(), "broken.toml", r#"
[workspace]
classes = ["classes/nope.json"]
"#);
    let config = Config::load(&project.path().join("broken.toml")).unwrap();
    let err = build_index(&config).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn test_invalid_json_and_toml() {
    let project = create_project();
    write(project.path(), "classes/bad.json", "{ not json");
    let err = read_descriptors(&project.path().join("classes/bad.json")).unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));

    write(project.path(), "bad.toml", "[workspace\nclasses = 1");
    let err = Config::load(&project.path().join("bad.toml")).unwrap_err();
    assert!(matches!(err, LoadError::Toml { .. }));
}

#[test]
fn test_self_inheritance_rejected() {
    let project = create_project();
    write(project.path(), "classes/loop.json", r#"[ { "name": "app/Loop", "super_name": "app/Loop" } ]"#);
    write(project.path(), "loop.toml", r#"
[workspace]
classes = ["classes/loop.json"]
"#);
    let config = Config::load(&project.path().join("loop.toml")).unwrap();
    match build_index(&config).unwrap_err() {
        LoadError::Hierarchy { source, .. } => {
            assert_eq!(source, HierarchyError::SelfInheritance("app/Loop".to_string()));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_load_or_default_without_file() {
    let project = TempDir::new().unwrap();
    let config = Config::load_or_default(&project.path().join(CONFIG_FILE)).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_write_then_read_descriptors() {
    let project = TempDir::new().unwrap();
    let path = project.path().join("out.json");
    let descriptors = vec![
        ClassDescriptor::new("a/A", Some(OBJECT)).implementing("a/I"),
        ClassDescriptor::new("a/I", Some(OBJECT)),
    ];
    write_descriptors(&path, &descriptors).unwrap();
    assert_eq!(read_descriptors(&path).unwrap(), descriptors);
}
