//! CLI command implementations

use anyhow::{Context, bail};
use classgraph_core::{ClassOrigin, HierarchyIndex, Vertex};
use classgraph_loader::{Config, build_index};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// How results are printed.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    fn names(&self, names: &[String]) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(names)?);
        } else {
            for name in names {
                println!("{}", name);
            }
        }
        Ok(())
    }
}

pub fn load(config_path: &Path, extra_workspace: &[PathBuf]) -> anyhow::Result<Arc<HierarchyIndex>> {
    let mut config = Config::load_or_default(config_path)?;
    config.workspace.classes.extend(extra_workspace.iter().cloned());

    if config.workspace.classes.is_empty() {
        tracing::warn!("No workspace descriptor files configured");
    }

    let (index, summary) = build_index(&config).context("Failed to build class hierarchy")?;
    tracing::debug!("{:?}", summary);
    Ok(index)
}

fn origin_label(index: &HierarchyIndex, name: &str) -> &'static str {
    match index.resolve_with_origin(name) {
        Some((_, ClassOrigin::Workspace)) => "workspace",
        Some((_, ClassOrigin::Runtime)) => "runtime",
        None => "unresolved",
    }
}

pub fn parents(index: &HierarchyIndex, class: &str, output: Output) -> anyhow::Result<()> {
    let parents = index.parents(class);
    if output.json {
        let entries: Vec<_> = parents
            .iter()
            .map(|name| json!({ "name": name, "origin": origin_label(index, name) }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for name in &parents {
            println!("{}\t{}", name, origin_label(index, name));
        }
    }
    Ok(())
}

pub fn descendants(index: &HierarchyIndex, class: &str, output: Output) -> anyhow::Result<()> {
    output.names(&index.descendants(class))
}

pub fn family(index: &HierarchyIndex, class: &str, output: Output) -> anyhow::Result<()> {
    output.names(&index.family(class))
}

pub fn edges(index: &HierarchyIndex, class: &str, output: Output) -> anyhow::Result<()> {
    let Some(vertex) = index.register(class) else {
        bail!("Class not found: {}", class);
    };

    let mut edges: Vec<(String, String)> = vertex
        .edges()
        .iter()
        .map(|e| (e.source().name().to_string(), e.target().name().to_string()))
        .collect();
    edges.sort();

    if output.json {
        let entries: Vec<_> = edges
            .iter()
            .map(|(source, target)| json!({ "source": source, "target": target }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for (source, target) in &edges {
            println!("{} -> {}", source, target);
        }
    }
    Ok(())
}

/// Report workspace classes whose declared supertypes do not resolve.
pub fn check(index: &HierarchyIndex, output: Output) -> anyhow::Result<()> {
    let classes = index.workspace_classes();
    let mut unresolved = Vec::new();

    for class in &classes {
        let missing: Vec<String> = index
            .parents(class)
            .into_iter()
            .filter(|parent| index.resolve(parent).is_none())
            .collect();
        if !missing.is_empty() {
            tracing::warn!("{} has unresolved supertypes: {}", class, missing.join(", "));
            unresolved.push((class.clone(), missing));
        }
    }

    if output.json {
        let report = json!({
            "workspace_classes": classes.len(),
            "runtime_classes": index.runtime().len(),
            "unresolved": unresolved
                .iter()
                .map(|(class, missing)| json!({ "class": class, "missing": missing }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} workspace classes, {} runtime classes, {} with unresolved supertypes",
            classes.len(),
            index.runtime().len(),
            unresolved.len()
        );
        for (class, missing) in &unresolved {
            println!("{}: {}", class, missing.join(", "));
        }
    }
    Ok(())
}
