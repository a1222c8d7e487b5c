//! Immutable reference classes supplied by the host platform

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{ClassDescriptor, ClassLookup, OBJECT};
use crate::subtypes::SubtypeIndex;

/// Core platform classes: (name, superclass, interfaces).
const PLATFORM_CLASSES: &[(&str, Option<&str>, &[&str])] = &[
    (OBJECT, None, &[]),
    ("java/io/Serializable", Some(OBJECT), &[]),
    ("java/lang/Cloneable", Some(OBJECT), &[]),
    ("java/lang/Runnable", Some(OBJECT), &[]),
    ("java/lang/AutoCloseable", Some(OBJECT), &[]),
    ("java/io/Closeable", Some(OBJECT), &["java/lang/AutoCloseable"]),
    ("java/lang/Comparable", Some(OBJECT), &[]),
    ("java/lang/CharSequence", Some(OBJECT), &[]),
    ("java/lang/Iterable", Some(OBJECT), &[]),
    (
        "java/lang/String",
        Some(OBJECT),
        &["java/io/Serializable", "java/lang/Comparable", "java/lang/CharSequence"],
    ),
    ("java/lang/Number", Some(OBJECT), &["java/io/Serializable"]),
    ("java/lang/Integer", Some("java/lang/Number"), &["java/lang/Comparable"]),
    ("java/lang/Long", Some("java/lang/Number"), &["java/lang/Comparable"]),
    ("java/lang/Double", Some("java/lang/Number"), &["java/lang/Comparable"]),
    ("java/lang/Enum", Some(OBJECT), &["java/lang/Comparable", "java/io/Serializable"]),
    ("java/lang/Record", Some(OBJECT), &[]),
    ("java/lang/Thread", Some(OBJECT), &["java/lang/Runnable"]),
    ("java/lang/Throwable", Some(OBJECT), &["java/io/Serializable"]),
    ("java/lang/Exception", Some("java/lang/Throwable"), &[]),
    ("java/lang/RuntimeException", Some("java/lang/Exception"), &[]),
    ("java/lang/IllegalStateException", Some("java/lang/RuntimeException"), &[]),
    ("java/lang/IllegalArgumentException", Some("java/lang/RuntimeException"), &[]),
    ("java/lang/Error", Some("java/lang/Throwable"), &[]),
    ("java/util/Collection", Some(OBJECT), &["java/lang/Iterable"]),
    ("java/util/List", Some(OBJECT), &["java/util/Collection"]),
    ("java/util/Set", Some(OBJECT), &["java/util/Collection"]),
    ("java/util/Map", Some(OBJECT), &[]),
    ("java/util/AbstractCollection", Some(OBJECT), &["java/util/Collection"]),
    ("java/util/AbstractList", Some("java/util/AbstractCollection"), &["java/util/List"]),
    (
        "java/util/ArrayList",
        Some("java/util/AbstractList"),
        &["java/util/List", "java/lang/Cloneable", "java/io/Serializable"],
    ),
    ("java/util/AbstractMap", Some(OBJECT), &["java/util/Map"]),
    (
        "java/util/HashMap",
        Some("java/util/AbstractMap"),
        &["java/util/Map", "java/lang/Cloneable", "java/io/Serializable"],
    ),
];

/// Read-only index over runtime classpath descriptors.
///
/// Built once; its subtype links never change afterwards.
#[derive(Debug, Default)]
pub struct RuntimeClasspath {
    classes: HashMap<String, Arc<ClassDescriptor>>,
    subtypes: SubtypeIndex,
}

impl RuntimeClasspath {
    /// A classpath with no classes at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_descriptors(descriptors: impl IntoIterator<Item = ClassDescriptor>) -> Self {
        let classes: HashMap<String, Arc<ClassDescriptor>> = descriptors
            .into_iter()
            .map(|desc| (desc.name.clone(), Arc::new(desc)))
            .collect();
        let subtypes = SubtypeIndex::from_descriptors(classes.values().map(|d| d.as_ref()));
        RuntimeClasspath { classes, subtypes }
    }

    /// The built-in core platform classes.
    pub fn platform() -> Self {
        Self::from_descriptors(Self::platform_descriptors())
    }

    pub fn platform_descriptors() -> impl Iterator<Item = ClassDescriptor> {
        PLATFORM_CLASSES.iter().map(|(name, super_name, interfaces)| ClassDescriptor {
            name: name.to_string(),
            super_name: super_name.map(str::to_string),
            interfaces: interfaces.iter().map(|i| i.to_string()).collect(),
        })
    }

    /// Direct subtypes of `name` among runtime classes.
    pub fn children(&self, name: &str) -> impl Iterator<Item = &String> {
        self.subtypes.children(name)
    }

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

impl ClassLookup for RuntimeClasspath {
    fn lookup(&self, name: &str) -> Option<Arc<ClassDescriptor>> {
        self.classes.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_is_rooted_at_object() {
        let runtime = RuntimeClasspath::platform();
        let object = runtime.lookup(OBJECT).unwrap();
        assert!(object.super_name.is_none());

        for name in runtime.names() {
            if name == OBJECT {
                continue;
            }
            let desc = runtime.lookup(name).unwrap();
            assert!(desc.super_name.is_some(), "{} has no superclass", name);
        }
    }

    #[test]
    fn test_platform_children() {
        let runtime = RuntimeClasspath::platform();
        let children: Vec<_> = runtime.children("java/lang/Number").cloned().collect();
        assert_eq!(
            children,
            vec!["java/lang/Double", "java/lang/Integer", "java/lang/Long"]
        );
    }
}
