//! Direct-child-namespace enumeration.

use std::collections::HashMap;

use super::types::{Namespace, SharedNamespace};

/// Enumerate the direct children of `ns` that are themselves namespaces,
/// keyed by entry name.
///
/// One level deep only; the registry calls this repeatedly as it descends.
/// Private (non-exported) children are included - export status gates
/// merging, not visibility to the walker. An empty map is a valid result
/// for a leaf namespace.
pub fn walk_children(ns: &Namespace) -> HashMap<String, SharedNamespace> {
    let mut children = HashMap::new();
    for (name, entry) in ns.entries() {
        if let Some(child) = entry.as_namespace() {
            children.insert(name.clone(), child);
        }
    }
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::types::{Entry, Value};

    #[test]
    fn test_walk_finds_only_namespaces() {
        let ns = Namespace::new("base")
            .with_value("version", Value::Int(1))
            .with_child(Namespace::new("base.math"))
            .with_child(Namespace::new("base.text"));
        let children = walk_children(&ns);
        assert_eq!(children.len(), 2);
        assert!(children.contains_key("math"));
        assert!(children.contains_key("text"));
    }

    #[test]
    fn test_walk_sees_private_children() {
        let mut ns = Namespace::new("base");
        ns.define(
            "internal",
            Entry::Namespace(Namespace::new("base.internal").into_shared()),
        );
        let children = walk_children(&ns);
        assert!(children.contains_key("internal"));
    }

    #[test]
    fn test_walk_leaf_is_empty() {
        let ns = Namespace::new("leaf").with_value("x", Value::Null);
        assert!(walk_children(&ns).is_empty());
    }
}
