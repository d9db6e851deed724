//! The composed plugin registry.

use std::collections::HashMap;

use super::error::RegistryError;
use super::merger::merge_namespace;
use super::source::PluginSource;
use super::types::{Entry, Namespace, SharedNamespace};
use super::walker::walk_children;
use crate::path::parse_path;

/// Name of the registry's root namespace.
pub const ROOT_NAME: &str = "registry";

/// A plugin given to [`PluginRegistry::add_plugin`]: either an identifier
/// to be resolved through the registry's [`PluginSource`], or an
/// already-built namespace.
pub enum PluginRef {
    Id(String),
    Namespace(SharedNamespace),
}

impl From<&str> for PluginRef {
    fn from(name: &str) -> Self {
        PluginRef::Id(name.to_string())
    }
}

impl From<String> for PluginRef {
    fn from(name: String) -> Self {
        PluginRef::Id(name)
    }
}

impl From<SharedNamespace> for PluginRef {
    fn from(ns: SharedNamespace) -> Self {
        PluginRef::Namespace(ns)
    }
}

/// The top-level composed namespace.
///
/// Owns the root namespace, the set of applied plugin identities, and the
/// [`PluginSource`] used to resolve plugin identifiers. Constructed once
/// from a base namespace and mutated in place by [`add_plugin`]; intended
/// to live for the remainder of the process.
///
/// A plugin's identity is its namespace's own qualified name. Applying the
/// same identity twice is a guaranteed no-op - the applied set only grows.
///
/// [`add_plugin`]: PluginRegistry::add_plugin
pub struct PluginRegistry {
    root: SharedNamespace,
    /// Applied plugin identities, each keeping its namespace reachable.
    plugins: HashMap<String, SharedNamespace>,
    source: Box<dyn PluginSource>,
}

impl PluginRegistry {
    /// Build a registry from a base namespace.
    ///
    /// Every direct child namespace of `base` gets an empty placeholder
    /// child of the same name on the registry root - the composed shape is
    /// declared before any entries are copied in. `base` is then applied
    /// as the first plugin, followed by `initial_plugins` in order, all
    /// with overwrite enabled.
    pub fn new(
        base: SharedNamespace,
        initial_plugins: Vec<PluginRef>,
        source: Box<dyn PluginSource>,
    ) -> Result<Self, RegistryError> {
        let root = Namespace::new(ROOT_NAME).into_shared();
        {
            let children = walk_children(&base.borrow());
            let mut names: Vec<String> = children.keys().cloned().collect();
            names.sort();
            let mut r = root.borrow_mut();
            for name in names {
                log::debug!("declare child namespace `{}.{}`", ROOT_NAME, name);
                let placeholder = Namespace::new(format!("{}.{}", ROOT_NAME, name));
                r.define(name.clone(), Entry::Namespace(placeholder.into_shared()));
                r.export(name);
            }
        }

        let mut registry = PluginRegistry {
            root,
            plugins: HashMap::new(),
            source,
        };
        registry.add_plugin(base, true)?;
        for plugin in initial_plugins {
            registry.add_plugin(plugin, true)?;
        }
        Ok(registry)
    }

    /// Apply a plugin to the registry.
    ///
    /// Identifiers are resolved through the registry's [`PluginSource`];
    /// a failed resolution propagates and leaves the registry unchanged.
    /// If the plugin's identity was already applied, this is a silent
    /// no-op. Otherwise every child namespace of the plugin whose name
    /// matches a child namespace on the registry root is merged into it
    /// under the given overwrite policy, and the plugin's child is also
    /// attached there under the plugin's identity name. Children with no
    /// matching root namespace contribute nothing.
    pub fn add_plugin(
        &mut self,
        plugin: impl Into<PluginRef>,
        overwrite: bool,
    ) -> Result<(), RegistryError> {
        let ns = match plugin.into() {
            PluginRef::Id(name) => self.source.resolve(&name)?,
            PluginRef::Namespace(ns) => ns,
        };
        let identity = ns.borrow().name().to_string();
        if self.plugins.contains_key(&identity) {
            log::info!("plugin `{}` already loaded, skipping", identity);
            return Ok(());
        }
        log::info!("load plugin `{}`", identity);
        self.load_children(&ns, &identity, overwrite)?;
        self.plugins.insert(identity, ns);
        Ok(())
    }

    /// Merge each child namespace of `plugin` into the same-named child of
    /// the registry root.
    fn load_children(
        &self,
        plugin: &SharedNamespace,
        identity: &str,
        overwrite: bool,
    ) -> Result<(), RegistryError> {
        let children = walk_children(&plugin.borrow());
        for (name, child) in &children {
            let target = self.root.borrow().get(name).and_then(|e| e.as_namespace());
            match target {
                Some(target) => merge_namespace(&target, child, identity, overwrite, true)?,
                None => log::warn!(
                    "plugin `{}` child namespace `{}` has no registry counterpart, ignoring",
                    identity,
                    name
                ),
            }
        }
        Ok(())
    }

    /// Resolve `(namespace, dotted.path)` to a concrete entry.
    ///
    /// `namespace` must name a direct child namespace of the registry
    /// root. The dotted path is walked segment by segment: each step
    /// requires the current entry to be a namespace and the segment to
    /// exist on it. Exact match only - no partial or fuzzy resolution.
    pub fn resolve(&self, namespace: &str, dotted_path: &str) -> Result<Entry, RegistryError> {
        let mut current = {
            let root = self.root.borrow();
            root.get(namespace)
                .cloned()
                .ok_or_else(|| RegistryError::NameNotFound {
                    namespace: root.name().to_string(),
                    name: namespace.to_string(),
                })?
        };
        let mut current_name = namespace.to_string();

        let segments = parse_path(dotted_path)?;
        for segment in segments {
            let ns = current
                .as_namespace()
                .ok_or_else(|| RegistryError::NotANamespace {
                    name: current_name.clone(),
                    kind: current.kind(),
                })?;
            let ns = ns.borrow();
            current = ns
                .get(&segment)
                .cloned()
                .ok_or_else(|| RegistryError::NameNotFound {
                    namespace: ns.name().to_string(),
                    name: segment.clone(),
                })?;
            current_name = segment;
        }
        Ok(current)
    }

    /// The registry's root namespace.
    pub fn root(&self) -> SharedNamespace {
        self.root.clone()
    }

    /// Has a plugin with this identity been applied?
    pub fn is_loaded(&self, identity: &str) -> bool {
        self.plugins.contains_key(identity)
    }

    /// Identities of all applied plugins, sorted.
    pub fn plugin_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.plugins.keys().cloned().collect();
        names.sort();
        names
    }

    /// The retained namespace of an applied plugin.
    pub fn plugin(&self, identity: &str) -> Option<SharedNamespace> {
        self.plugins.get(identity).cloned()
    }
}
