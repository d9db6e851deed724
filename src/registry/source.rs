//! Plugin source - resolves plugin identifiers to namespaces.

use std::collections::HashMap;

use super::error::RegistryError;
use super::types::SharedNamespace;

/// Resolves a plugin identifier to a namespace with a populated
/// exported-names list.
///
/// The registry treats this as an opaque lookup: where the namespace
/// contents come from is the source's business. Implementations should
/// fail with [`RegistryError::PluginResolution`] when an identifier
/// cannot be located.
pub trait PluginSource {
    fn resolve(&self, name: &str) -> Result<SharedNamespace, RegistryError>;

    /// Human-readable name for this source, used in logs and errors.
    fn name(&self) -> &str;
}

/// A plugin source backed by a pre-registered name-to-namespace map.
#[derive(Default)]
pub struct StaticPluginSource {
    plugins: HashMap<String, SharedNamespace>,
}

impl StaticPluginSource {
    pub fn new() -> Self {
        StaticPluginSource {
            plugins: HashMap::new(),
        }
    }

    /// Register a namespace under its own qualified name.
    pub fn register(&mut self, ns: SharedNamespace) -> &mut Self {
        let name = ns.borrow().name().to_string();
        self.plugins.insert(name, ns);
        self
    }

    /// Register a namespace under an explicit identifier.
    pub fn register_as(&mut self, name: impl Into<String>, ns: SharedNamespace) -> &mut Self {
        self.plugins.insert(name.into(), ns);
        self
    }
}

impl PluginSource for StaticPluginSource {
    fn resolve(&self, name: &str) -> Result<SharedNamespace, RegistryError> {
        self.plugins
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::PluginResolution {
                source_name: self.name().to_string(),
                plugin: name.to_string(),
            })
    }

    fn name(&self) -> &str {
        "static"
    }
}
