//! Plugin configuration file parsing.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::error::RegistryError;
use super::registry::PluginRegistry;

/// One plugin line in the configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PluginSpec {
    /// Identifier resolved through the registry's plugin source.
    pub name: String,
    /// Whether the plugin is loaded at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Whether the plugin's entries replace existing ones.
    #[serde(default = "default_true")]
    pub overwrite: bool,
}

fn default_true() -> bool {
    true
}

/// Complete plugin configuration.
///
/// Expected format:
/// ```toml
/// [[plugins]]
/// name = "ext1"
///
/// [[plugins]]
/// name = "legacy"
/// enabled = false
///
/// [[plugins]]
/// name = "compat"
/// overwrite = false
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginsConfig {
    #[serde(default)]
    pub plugins: Vec<PluginSpec>,
}

impl PluginsConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let content = fs::read_to_string(path).map_err(|e| RegistryError::Config {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, RegistryError> {
        toml::from_str(content).map_err(|e| RegistryError::Config {
            message: e.to_string(),
        })
    }

    /// Apply every enabled plugin to the registry, in listed order,
    /// honoring each plugin's overwrite flag.
    pub fn apply(&self, registry: &mut PluginRegistry) -> Result<(), RegistryError> {
        for plugin in &self.plugins {
            if !plugin.enabled {
                log::info!("plugin `{}` disabled, skipping", plugin.name);
                continue;
            }
            registry.add_plugin(plugin.name.as_str(), plugin.overwrite)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::source::StaticPluginSource;
    use crate::registry::types::{Entry, Namespace, Value};

    #[test]
    fn test_parse_empty_config() {
        let config = PluginsConfig::parse("").unwrap();
        assert!(config.plugins.is_empty());
    }

    #[test]
    fn test_parse_defaults() {
        let config = PluginsConfig::parse(
            r#"
            [[plugins]]
            name = "ext1"
            "#,
        )
        .unwrap();
        assert_eq!(config.plugins.len(), 1);
        assert_eq!(config.plugins[0].name, "ext1");
        assert!(config.plugins[0].enabled);
        assert!(config.plugins[0].overwrite);
    }

    #[test]
    fn test_parse_flags() {
        let config = PluginsConfig::parse(
            r#"
            [[plugins]]
            name = "legacy"
            enabled = false
            overwrite = false
            "#,
        )
        .unwrap();
        assert!(!config.plugins[0].enabled);
        assert!(!config.plugins[0].overwrite);
    }

    #[test]
    fn test_parse_invalid_toml_fails() {
        let err = PluginsConfig::parse("[[plugins]\nname =").unwrap_err();
        assert!(matches!(err, RegistryError::Config { .. }));
    }

    fn ops_plugin(identity: &str, value: i64) -> crate::registry::types::SharedNamespace {
        Namespace::new(identity)
            .with_child(
                Namespace::new(format!("{}.ops", identity)).with_value("val", Value::Int(value)),
            )
            .into_shared()
    }

    #[test]
    fn test_apply_respects_flags() {
        let mut source = StaticPluginSource::new();
        source.register(ops_plugin("ext1", 2));
        source.register(ops_plugin("ext2", 3));
        let mut registry =
            PluginRegistry::new(ops_plugin("base", 1), vec![], Box::new(source))
                .expect("registry should build");

        let config = PluginsConfig::parse(
            r#"
            [[plugins]]
            name = "ext1"
            overwrite = false

            [[plugins]]
            name = "ext2"
            enabled = false
            "#,
        )
        .unwrap();
        config.apply(&mut registry).expect("apply should succeed");

        // ext1 loaded without overwrite, ext2 skipped entirely.
        assert!(registry.is_loaded("ext1"));
        assert!(!registry.is_loaded("ext2"));
        match registry.resolve("ops", "val") {
            Ok(Entry::Const(v)) => assert_eq!(v, Value::Int(1)),
            other => panic!("expected the base constant, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_propagates_resolution_failure() {
        let mut registry = PluginRegistry::new(
            ops_plugin("base", 1),
            vec![],
            Box::new(StaticPluginSource::new()),
        )
        .expect("registry should build");

        let config = PluginsConfig::parse(
            r#"
            [[plugins]]
            name = "missing"
            "#,
        )
        .unwrap();
        let err = config.apply(&mut registry).unwrap_err();
        assert!(matches!(err, RegistryError::PluginResolution { .. }));
    }
}
