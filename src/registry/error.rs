//! Error type for namespace composition and resolution.

use thiserror::Error;

/// Error type for registry operations.
///
/// Every variant is a configuration or usage defect surfaced immediately
/// to the caller; nothing here is retried. A duplicate plugin load is
/// deliberately NOT an error - the registry skips it silently and logs.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A namespace's exported-names list references an entry that does not
    /// exist. Indicates a malformed namespace; not recovered.
    #[error("namespace `{namespace}` exports `{name}` but has no such entry")]
    MissingExport { namespace: String, name: String },

    /// A plugin identifier could not be resolved to a namespace. The
    /// registry is left unchanged.
    #[error("plugin source `{source_name}` cannot resolve plugin `{plugin}`")]
    PluginResolution { source_name: String, plugin: String },

    /// A resolution step landed on an entry that is not a namespace.
    #[error("`{name}` is not a namespace (found {kind})")]
    NotANamespace { name: String, kind: &'static str },

    /// A resolution step named an entry that does not exist.
    #[error("cannot find `{name}` in namespace `{namespace}`")]
    NameNotFound { namespace: String, name: String },

    /// A dotted path failed the path grammar.
    #[error("invalid dotted path: {message}")]
    InvalidPath { message: String },

    /// The plugin configuration file is unreadable or not valid TOML.
    #[error("plugin config error: {message}")]
    Config { message: String },
}
