//! Namespace composition and the plugin registry.
//!
//! This module implements the registry's composition pipeline:
//!
//! ```text
//! Composition Flow:
//! 1. Base namespace → walker enumerates child namespaces
//! 2. Registry root  → empty placeholder child per base child
//! 3. Base applied as the first plugin (merger copies exported entries)
//! 4. Each plugin applied in caller order, deduplicated by identity
//! ```
//!
//! ### Key Components
//!
//! - **[`Namespace`]**: named entry container with an explicit
//!   exported-names list
//! - **[`walk_children`]**: one-level enumeration of nested namespaces
//! - **[`merge_namespace`]**: exported-entry copy under an overwrite policy
//! - **[`PluginRegistry`]**: the composed root plus the applied-identity set
//! - **[`PluginSource`]**: trait resolving plugin identifiers to namespaces
//! - **[`PluginsConfig`]**: TOML plugin list driving registration
//!
//! ### Override Rules
//!
//! Merging copies only exported entries. With overwrite enabled an entry
//! already present on the target is replaced (so plugin application order
//! decides the final value); with overwrite disabled the existing entry is
//! left untouched. Either way the plugin's child namespace is attached to
//! the target under the plugin's identity name, so the un-merged original
//! stays addressable:
//!
//! ```
//! use nsreg::registry::{Entry, Namespace, PluginRegistry, StaticPluginSource, Value};
//!
//! let base = Namespace::new("base")
//!     .with_child(Namespace::new("base.ops").with_value("mode", Value::Str("strict".into())))
//!     .into_shared();
//! let mut registry =
//!     PluginRegistry::new(base, vec![], Box::new(StaticPluginSource::new())).unwrap();
//!
//! let ext = Namespace::new("ext")
//!     .with_child(Namespace::new("ext.ops").with_value("mode", Value::Str("lax".into())))
//!     .into_shared();
//! registry.add_plugin(ext, false).unwrap();
//!
//! // overwrite=false: the base value survives...
//! match registry.resolve("ops", "mode").unwrap() {
//!     Entry::Const(v) => assert_eq!(v, Value::Str("strict".into())),
//!     other => panic!("expected a constant, got {:?}", other),
//! }
//! // ...but the plugin's own value stays reachable through the attachment.
//! match registry.resolve("ops", "ext.mode").unwrap() {
//!     Entry::Const(v) => assert_eq!(v, Value::Str("lax".into())),
//!     other => panic!("expected a constant, got {:?}", other),
//! }
//! ```

pub mod config;
pub mod error;
pub mod merger;
pub mod registry;
pub mod source;
pub mod types;
pub mod walker;

pub use config::{PluginSpec, PluginsConfig};
pub use error::RegistryError;
pub use merger::merge_namespace;
pub use registry::{PluginRef, PluginRegistry, ROOT_NAME};
pub use source::{PluginSource, StaticPluginSource};
pub use types::{CallError, Entry, Namespace, NativeFn, PluginFn, SharedNamespace, Value};
pub use walker::walk_children;
