//! # nsreg - composable plugin namespace registry
//!
//! A registry that folds a base namespace and an ordered list of plugin
//! namespaces into one unified lookup surface:
//! - Deterministic conflict resolution (last plugin wins when overwriting
//!   is enabled, first definition wins otherwise)
//! - Idempotent registration (loading the same plugin twice is a no-op)
//! - Flat `(namespace, dotted.path)` resolution into concrete entries
//!
//! ## Quick Start
//!
//! ```
//! use nsreg::registry::{Entry, Namespace, PluginRegistry, StaticPluginSource, Value};
//!
//! // A base namespace with one child namespace `ops`.
//! let base = Namespace::new("base")
//!     .with_child(Namespace::new("base.ops").with_value("answer", Value::Int(41)))
//!     .into_shared();
//!
//! let mut registry =
//!     PluginRegistry::new(base, vec![], Box::new(StaticPluginSource::new())).unwrap();
//!
//! // A plugin overriding `ops.answer`.
//! let ext = Namespace::new("ext")
//!     .with_child(Namespace::new("ext.ops").with_value("answer", Value::Int(42)))
//!     .into_shared();
//! registry.add_plugin(ext, true).unwrap();
//!
//! match registry.resolve("ops", "answer").unwrap() {
//!     Entry::Const(v) => assert_eq!(v, Value::Int(42)),
//!     other => panic!("expected a constant, got {:?}", other),
//! }
//! ```
//!
//! ## Composition Model
//!
//! A [`registry::Namespace`] is a named container of entries (native
//! functions, plugin closures, constants, or nested namespaces) plus an
//! explicit exported-names list. Only exported entries cross a merge;
//! everything else stays private to its source.
//!
//! [`registry::PluginRegistry::new`] pre-declares an empty child namespace
//! on the registry root for every direct child of the base namespace, then
//! applies the base itself as the first plugin. Each subsequent
//! [`registry::PluginRegistry::add_plugin`] call:
//!
//! 1. Resolves the plugin (an identifier goes through the injected
//!    [`registry::PluginSource`]; an already-built namespace is used as-is).
//! 2. Skips silently if the plugin's identity was already applied.
//! 3. Merges each of the plugin's child namespaces into the same-named
//!    registry child, attaching the plugin's child under the plugin's own
//!    name so its full namespace stays independently reachable.
//!
//! Child namespaces with no same-named counterpart on the registry root
//! contribute nothing; the registry never invents new top-level namespaces
//! on behalf of a plugin.
//!
//! ## Resolution
//!
//! [`registry::PluginRegistry::resolve`] takes a root child namespace name
//! and a dotted path (`"Vector.normalize"`), walks nested namespaces
//! segment by segment, and returns the final entry. Paths are validated by
//! a small pest grammar (see [`path`]); resolution is exact-match only.
//!
//! ## Built-ins
//!
//! [`builtins::base_namespace`] provides a ready-made base namespace with
//! `math` and `text` child namespaces, useful as a composition target out
//! of the box:
//!
//! ```
//! use nsreg::builtins::base_namespace;
//! use nsreg::registry::{PluginRegistry, StaticPluginSource, Value};
//!
//! let registry = PluginRegistry::new(
//!     base_namespace(),
//!     vec![],
//!     Box::new(StaticPluginSource::new()),
//! )
//! .unwrap();
//!
//! let abs = registry.resolve("math", "abs").unwrap();
//! assert_eq!(abs.call(vec![Value::Int(-7)]).unwrap(), Value::Int(7));
//! ```

#[macro_use]
extern crate lazy_static;

pub mod builtins;
pub mod path;
pub mod registry;
