//! Core types for namespace composition.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

/// A concrete value carried by constant entries and produced by callable
/// entries.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "bool({})", b),
            Value::Int(i) => write!(f, "int({})", i),
            Value::Float(x) => write!(f, "float({})", x),
            Value::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// Error raised when invoking a callable entry.
///
/// Distinct from [`RegistryError`](super::error::RegistryError): composing
/// namespaces and calling what was composed are separate failure domains.
#[derive(Debug, Error, PartialEq)]
pub enum CallError {
    /// The arguments (or the entry itself) had the wrong type.
    #[error("type error: {0}")]
    Type(String),
    /// Too few arguments.
    #[error("expected {expected} argument(s), got {got}")]
    Arity { expected: usize, got: usize },
}

/// Function signature for compiled-in entries. A plain function pointer,
/// so copying it between namespaces is free.
pub type NativeFn = fn(Vec<Value>) -> Result<Value, CallError>;

/// Closure signature for plugin-provided entries.
pub type PluginFn = dyn Fn(Vec<Value>) -> Result<Value, CallError>;

/// A shared handle to a namespace. Merging and source attachment alias the
/// same underlying namespace rather than deep-copying it.
pub type SharedNamespace = Rc<RefCell<Namespace>>;

/// A named value held by a namespace: a callable, a constant, or a nested
/// namespace. Identity is (owning namespace, name).
pub enum Entry {
    /// Direct function pointer - zero overhead for compiled-in functions.
    Native(NativeFn),
    /// Plugin-provided closure - small vtable indirection cost.
    Plugin(Rc<PluginFn>),
    /// Constant value.
    Const(Value),
    /// Nested namespace, shared with whoever else holds it.
    Namespace(SharedNamespace),
}

impl Entry {
    /// Execute this entry. Constants and namespaces are not callable.
    pub fn call(&self, args: Vec<Value>) -> Result<Value, CallError> {
        match self {
            Entry::Native(f) => f(args),
            Entry::Plugin(f) => f(args),
            Entry::Const(_) | Entry::Namespace(_) => Err(CallError::Type(format!(
                "{} entry is not callable",
                self.kind()
            ))),
        }
    }

    /// The nested namespace handle, if this entry is one.
    pub fn as_namespace(&self) -> Option<SharedNamespace> {
        match self {
            Entry::Namespace(ns) => Some(ns.clone()),
            _ => None,
        }
    }

    pub fn is_namespace(&self) -> bool {
        matches!(self, Entry::Namespace(_))
    }

    /// Human-readable kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Native(_) => "native function",
            Entry::Plugin(_) => "plugin function",
            Entry::Const(_) => "constant",
            Entry::Namespace(_) => "namespace",
        }
    }
}

impl Clone for Entry {
    fn clone(&self) -> Self {
        match self {
            Entry::Native(f) => Entry::Native(*f),
            Entry::Plugin(f) => Entry::Plugin(f.clone()),
            Entry::Const(v) => Entry::Const(v.clone()),
            Entry::Namespace(ns) => Entry::Namespace(ns.clone()),
        }
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Native(_) => write!(f, "Entry::Native(..)"),
            Entry::Plugin(_) => write!(f, "Entry::Plugin(..)"),
            Entry::Const(v) => write!(f, "Entry::Const({:?})", v),
            Entry::Namespace(ns) => write!(f, "Entry::Namespace({})", ns.borrow().name()),
        }
    }
}

/// An ordered, named collection of entries plus an explicit exported-names
/// list. Entries not listed in `exports` are private: the merger never
/// copies them, though they remain addressable on the namespace itself.
#[derive(Debug)]
pub struct Namespace {
    /// Qualified name, e.g. `"base.math"`.
    name: String,
    /// All entries, exported or not.
    entries: HashMap<String, Entry>,
    /// Exported names, in export order. Contains no duplicates.
    exports: Vec<String>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Namespace {
            name: name.into(),
            entries: HashMap::new(),
            exports: Vec::new(),
        }
    }

    /// Qualified name of this namespace.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last segment of the qualified name (`"base.math"` -> `"math"`).
    pub fn local_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Insert or replace an entry. Does NOT export it.
    pub fn define(&mut self, name: impl Into<String>, entry: Entry) {
        self.entries.insert(name.into(), entry);
    }

    /// Add a name to the exported-names list. Listing the same name twice
    /// is a no-op, so the list never holds duplicates.
    pub fn export(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.exports.contains(&name) {
            self.exports.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Exported names in export order.
    pub fn exports(&self) -> &[String] {
        &self.exports
    }

    /// All entries, exported or not. Iteration order is unspecified.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Entry)> {
        self.entries.iter()
    }

    /// Define and export a native function (builder style).
    pub fn with_native(mut self, name: impl Into<String>, f: NativeFn) -> Self {
        let name = name.into();
        self.define(name.clone(), Entry::Native(f));
        self.export(name);
        self
    }

    /// Define and export a plugin closure (builder style).
    pub fn with_plugin_fn(
        mut self,
        name: impl Into<String>,
        f: impl Fn(Vec<Value>) -> Result<Value, CallError> + 'static,
    ) -> Self {
        let name = name.into();
        self.define(name.clone(), Entry::Plugin(Rc::new(f)));
        self.export(name);
        self
    }

    /// Define and export a constant (builder style).
    pub fn with_value(mut self, name: impl Into<String>, value: Value) -> Self {
        let name = name.into();
        self.define(name.clone(), Entry::Const(value));
        self.export(name);
        self
    }

    /// Define and export a child namespace under its local name
    /// (builder style).
    pub fn with_child(mut self, child: Namespace) -> Self {
        let name = child.local_name().to_string();
        self.define(name.clone(), Entry::Namespace(child.into_shared()));
        self.export(name);
        self
    }

    pub fn into_shared(self) -> SharedNamespace {
        Rc::new(RefCell::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(args: Vec<Value>) -> Result<Value, CallError> {
        match args.first() {
            Some(Value::Int(n)) => Ok(Value::Int(n * 2)),
            Some(other) => Err(CallError::Type(format!("expected an int, got {}", other))),
            None => Err(CallError::Arity {
                expected: 1,
                got: 0,
            }),
        }
    }

    #[test]
    fn test_export_deduplicates() {
        let mut ns = Namespace::new("ns");
        ns.define("x", Entry::Const(Value::Int(1)));
        ns.export("x");
        ns.export("x");
        assert_eq!(ns.exports(), &["x".to_string()]);
    }

    #[test]
    fn test_define_does_not_export() {
        let mut ns = Namespace::new("ns");
        ns.define("hidden", Entry::Const(Value::Null));
        assert!(ns.has("hidden"));
        assert!(ns.exports().is_empty());
    }

    #[test]
    fn test_entry_call_native() {
        let entry = Entry::Native(double);
        assert_eq!(entry.call(vec![Value::Int(21)]), Ok(Value::Int(42)));
    }

    #[test]
    fn test_entry_call_const_fails() {
        let entry = Entry::Const(Value::Int(1));
        assert!(matches!(entry.call(vec![]), Err(CallError::Type(_))));
    }

    #[test]
    fn test_local_name() {
        assert_eq!(Namespace::new("base.math").local_name(), "math");
        assert_eq!(Namespace::new("base").local_name(), "base");
    }
}
