//! Built-in base namespace assembly.

use crate::registry::types::{Namespace, SharedNamespace};

use super::math;
use super::text;

/// Assemble the built-in base namespace with all child namespaces.
pub fn base_namespace() -> SharedNamespace {
    let mut base = Namespace::new("base");
    math::register(&mut base);
    text::register(&mut base);
    base.into_shared()
}
