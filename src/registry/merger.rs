//! Exported-entry merge between namespaces.

use std::rc::Rc;

use super::error::RegistryError;
use super::types::{Entry, SharedNamespace};

/// Copy `source`'s exported entries into `target`.
///
/// For each name in `source`'s exported-names list, in list order, the
/// entry is copied when `overwrite` is true or `target` lacks the name.
/// With `attach_source`, `source` itself is additionally registered on
/// `target` under `as_name`, so the whole group stays reachable for later
/// re-merge or direct addressing.
///
/// Every exported name is validated against `source`'s entries up front;
/// a phantom export fails the merge with
/// [`RegistryError::MissingExport`] even when the overwrite policy would
/// have skipped the copy.
///
/// Copied entries are defined on `target` but not added to `target`'s own
/// exported-names list. When several sources export the same name under
/// `overwrite`, the last merge wins - callers order plugins so the
/// intended override lands last.
pub fn merge_namespace(
    target: &SharedNamespace,
    source: &SharedNamespace,
    as_name: &str,
    overwrite: bool,
    attach_source: bool,
) -> Result<(), RegistryError> {
    // A self-merge cannot change state, and borrowing both sides of the
    // same RefCell would panic.
    if Rc::ptr_eq(target, source) {
        return Ok(());
    }

    let src = source.borrow();
    let mut dst = target.borrow_mut();

    for name in src.exports() {
        let entry = src.get(name).ok_or_else(|| RegistryError::MissingExport {
            namespace: src.name().to_string(),
            name: name.clone(),
        })?;
        if overwrite || !dst.has(name) {
            log::debug!("add `{}` to `{}`", name, dst.name());
            dst.define(name.clone(), entry.clone());
        }
    }

    if attach_source {
        log::debug!("attach `{}` to `{}` as `{}`", src.name(), dst.name(), as_name);
        dst.define(as_name, Entry::Namespace(source.clone()));
    }

    Ok(())
}
