//! `text` built-in namespace.
//!
//! String functions over [`Value`], registered from a static table.

use std::collections::HashMap;

use crate::registry::types::{CallError, Entry, Namespace, NativeFn, Value};

lazy_static! {
    static ref TEXT_FUNCTIONS: HashMap<&'static str, NativeFn> = {
        let mut m: HashMap<&'static str, NativeFn> = HashMap::new();
        m.insert("upper", text_upper);
        m.insert("lower", text_lower);
        m.insert("len", text_len);
        m.insert("trim", text_trim);
        m.insert("concat", text_concat);
        m.insert("starts_with", text_starts_with);
        m
    };
}

/// Register the `text` namespace on the base namespace.
pub fn register(base: &mut Namespace) {
    let mut text = Namespace::new(format!("{}.text", base.name()));
    let mut functions: Vec<(&'static str, NativeFn)> =
        TEXT_FUNCTIONS.iter().map(|(name, f)| (*name, *f)).collect();
    functions.sort_by_key(|(name, _)| *name);
    for (name, f) in functions {
        text.define(name, Entry::Native(f));
        text.export(name);
    }

    base.define("text", Entry::Namespace(text.into_shared()));
    base.export("text");
}

fn to_str(value: &Value) -> Result<&str, CallError> {
    match value {
        Value::Str(s) => Ok(s),
        other => Err(CallError::Type(format!("expected a string, got {}", other))),
    }
}

fn arg(args: &[Value], index: usize, expected: usize) -> Result<&Value, CallError> {
    args.get(index).ok_or(CallError::Arity {
        expected,
        got: args.len(),
    })
}

/// text.upper
fn text_upper(args: Vec<Value>) -> Result<Value, CallError> {
    Ok(Value::Str(to_str(arg(&args, 0, 1)?)?.to_uppercase()))
}

/// text.lower
fn text_lower(args: Vec<Value>) -> Result<Value, CallError> {
    Ok(Value::Str(to_str(arg(&args, 0, 1)?)?.to_lowercase()))
}

/// text.len - number of characters.
fn text_len(args: Vec<Value>) -> Result<Value, CallError> {
    Ok(Value::Int(to_str(arg(&args, 0, 1)?)?.chars().count() as i64))
}

/// text.trim
fn text_trim(args: Vec<Value>) -> Result<Value, CallError> {
    Ok(Value::Str(to_str(arg(&args, 0, 1)?)?.trim().to_string()))
}

/// text.concat - concatenate all string arguments.
fn text_concat(args: Vec<Value>) -> Result<Value, CallError> {
    let mut out = String::new();
    for value in &args {
        out.push_str(to_str(value)?);
    }
    Ok(Value::Str(out))
}

/// text.starts_with
fn text_starts_with(args: Vec<Value>) -> Result<Value, CallError> {
    let s = to_str(arg(&args, 0, 2)?)?;
    let prefix = to_str(arg(&args, 1, 2)?)?;
    Ok(Value::Bool(s.starts_with(prefix)))
}
