//! `math` built-in namespace.
//!
//! Mathematical constants and functions over [`Value`].

use crate::registry::types::{CallError, Entry, Namespace, Value};

/// Register the `math` namespace on the base namespace.
pub fn register(base: &mut Namespace) {
    let math = Namespace::new(format!("{}.math", base.name()))
        // Constants
        .with_value("PI", Value::Float(std::f64::consts::PI))
        .with_value("E", Value::Float(std::f64::consts::E))
        .with_value("TAU", Value::Float(std::f64::consts::TAU))
        .with_value("SQRT2", Value::Float(std::f64::consts::SQRT_2))
        // Functions
        .with_native("abs", math_abs)
        .with_native("floor", math_floor)
        .with_native("ceil", math_ceil)
        .with_native("round", math_round)
        .with_native("min", math_min)
        .with_native("max", math_max)
        .with_native("pow", math_pow)
        .with_native("sqrt", math_sqrt);

    base.define("math", Entry::Namespace(math.into_shared()));
    base.export("math");
}

/// Convert a Value to f64 for math operations.
fn to_f64(value: &Value) -> Result<f64, CallError> {
    match value {
        Value::Int(i) => Ok(*i as f64),
        Value::Float(f) => Ok(*f),
        other => Err(CallError::Type(format!("expected a number, got {}", other))),
    }
}

/// Fold an f64 result back into the narrowest Value.
fn from_f64(f: f64) -> Value {
    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Value::Int(f as i64)
    } else {
        Value::Float(f)
    }
}

fn arg(args: &[Value], index: usize, expected: usize) -> Result<&Value, CallError> {
    args.get(index).ok_or(CallError::Arity {
        expected,
        got: args.len(),
    })
}

/// math.abs
fn math_abs(args: Vec<Value>) -> Result<Value, CallError> {
    Ok(from_f64(to_f64(arg(&args, 0, 1)?)?.abs()))
}

/// math.floor
fn math_floor(args: Vec<Value>) -> Result<Value, CallError> {
    Ok(from_f64(to_f64(arg(&args, 0, 1)?)?.floor()))
}

/// math.ceil
fn math_ceil(args: Vec<Value>) -> Result<Value, CallError> {
    Ok(from_f64(to_f64(arg(&args, 0, 1)?)?.ceil()))
}

/// math.round
fn math_round(args: Vec<Value>) -> Result<Value, CallError> {
    Ok(from_f64(to_f64(arg(&args, 0, 1)?)?.round()))
}

/// math.min - minimum of all arguments.
fn math_min(args: Vec<Value>) -> Result<Value, CallError> {
    let mut min = to_f64(arg(&args, 0, 1)?)?;
    for value in &args[1..] {
        min = min.min(to_f64(value)?);
    }
    Ok(from_f64(min))
}

/// math.max - maximum of all arguments.
fn math_max(args: Vec<Value>) -> Result<Value, CallError> {
    let mut max = to_f64(arg(&args, 0, 1)?)?;
    for value in &args[1..] {
        max = max.max(to_f64(value)?);
    }
    Ok(from_f64(max))
}

/// math.pow
fn math_pow(args: Vec<Value>) -> Result<Value, CallError> {
    let base = to_f64(arg(&args, 0, 2)?)?;
    let exponent = to_f64(arg(&args, 1, 2)?)?;
    Ok(from_f64(base.powf(exponent)))
}

/// math.sqrt
fn math_sqrt(args: Vec<Value>) -> Result<Value, CallError> {
    Ok(from_f64(to_f64(arg(&args, 0, 1)?)?.sqrt()))
}
