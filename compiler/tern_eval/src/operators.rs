//! Binary and comparison operators.
//!
//! Numeric operands are promoted along `Bool -> Int -> Float` until their
//! tags match; a `Bool`/`Bool` pair computes as `Int`. Strings only take part
//! in `+`, `*` repetition and comparisons. Every other tag combination is a
//! type mismatch.

use std::borrow::Cow;

use tern_ir::{BinaryOp, CompareOp};
use tern_value::errors::{
    division_by_zero, integer_division_by_zero, modulo_by_zero, repeat_overflow,
    unorderable, unsupported_operands,
};
use tern_value::{BigInt, EvalResult, Value, ValueKind};

/// Numeric operands after promotion to a common tag.
enum Operands<'a> {
    Int(Cow<'a, BigInt>, Cow<'a, BigInt>),
    Float(f64, f64),
}

fn int_of(value: &Value) -> Option<Cow<'_, BigInt>> {
    match value {
        Value::Bool(b) => Some(Cow::Owned(BigInt::from(*b))),
        Value::Int(n) => Some(Cow::Borrowed(n)),
        _ => None,
    }
}

fn float_of(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Int(n) => Some(n.to_f64()),
        Value::Float(f) => Some(*f),
        _ => None,
    }
}

/// Promote two numeric operands to a common tag. `None` if either operand is
/// not numeric.
fn promote_pair<'a>(left: &'a Value, right: &'a Value) -> Option<Operands<'a>> {
    if left.kind() == ValueKind::Float || right.kind() == ValueKind::Float {
        Some(Operands::Float(float_of(left)?, float_of(right)?))
    } else {
        Some(Operands::Int(int_of(left)?, int_of(right)?))
    }
}

/// Evaluate an arithmetic operator.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => {
            if let (Value::Str(a), Value::Str(b)) = (left, right) {
                let mut out = String::with_capacity(a.len() + b.len());
                out.push_str(a);
                out.push_str(b);
                return Ok(Value::Str(out));
            }
            numeric(left, right, op, |a, b| a + b, |a, b| a + b)
        }
        BinaryOp::Sub => numeric(left, right, op, |a, b| a - b, |a, b| a - b),
        BinaryOp::Mul => match (left, right) {
            (Value::Str(s), count @ (Value::Bool(_) | Value::Int(_)))
            | (count @ (Value::Bool(_) | Value::Int(_)), Value::Str(s)) => repeat(s, count),
            _ => numeric(left, right, op, |a, b| a * b, |a, b| a * b),
        },
        BinaryOp::Div => true_div(left, right),
        BinaryOp::FloorDiv => {
            let (a, b) = integer_operands(left, right, op)?;
            a.checked_div_floor(&b)
                .map(Value::Int)
                .ok_or_else(integer_division_by_zero)
        }
        BinaryOp::Mod => {
            let (a, b) = integer_operands(left, right, op)?;
            a.checked_mod_floor(&b)
                .map(Value::Int)
                .ok_or_else(modulo_by_zero)
        }
    }
}

/// `+`, `-`, `*` on promoted numbers.
fn numeric(
    left: &Value,
    right: &Value,
    op: BinaryOp,
    int_op: fn(&BigInt, &BigInt) -> BigInt,
    float_op: fn(f64, f64) -> f64,
) -> EvalResult {
    match promote_pair(left, right) {
        Some(Operands::Int(a, b)) => Ok(Value::Int(int_op(&a, &b))),
        Some(Operands::Float(a, b)) => Ok(Value::Float(float_op(a, b))),
        None => Err(unsupported_operands(op.as_symbol(), left, right)),
    }
}

/// `/`: both operands become floats.
fn true_div(left: &Value, right: &Value) -> EvalResult {
    match (float_of(left), float_of(right)) {
        (Some(_), Some(b)) if b == 0.0 => Err(division_by_zero()),
        (Some(a), Some(b)) => Ok(Value::Float(a / b)),
        _ => Err(unsupported_operands(BinaryOp::Div.as_symbol(), left, right)),
    }
}

/// Operands of `//` and `%`: any numeric tag, coerced to an integer.
fn integer_operands(left: &Value, right: &Value, op: BinaryOp) -> EvalResult<(BigInt, BigInt)> {
    if !left.kind().is_numeric() || !right.kind().is_numeric() {
        return Err(unsupported_operands(op.as_symbol(), left, right));
    }
    Ok((left.to_int()?, right.to_int()?))
}

/// Largest string, in bytes, that repetition may build.
pub const MAX_REPEAT_BYTES: usize = 1 << 30;

/// `str * count`; a count of zero or less yields the empty string.
///
/// Results above [`MAX_REPEAT_BYTES`], or that cannot be allocated, are a
/// `RepeatOverflow` error.
fn repeat(s: &str, count: &Value) -> EvalResult {
    let count = count.to_int()?;
    if count.is_negative() || count.is_zero() {
        return Ok(Value::Str(String::new()));
    }
    let Some((n, total)) = count
        .to_usize()
        .and_then(|n| Some((n, s.len().checked_mul(n)?)))
        .filter(|&(_, total)| total <= MAX_REPEAT_BYTES)
    else {
        return Err(repeat_overflow(&count));
    };
    let mut out = String::new();
    if out.try_reserve_exact(total).is_err() {
        return Err(repeat_overflow(&count));
    }
    for _ in 0..n {
        out.push_str(s);
    }
    Ok(Value::Str(out))
}

/// Equality as `==` sees it.
///
/// A string or `None` never equals a value of another tag; numbers compare
/// after promotion.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::None, Value::None) => true,
        (Value::Str(_) | Value::None, _) | (_, Value::Str(_) | Value::None) => false,
        _ => match promote_pair(left, right) {
            Some(Operands::Int(a, b)) => a == b,
            Some(Operands::Float(a, b)) => a == b,
            None => false,
        },
    }
}

/// Strict ordering, `None` when the pair is unorderable.
fn less_than(left: &Value, right: &Value) -> Option<bool> {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => Some(a < b),
        _ => match promote_pair(left, right)? {
            Operands::Int(a, b) => Some(a < b),
            Operands::Float(a, b) => Some(a < b),
        },
    }
}

/// Evaluate a single comparison.
///
/// `<=` is `== or <` and `>=` is `== or >`, so two equal values compare as
/// ordered even when `<` alone would reject them.
pub fn evaluate_compare(left: &Value, right: &Value, op: CompareOp) -> EvalResult<bool> {
    let ordered = |a: &Value, b: &Value| {
        less_than(a, b).ok_or_else(|| unorderable(op.as_symbol(), left, right))
    };
    match op {
        CompareOp::Eq => Ok(values_equal(left, right)),
        CompareOp::NotEq => Ok(!values_equal(left, right)),
        CompareOp::Lt => ordered(left, right),
        CompareOp::Gt => ordered(right, left),
        CompareOp::LtEq => Ok(values_equal(left, right) || ordered(left, right)?),
        CompareOp::GtEq => Ok(values_equal(left, right) || ordered(right, left)?),
    }
}
