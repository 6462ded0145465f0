//! Unary sign operators.

use tern_ir::UnaryOp;
use tern_value::errors::bad_unary_operand;
use tern_value::{EvalResult, Value};

/// Evaluate `-x` or `+x`.
///
/// Negation keeps a float a float and turns `Bool`/`Int` into an `Int`.
/// `+` returns a numeric operand unchanged.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (Value::Float(f), UnaryOp::Neg) => Ok(Value::Float(-f)),
        (Value::Bool(_) | Value::Int(_), UnaryOp::Neg) => Ok(Value::Int(-value.to_int()?)),
        (Value::Bool(_) | Value::Int(_) | Value::Float(_), UnaryOp::Pos) => Ok(value.clone()),
        (Value::Str(_) | Value::None, _) => Err(bad_unary_operand(op.as_symbol(), value)),
    }
}
