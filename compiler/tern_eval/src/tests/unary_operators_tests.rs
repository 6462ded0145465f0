//! Tests for unary sign operators.

#![allow(clippy::unwrap_used)]

use crate::unary_operators::evaluate_unary;
use pretty_assertions::assert_eq;
use tern_ir::UnaryOp;
use tern_value::{EvalErrorKind, TypeMismatch, Value};

#[test]
fn test_negation() {
    assert_eq!(evaluate_unary(&Value::int(5), UnaryOp::Neg).unwrap(), Value::int(-5));
    assert_eq!(
        evaluate_unary(&Value::Float(1.5), UnaryOp::Neg).unwrap(),
        Value::Float(-1.5)
    );
    assert_eq!(
        evaluate_unary(&Value::Bool(true), UnaryOp::Neg).unwrap(),
        Value::int(-1)
    );
    assert_eq!(evaluate_unary(&Value::int(0), UnaryOp::Neg).unwrap(), Value::int(0));
}

#[test]
fn test_plus_is_identity_on_numbers() {
    for value in [Value::int(-3), Value::Float(2.5), Value::Bool(false)] {
        assert_eq!(evaluate_unary(&value, UnaryOp::Pos).unwrap(), value);
    }
}

#[test]
fn test_non_numeric_operands() {
    let err = evaluate_unary(&Value::string("a"), UnaryOp::Neg).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch(TypeMismatch::Operand {
            op: "-",
            operand: "str",
        })
    );
    assert!(evaluate_unary(&Value::None, UnaryOp::Pos).is_err());
}
