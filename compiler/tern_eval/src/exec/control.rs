//! Control flow helpers: loop outcomes, function-boundary outcomes,
//! short-circuit boolean operators and comparison chains.

use tern_ir::{CompareOp, Expr};
use tern_value::errors::control_outside_loop;
use tern_value::{EvalResult, Value};

use super::{Flow, Values};
use crate::operators::evaluate_compare;

/// What a `while` loop does after one pass over its body.
#[derive(Debug, PartialEq)]
pub enum LoopStep {
    /// Re-test the condition.
    Next,
    /// Leave the loop with this outcome.
    Exit(Flow),
}

/// Map the outcome of a loop body to the loop's next step.
///
/// `break` ends the loop normally; `return` leaves it and keeps propagating.
pub fn after_iteration(flow: Flow) -> LoopStep {
    match flow {
        Flow::Normal | Flow::Continue => LoopStep::Next,
        Flow::Break => LoopStep::Exit(Flow::Normal),
        Flow::Return(values) => LoopStep::Exit(Flow::Return(values)),
    }
}

/// Consume the outcome of a function body at the call boundary.
///
/// A body that runs off its end returns `None`. `break`/`continue` that
/// reach the boundary had no enclosing loop.
pub fn at_function_boundary(flow: Flow) -> EvalResult<Values> {
    match flow {
        Flow::Return(values) => Ok(values),
        Flow::Normal => Ok(std::iter::once(Value::None).collect()),
        Flow::Break => Err(control_outside_loop("break")),
        Flow::Continue => Err(control_outside_loop("continue")),
    }
}

/// `a or b or ...`: true at the first truthy operand.
pub fn eval_or<'e, F>(operands: &'e [Expr], mut eval_fn: F) -> EvalResult<bool>
where
    F: FnMut(&'e Expr) -> EvalResult,
{
    for operand in operands {
        if eval_fn(operand)?.is_truthy() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// `a and b and ...`: false at the first falsy operand.
pub fn eval_and<'e, F>(operands: &'e [Expr], mut eval_fn: F) -> EvalResult<bool>
where
    F: FnMut(&'e Expr) -> EvalResult,
{
    for operand in operands {
        if !eval_fn(operand)?.is_truthy() {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Chained comparison `first op0 e0 op1 e1 ...`.
///
/// Each operand is evaluated at most once; evaluation stops at the first
/// pair that does not hold.
pub fn eval_compare_chain<'e, F>(
    first: &'e Expr,
    rest: &'e [(CompareOp, Expr)],
    mut eval_fn: F,
) -> EvalResult<bool>
where
    F: FnMut(&'e Expr) -> EvalResult,
{
    let mut left = eval_fn(first)?;
    for (op, expr) in rest {
        let right = eval_fn(expr)?;
        if !evaluate_compare(&left, &right, *op)? {
            return Ok(false);
        }
        left = right;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;
    use tern_value::EvalErrorKind;

    #[test]
    fn test_break_ends_loop_normally() {
        assert_eq!(after_iteration(Flow::Break), LoopStep::Exit(Flow::Normal));
        assert_eq!(after_iteration(Flow::Continue), LoopStep::Next);
        assert_eq!(after_iteration(Flow::Normal), LoopStep::Next);
    }

    #[test]
    fn test_return_escapes_loop() {
        let flow = Flow::Return(smallvec![Value::int(1)]);
        assert_eq!(after_iteration(flow.clone()), LoopStep::Exit(flow));
    }

    #[test]
    fn test_function_boundary() {
        let values = at_function_boundary(Flow::Normal).ok();
        assert_eq!(values.as_deref(), Some(&[Value::None][..]));

        let err = at_function_boundary(Flow::Continue).err();
        assert_eq!(
            err.map(|e| e.kind),
            Some(EvalErrorKind::ControlOutsideLoop {
                keyword: "continue"
            })
        );
    }

    #[test]
    fn test_or_short_circuits() {
        let operands = [Expr::Bool(false), Expr::Bool(true), Expr::Name(tern_ir::Name::from_raw(0))];
        let mut seen = 0;
        let result = eval_or(&operands, |e| {
            seen += 1;
            match e {
                Expr::Bool(b) => Ok(Value::Bool(*b)),
                _ => panic!("evaluated past the first truthy operand"),
            }
        });
        assert_eq!(result.ok(), Some(true));
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_and_short_circuits() {
        let operands = [Expr::Bool(true), Expr::None, Expr::Name(tern_ir::Name::from_raw(0))];
        let result = eval_and(&operands, |e| match e {
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::None => Ok(Value::None),
            _ => panic!("evaluated past the first falsy operand"),
        });
        assert_eq!(result.ok(), Some(false));
    }

    #[test]
    fn test_compare_chain_stops_at_first_failure() {
        let number = |n: i64| Expr::Number(n.to_string().into_boxed_str());
        let rest = [
            (CompareOp::Lt, number(2)),
            (CompareOp::Lt, number(1)),
            (CompareOp::Lt, Expr::Name(tern_ir::Name::from_raw(0))),
        ];
        let result = eval_compare_chain(&number(1), &rest, |e| match e {
            Expr::Number(text) => Value::from_number_literal(text),
            _ => panic!("evaluated past the failing pair"),
        });
        assert_eq!(result.ok(), Some(false));
    }
}
