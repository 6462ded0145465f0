//! Execution helpers the `Interpreter` delegates to.
//!
//! - `control`: statement outcomes, loops, short-circuit and comparison chains
//! - `call`: parameter validation and argument binding

pub mod call;
pub mod control;

use smallvec::SmallVec;
use tern_value::errors::unpack_mismatch;
use tern_value::{EvalResult, Value};

/// Values produced by `return` or a call. Almost always exactly one.
pub type Values = SmallVec<[Value; 1]>;

/// Outcome of executing a statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Flow {
    Normal,
    Break,
    Continue,
    /// Never empty: a bare `return` carries a single `None`.
    Return(Values),
}

impl Flow {
    #[inline]
    pub fn is_normal(&self) -> bool {
        matches!(self, Flow::Normal)
    }
}

/// Collapse a value pack into the single value an expression needs.
pub fn single_value(mut values: Values) -> EvalResult {
    match values.len() {
        0 => Ok(Value::None),
        1 => Ok(values.swap_remove(0)),
        n => Err(unpack_mismatch(1, n)),
    }
}
