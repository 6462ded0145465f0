//! Tern Eval - tree-walking evaluator for Tern modules.
//!
//! # Architecture
//!
//! - `Environment`: slot arena plus a bounded stack of scopes
//! - `evaluate_binary` / `evaluate_compare` / `evaluate_unary`: enum-based
//!   operator dispatch with implicit numeric promotion
//! - `Flow`: per-statement outcome carrying `break`/`continue`/`return`
//! - `Interpreter`: statement and expression evaluation, calls, built-ins
//!
//! Value types come from `tern_value` and are re-exported here.

mod diagnostics;
mod environment;
pub mod exec;
pub mod interpreter;
mod operators;
mod print_handler;
mod stack;
mod unary_operators;

pub use diagnostics::CallStack;
pub use environment::{Environment, SlotId, DEFAULT_MAX_DEPTH};
pub use exec::{Flow, Values};
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use operators::{evaluate_binary, evaluate_compare, values_equal, MAX_REPEAT_BYTES};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use unary_operators::evaluate_unary;

pub use tern_value::{BigInt, EvalError, EvalErrorKind, EvalResult, Value};

#[cfg(test)]
mod tests;
