//! Tern Value - runtime data model for the Tern evaluator.
//!
//! - [`BigInt`]: arbitrary-precision signed decimal integer
//! - [`Value`]: tagged dynamic datum (`Bool`, `Int`, `Float`, `Str`, `None`)
//! - [`EvalError`]: structured evaluation errors; construct them through the
//!   factory functions in [`errors`]

mod bigint;
pub mod errors;
mod value;

pub use bigint::{BigInt, ParseBigIntError};
pub use errors::{
    ArityError, BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind, EvalResult, TypeMismatch,
};
pub use value::{format_float, Value, ValueKind};
