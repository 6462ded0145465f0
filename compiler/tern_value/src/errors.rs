//! Error types for evaluation.
//!
//! `EvalErrorKind` is the typed error category; `EvalError` pairs it with an
//! optional call backtrace. Factory functions (e.g. `division_by_zero()`) are
//! the construction API used by the evaluator.

use std::fmt;

use crate::{BigInt, Value};

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Operand tags an operator or conversion does not accept.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TypeMismatch {
    #[error("unsupported operand type(s) for {op}: '{left}' and '{right}'")]
    Operands {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("bad operand type for unary {op}: '{operand}'")]
    Operand {
        op: &'static str,
        operand: &'static str,
    },
    #[error("'{op}' not supported between instances of '{left}' and '{right}'")]
    Unorderable {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("{target}() argument must be a string or a number, not '{from}'")]
    Conversion {
        target: &'static str,
        from: &'static str,
    },
}

/// Call-site argument problems, and malformed parameter lists.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArityError {
    #[error("{function}() missing required argument: '{param}'")]
    MissingArgument { function: String, param: String },
    #[error("{function}() takes {max} positional argument(s) but {given} were given")]
    TooManyPositional {
        function: String,
        max: usize,
        given: usize,
    },
    #[error("positional argument follows keyword argument in call to {function}()")]
    PositionalAfterKeyword { function: String },
    #[error("{function}() got an unexpected keyword argument '{keyword}'")]
    UnexpectedKeyword { function: String, keyword: String },
    #[error("{function}() takes exactly one argument ({given} given)")]
    BuiltinArgCount {
        function: &'static str,
        given: usize,
    },
    #[error("{function}() takes no keyword arguments")]
    BuiltinKeyword { function: &'static str },
    #[error("non-default parameter '{param}' follows default parameter in {function}()")]
    NonDefaultAfterDefault { function: String, param: String },
}

/// Typed error category.
///
/// Matching on the kind (not the message) is how hosts and tests tell
/// errors apart. The `Display` impl produces the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("{operation} by zero")]
    DivisionByZero { operation: &'static str },

    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),

    #[error("name '{name}' is not defined")]
    UnboundName { name: String },

    #[error(transparent)]
    ArityMismatch(#[from] ArityError),

    #[error("maximum recursion depth exceeded (limit: {limit})")]
    RecursionLimitExceeded { limit: usize },

    #[error("invalid literal for {target}(): '{text}'")]
    MalformedLiteral { text: String, target: &'static str },

    #[error("cannot unpack {got} value(s) into {expected} target(s)")]
    UnpackMismatch { expected: usize, got: usize },

    #[error("'{keyword}' outside loop")]
    ControlOutsideLoop { keyword: &'static str },

    #[error("repeat count {count} is too large")]
    RepeatOverflow { count: String },
}

/// A single frame in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Name of the called function.
    pub name: String,
}

/// Snapshot of the active user-function calls at an error site, most recent
/// call first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "stack backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {}", frame.name)?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Call stack at the error site, attached when the error leaves the
    /// innermost user function.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        Self {
            kind,
            backtrace: None,
        }
    }

    /// Attach a backtrace unless one is already present.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        if self.backtrace.is_none() {
            self.backtrace = Some(backtrace);
        }
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for EvalError {}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

impl From<ArityError> for EvalError {
    fn from(err: ArityError) -> Self {
        Self::from_kind(err.into())
    }
}

impl From<TypeMismatch> for EvalError {
    fn from(err: TypeMismatch) -> Self {
        Self::from_kind(err.into())
    }
}

// Arithmetic

/// True division (`/`) by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero {
        operation: "division",
    })
}

/// Floor division (`//`) by zero.
#[cold]
pub fn integer_division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero {
        operation: "integer division",
    })
}

/// Modulo (`%`) by zero.
#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero {
        operation: "modulo",
    })
}

/// String repetition count that does not fit in memory.
#[cold]
pub fn repeat_overflow(count: &BigInt) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RepeatOverflow {
        count: count.to_string(),
    })
}

// Type mismatches

#[cold]
pub fn unsupported_operands(op: &'static str, left: &Value, right: &Value) -> EvalError {
    TypeMismatch::Operands {
        op,
        left: left.type_name(),
        right: right.type_name(),
    }
    .into()
}

#[cold]
pub fn bad_unary_operand(op: &'static str, operand: &Value) -> EvalError {
    TypeMismatch::Operand {
        op,
        operand: operand.type_name(),
    }
    .into()
}

#[cold]
pub fn unorderable(op: &'static str, left: &Value, right: &Value) -> EvalError {
    TypeMismatch::Unorderable {
        op,
        left: left.type_name(),
        right: right.type_name(),
    }
    .into()
}

/// `int(None)`, `float(None)` and the implicit conversions behind them.
#[cold]
pub fn conversion_type_mismatch(target: &'static str, from: &Value) -> EvalError {
    TypeMismatch::Conversion {
        target,
        from: from.type_name(),
    }
    .into()
}

// Names and literals

#[cold]
pub fn unbound_name(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundName {
        name: name.to_string(),
    })
}

#[cold]
pub fn malformed_literal(text: &str, target: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedLiteral {
        text: text.to_string(),
        target,
    })
}

// Control flow and assignment

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimitExceeded { limit })
}

#[cold]
pub fn unpack_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnpackMismatch { expected, got })
}

/// `break` or `continue` reached with no enclosing loop.
#[cold]
pub fn control_outside_loop(keyword: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ControlOutsideLoop { keyword })
}

// Arity

#[cold]
pub fn missing_argument(function: &str, param: &str) -> EvalError {
    ArityError::MissingArgument {
        function: function.to_string(),
        param: param.to_string(),
    }
    .into()
}

#[cold]
pub fn too_many_positional(function: &str, max: usize, given: usize) -> EvalError {
    ArityError::TooManyPositional {
        function: function.to_string(),
        max,
        given,
    }
    .into()
}

#[cold]
pub fn positional_after_keyword(function: &str) -> EvalError {
    ArityError::PositionalAfterKeyword {
        function: function.to_string(),
    }
    .into()
}

#[cold]
pub fn unexpected_keyword(function: &str, keyword: &str) -> EvalError {
    ArityError::UnexpectedKeyword {
        function: function.to_string(),
        keyword: keyword.to_string(),
    }
    .into()
}

#[cold]
pub fn builtin_arg_count(function: &'static str, given: usize) -> EvalError {
    ArityError::BuiltinArgCount { function, given }.into()
}

#[cold]
pub fn builtin_keyword(function: &'static str) -> EvalError {
    ArityError::BuiltinKeyword { function }.into()
}

#[cold]
pub fn non_default_after_default(function: &str, param: &str) -> EvalError {
    ArityError::NonDefaultAfterDefault {
        function: function.to_string(),
        param: param.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests;
