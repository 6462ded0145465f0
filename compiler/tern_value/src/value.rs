//! Runtime values.
//!
//! `Value` is immutable: operators build new values. Implicit promotion
//! follows [`ValueKind`] order (`Bool < Int < Float`); `Str` and `None` sit
//! outside the numeric ladder and are never reached by promotion.

use std::fmt;

use crate::errors::{conversion_type_mismatch, malformed_literal, EvalResult};
use crate::BigInt;

/// Tagged dynamic datum.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(BigInt),
    Float(f64),
    Str(String),
    None,
}

/// Tag of a [`Value`], ordered by promotion rank.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Str,
    None,
}

impl ValueKind {
    /// Whether the tag takes part in numeric promotion.
    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(self, ValueKind::Bool | ValueKind::Int | ValueKind::Float)
    }
}

// Factory methods

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(BigInt::from(n))
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Build a number from literal text.
    ///
    /// Text containing `.`, `e` or `E` is a `Float`; anything else must be a
    /// decimal integer.
    pub fn from_number_literal(text: &str) -> EvalResult {
        if text.contains(['.', 'e', 'E']) {
            text.parse::<f64>()
                .map(Value::Float)
                .map_err(|_| malformed_literal(text, "float"))
        } else {
            text.parse::<BigInt>()
                .map(Value::Int)
                .map_err(|_| malformed_literal(text, "int"))
        }
    }

    /// Build a string from adjacent literal tokens.
    ///
    /// Each token loses its first and last character (the quotes); the
    /// contents are taken verbatim, with no escape processing.
    pub fn from_string_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut out = String::new();
        for token in tokens {
            let mut chars = token.as_ref().chars();
            chars.next();
            chars.next_back();
            out.push_str(chars.as_str());
        }
        Value::Str(out)
    }
}

// Inspection and conversion

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::None => ValueKind::None,
        }
    }

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::None => "NoneType",
        }
    }

    /// Truthiness: numeric non-zero, non-empty string; `None` is false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(n) => !n.is_zero(),
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::None => false,
        }
    }

    /// Integer conversion behind `int()` and integer-only operators.
    ///
    /// Floats truncate toward zero; strings yield their leading signed
    /// decimal run.
    pub fn to_int(&self) -> EvalResult<BigInt> {
        match self {
            Value::Bool(b) => Ok(BigInt::from(*b)),
            Value::Int(n) => Ok(n.clone()),
            Value::Float(f) => {
                BigInt::from_f64(*f).ok_or_else(|| malformed_literal(&format_float(*f), "int"))
            }
            Value::Str(s) => BigInt::parse_leading(s).ok_or_else(|| malformed_literal(s, "int")),
            Value::None => Err(conversion_type_mismatch("int", self)),
        }
    }

    /// Float conversion behind `float()` and true division.
    pub fn to_float(&self) -> EvalResult<f64> {
        match self {
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Int(n) => Ok(n.to_f64()),
            Value::Float(f) => Ok(*f),
            Value::Str(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| malformed_literal(s, "float")),
            Value::None => Err(conversion_type_mismatch("float", self)),
        }
    }

    /// Promote one step along `Bool -> Int -> Float`.
    ///
    /// Returns the value unchanged for `Float`, `Str` and `None`.
    pub fn promote(self) -> Value {
        match self {
            Value::Bool(b) => Value::Int(BigInt::from(b)),
            Value::Int(n) => Value::Float(n.to_f64()),
            other => other,
        }
    }
}

/// Format a float the way `print` and `str()` do: six fixed decimals.
pub fn format_float(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f == f64::INFINITY {
        "inf".to_string()
    } else if f == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{f:.6}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Str(s) => f.write_str(s),
            Value::None => f.write_str("None"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}
