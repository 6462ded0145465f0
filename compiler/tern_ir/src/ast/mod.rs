//! Syntax tree for Tern modules.
//!
//! Statements and expressions are each a single enum whose variants follow the
//! grammar layers. Operator tokens arrive already resolved into enums.

mod operators;

pub use operators::{AugOp, BinaryOp, CompareOp, UnaryOp};

use crate::{Name, StringInterner};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A statement sequence forming a block body.
pub type Suite = Vec<Stmt>;

/// A complete program as handed over by the front end.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Module {
    /// Identifier text for every `Name` in `body`.
    pub interner: StringInterner,
    /// Top-level statements.
    pub body: Suite,
}

/// Statements.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stmt {
    /// Expression statement; several expressions form a tuple that is discarded.
    Expr(Vec<Expr>),
    /// `a = b, c = value`: every target list receives the same values.
    ///
    /// `targets` is in source order. Each target list is one or more names
    /// (`a, b = ...` unpacks).
    Assign {
        targets: Vec<Vec<Name>>,
        value: Vec<Expr>,
    },
    /// `target op= value`.
    AugAssign {
        target: Name,
        op: AugOp,
        value: Expr,
    },
    /// `if`/`elif` branches in order, then the optional `else` body.
    If {
        branches: Vec<IfBranch>,
        orelse: Option<Suite>,
    },
    /// `while cond: body`.
    While { cond: Expr, body: Suite },
    /// `def name(params): body`.
    FuncDef(FuncDef),
    /// `return` with zero or more comma-separated values.
    Return(Vec<Expr>),
    Break,
    Continue,
    Pass,
}

/// One `if`/`elif` arm.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IfBranch {
    pub cond: Expr,
    pub body: Suite,
}

/// A function definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FuncDef {
    pub name: Name,
    pub params: Vec<Param>,
    pub body: Suite,
}

/// A formal parameter with its optional default expression.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Param {
    pub name: Name,
    pub default: Option<Expr>,
}

/// An actual argument at a call site.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Argument {
    Positional(Expr),
    Keyword { name: Name, value: Expr },
}

impl Argument {
    /// Whether this is a `name=value` argument.
    #[inline]
    pub fn is_keyword(&self) -> bool {
        matches!(self, Argument::Keyword { .. })
    }
}

/// Expressions, from the loosest-binding layer down to atoms.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// `a or b or ...`
    Or(Vec<Expr>),
    /// `a and b and ...`
    And(Vec<Expr>),
    /// `not a`
    Not(Box<Expr>),
    /// Chained comparison `first op0 e0 op1 e1 ...`.
    Compare {
        first: Box<Expr>,
        rest: Vec<(CompareOp, Expr)>,
    },
    /// Additive and multiplicative layers.
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    /// Unary sign.
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// `callee(args)`.
    Call { callee: Name, args: Vec<Argument> },
    /// Variable reference.
    Name(Name),
    /// Number literal text exactly as written (`42`, `3.14`, `1e3`).
    Number(Box<str>),
    /// String literal tokens, quotes included; adjacent tokens concatenate.
    Str(Vec<Box<str>>),
    Bool(bool),
    None,
}

impl Module {
    /// Text of a name in this module.
    #[inline]
    pub fn name_str(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }
}
