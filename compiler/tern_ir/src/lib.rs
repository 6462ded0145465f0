//! Tern IR - syntax tree types for the Tern evaluator.
//!
//! The evaluator does not parse source text. An external front end produces a
//! [`Module`]: an identifier table plus a tree of statements and expressions
//! whose node kinds mirror the grammar layers of the language (boolean,
//! comparison, arithmetic, unary, call, atom).
//!
//! # Contents
//!
//! - [`Name`]: interned identifier, compared as a `u32`
//! - [`StringInterner`]: owns identifier text for one module
//! - [`Stmt`], [`Expr`]: the tree itself
//! - [`BinaryOp`], [`CompareOp`], [`UnaryOp`], [`AugOp`]: operator kinds decided
//!   by the front end
//! - [`ModuleBuilder`]: programmatic construction (embedding, tests)
//!
//! With the `serde` feature every type derives `Serialize`/`Deserialize`, so a
//! front end written in any language can hand modules over as JSON.

mod ast;
mod builder;
mod interner;
mod name;

pub use ast::{
    Argument, AugOp, BinaryOp, CompareOp, Expr, FuncDef, IfBranch, Module, Param, Stmt, Suite,
    UnaryOp,
};
pub use builder::ModuleBuilder;
pub use interner::{DuplicateIdentifier, StringInterner};
pub use name::Name;
