//! Programmatic module construction.
//!
//! Front ends written in Rust, and tests, build trees through these helpers
//! instead of spelling out every `Box::new`.

use crate::{
    Argument, AugOp, BinaryOp, CompareOp, Expr, FuncDef, IfBranch, Module, Name, Param, Stmt,
    StringInterner, Suite, UnaryOp,
};

/// Builder for a [`Module`]: owns the interner while statements are added.
#[derive(Default)]
pub struct ModuleBuilder {
    interner: StringInterner,
    body: Suite,
}

impl ModuleBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern an identifier.
    pub fn name(&mut self, s: &str) -> Name {
        self.interner.intern(s)
    }

    /// Append a top-level statement.
    pub fn push(&mut self, stmt: Stmt) -> &mut Self {
        self.body.push(stmt);
        self
    }

    /// Finish and return the module.
    #[must_use]
    pub fn finish(self) -> Module {
        Module {
            interner: self.interner,
            body: self.body,
        }
    }
}

impl Expr {
    /// Integer or float literal from a Rust value's decimal text.
    pub fn number(text: impl ToString) -> Expr {
        Expr::Number(text.to_string().into_boxed_str())
    }

    /// Single double-quoted string literal token.
    pub fn string(contents: &str) -> Expr {
        Expr::Str(vec![format!("\"{contents}\"").into_boxed_str()])
    }

    pub fn name(name: Name) -> Expr {
        Expr::Name(name)
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// A two-operand comparison.
    pub fn compare(left: Expr, op: CompareOp, right: Expr) -> Expr {
        Expr::Compare {
            first: Box::new(left),
            rest: vec![(op, right)],
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Expr {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn not(operand: Expr) -> Expr {
        Expr::Not(Box::new(operand))
    }

    /// Call with positional arguments only.
    pub fn call(callee: Name, args: Vec<Expr>) -> Expr {
        Expr::Call {
            callee,
            args: args.into_iter().map(Argument::Positional).collect(),
        }
    }
}

impl Stmt {
    /// `target = value`
    pub fn assign(target: Name, value: Expr) -> Stmt {
        Stmt::Assign {
            targets: vec![vec![target]],
            value: vec![value],
        }
    }

    /// `target op= value`
    pub fn aug_assign(target: Name, op: AugOp, value: Expr) -> Stmt {
        Stmt::AugAssign { target, op, value }
    }

    /// Single-expression statement.
    pub fn expr(expr: Expr) -> Stmt {
        Stmt::Expr(vec![expr])
    }

    pub fn while_loop(cond: Expr, body: Suite) -> Stmt {
        Stmt::While { cond, body }
    }

    /// `if cond: body` without `elif`/`else`.
    pub fn if_then(cond: Expr, body: Suite) -> Stmt {
        Stmt::If {
            branches: vec![IfBranch { cond, body }],
            orelse: None,
        }
    }

    /// Single-value `return`.
    pub fn ret(value: Expr) -> Stmt {
        Stmt::Return(vec![value])
    }
}

impl FuncDef {
    pub fn new(name: Name, params: Vec<Param>, body: Suite) -> Self {
        FuncDef { name, params, body }
    }
}

impl Param {
    /// Parameter without default.
    pub fn required(name: Name) -> Self {
        Param { name, default: None }
    }

    pub fn with_default(name: Name, default: Expr) -> Self {
        Param {
            name,
            default: Some(default),
        }
    }
}
