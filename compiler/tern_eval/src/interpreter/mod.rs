//! Tree-walking interpreter over a `Module`.
//!
//! All program state lives here: the scope store, the function table and the
//! call stack. Statements yield a [`Flow`]; expressions yield a `Value`.
//! Calls return a value pack so that `a, b = f()` can unpack a multi-value
//! `return`.

mod builder;
mod builtins;
mod function_call;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use rustc_hash::FxHashMap;
use smallvec::smallvec;
use tracing::{debug, trace};

use tern_ir::{Expr, FuncDef, Module, Name, Stmt, StringInterner};
use tern_value::errors::{control_outside_loop, unbound_name, unpack_mismatch};
use tern_value::{EvalResult, Value};

use crate::diagnostics::CallStack;
use crate::exec::call::{check_param_order, UserFunction};
use crate::exec::control::{after_iteration, eval_and, eval_compare_chain, eval_or, LoopStep};
use crate::exec::{single_value, Flow, Values};
use crate::operators::evaluate_binary;
use crate::stack::ensure_sufficient_stack;
use crate::unary_operators::evaluate_unary;
use crate::{Environment, SharedPrintHandler};
use builtins::BuiltinNames;

/// Tree-walking interpreter.
pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    pub(crate) builtins: BuiltinNames,
    /// Scope store. Public so hosts can inspect globals after a run.
    pub env: Environment,
    pub(crate) functions: FxHashMap<Name, UserFunction<'a>>,
    pub(crate) call_stack: CallStack,
    pub(crate) print_handler: SharedPrintHandler,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with default configuration (stdout, default depth).
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    #[inline]
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Value of a global variable, by name.
    pub fn global(&self, name: &str) -> Option<&Value> {
        if !self.env.is_global() {
            return None;
        }
        self.env.lookup(self.interner.get(name)?)
    }

    /// Whether a user function called `name` is defined.
    pub fn has_function(&self, name: &str) -> bool {
        self.interner
            .get(name)
            .is_some_and(|name| self.functions.contains_key(&name))
    }

    /// Run every top-level statement of `module`.
    ///
    /// The result is the value of a top-level `return`, otherwise the value of
    /// the last single-expression statement, otherwise `None`.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = module.body.len()))]
    pub fn eval_module(&mut self, module: &'a Module) -> EvalResult {
        let mut result = Value::None;
        for stmt in &module.body {
            if let Stmt::Expr(exprs) = stmt {
                result = self.eval_expr_statement(exprs)?;
                continue;
            }
            match self.exec_stmt(stmt)? {
                Flow::Normal => {}
                Flow::Return(values) => return single_value(values),
                Flow::Break => return Err(control_outside_loop("break")),
                Flow::Continue => return Err(control_outside_loop("continue")),
            }
        }
        Ok(result)
    }

    /// Execute a suite, stopping at the first non-`Normal` outcome.
    pub fn exec_suite(&mut self, suite: &'a [Stmt]) -> EvalResult<Flow> {
        for stmt in suite {
            let flow = self.exec_stmt(stmt)?;
            if !flow.is_normal() {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Execute one statement.
    pub fn exec_stmt(&mut self, stmt: &'a Stmt) -> EvalResult<Flow> {
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt))
    }

    fn exec_stmt_inner(&mut self, stmt: &'a Stmt) -> EvalResult<Flow> {
        match stmt {
            Stmt::Expr(exprs) => {
                self.eval_expr_statement(exprs)?;
                Ok(Flow::Normal)
            }
            Stmt::Assign { targets, value } => {
                self.exec_assign(targets, value)?;
                Ok(Flow::Normal)
            }
            Stmt::AugAssign { target, op, value } => {
                let rhs = self.eval_expr(value)?;
                let Some(slot) = self.env.slot_mut(*target) else {
                    return Err(unbound_name(self.interner.lookup(*target)));
                };
                let result = evaluate_binary(slot, &rhs, op.binary_op())?;
                *slot = result;
                Ok(Flow::Normal)
            }
            Stmt::If { branches, orelse } => {
                for branch in branches {
                    if self.eval_expr(&branch.cond)?.is_truthy() {
                        return self.exec_suite(&branch.body);
                    }
                }
                match orelse {
                    Some(body) => self.exec_suite(body),
                    None => Ok(Flow::Normal),
                }
            }
            Stmt::While { cond, body } => self.exec_while(cond, body),
            Stmt::FuncDef(def) => {
                self.define_function(def)?;
                Ok(Flow::Normal)
            }
            Stmt::Return(exprs) => {
                let values = if exprs.is_empty() {
                    smallvec![Value::None]
                } else {
                    self.eval_values(exprs)?
                };
                Ok(Flow::Return(values))
            }
            Stmt::Break => Ok(Flow::Break),
            Stmt::Continue => Ok(Flow::Continue),
            Stmt::Pass => Ok(Flow::Normal),
        }
    }

    fn exec_while(&mut self, cond: &'a Expr, body: &'a [Stmt]) -> EvalResult<Flow> {
        let mut iteration: u64 = 0;
        while self.eval_expr(cond)?.is_truthy() {
            trace!(iteration, "loop iteration");
            if let LoopStep::Exit(flow) = after_iteration(self.exec_suite(body)?) {
                return Ok(flow);
            }
            iteration += 1;
        }
        Ok(Flow::Normal)
    }

    /// `t1 = t2 = ... = value`, each target a list of one or more names.
    ///
    /// The right-hand side is evaluated once; every target list must match
    /// the number of values before anything is bound.
    fn exec_assign(&mut self, targets: &'a [Vec<Name>], value: &'a [Expr]) -> EvalResult<()> {
        let values = self.eval_values(value)?;
        if let Some(bad) = targets.iter().find(|t| t.len() != values.len()) {
            return Err(unpack_mismatch(bad.len(), values.len()));
        }
        for target in targets {
            for (name, value) in target.iter().zip(&values) {
                self.env.assign(*name, value.clone());
            }
        }
        Ok(())
    }

    /// Register a function, evaluating its defaults now.
    fn define_function(&mut self, def: &'a FuncDef) -> EvalResult<()> {
        check_param_order(def, self.interner)?;
        let defaults = def
            .params
            .iter()
            .map(|param| {
                param
                    .default
                    .as_ref()
                    .map(|expr| self.eval_expr(expr))
                    .transpose()
            })
            .collect::<EvalResult<Vec<_>>>()?;
        debug!(
            function = self.interner.lookup(def.name),
            params = def.params.len(),
            "define function"
        );
        self.functions
            .insert(def.name, UserFunction { def, defaults });
        Ok(())
    }

    /// Evaluate a comma-separated expression list into a value pack.
    ///
    /// A lone call contributes every value it returns.
    fn eval_values(&mut self, exprs: &'a [Expr]) -> EvalResult<Values> {
        if let [Expr::Call { callee, args }] = exprs {
            return self.eval_call(*callee, args);
        }
        exprs.iter().map(|expr| self.eval_expr(expr)).collect()
    }

    /// Evaluate an expression statement. A tuple statement (`a, b`) or a call
    /// returning several values has no single value and yields `None`.
    fn eval_expr_statement(&mut self, exprs: &'a [Expr]) -> EvalResult {
        let values = self.eval_values(exprs)?;
        if values.len() == 1 {
            single_value(values)
        } else {
            Ok(Value::None)
        }
    }

    /// Evaluate an expression to a single value.
    pub fn eval_expr(&mut self, expr: &'a Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
    }

    fn eval_expr_inner(&mut self, expr: &'a Expr) -> EvalResult {
        match expr {
            Expr::Or(operands) => eval_or(operands, |e| self.eval_expr(e)).map(Value::Bool),
            Expr::And(operands) => eval_and(operands, |e| self.eval_expr(e)).map(Value::Bool),
            Expr::Not(operand) => Ok(Value::Bool(!self.eval_expr(operand)?.is_truthy())),
            Expr::Compare { first, rest } => {
                eval_compare_chain(first, rest, |e| self.eval_expr(e)).map(Value::Bool)
            }
            Expr::Binary { left, op, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(&left, &right, *op)
            }
            Expr::Unary { op, operand } => {
                let value = self.eval_expr(operand)?;
                evaluate_unary(&value, *op)
            }
            Expr::Call { callee, args } => single_value(self.eval_call(*callee, args)?),
            Expr::Name(name) => self
                .env
                .lookup(*name)
                .cloned()
                .ok_or_else(|| unbound_name(self.interner.lookup(*name))),
            Expr::Number(text) => Value::from_number_literal(text),
            Expr::Str(tokens) => Ok(Value::from_string_tokens(tokens.as_slice())),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::None => Ok(Value::None),
        }
    }
}
