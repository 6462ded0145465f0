//! Call evaluation for the Interpreter.

use smallvec::smallvec;

use tern_ir::{Argument, FuncDef, Name};
use tern_value::errors::unbound_name;
use tern_value::{EvalResult, Value};

use super::Interpreter;
use crate::exec::call::{bind_arguments, check_argument_order, CallArgs};
use crate::exec::control::at_function_boundary;
use crate::exec::Values;

impl<'a> Interpreter<'a> {
    /// Evaluate `callee(args)`, returning every value the callee returned.
    #[tracing::instrument(level = "debug", skip_all, fields(callee = self.interner.lookup(callee)))]
    pub(super) fn eval_call(&mut self, callee: Name, args: &'a [Argument]) -> EvalResult<Values> {
        let name = self.interner.lookup(callee);
        check_argument_order(args, name)?;

        if let Some(builtin) = self.builtins.get(callee) {
            return Ok(smallvec![self.call_builtin(builtin, args)?]);
        }

        let Some(function) = self.functions.get(&callee).cloned() else {
            return Err(unbound_name(name));
        };
        let call_args = self.eval_args(args)?;
        let bindings = bind_arguments(&function, call_args, self.interner)?;
        self.call_user(callee, function.def, bindings)
    }

    /// Evaluate arguments left to right.
    fn eval_args(&mut self, args: &'a [Argument]) -> EvalResult<CallArgs> {
        let mut call_args = CallArgs::default();
        for arg in args {
            match arg {
                Argument::Positional(expr) => {
                    let value = self.eval_expr(expr)?;
                    call_args.positional.push(value);
                }
                Argument::Keyword { name, value } => {
                    let value = self.eval_expr(value)?;
                    call_args.keywords.push((*name, value));
                }
            }
        }
        Ok(call_args)
    }

    /// Run a user function body in a fresh call scope.
    fn call_user(
        &mut self,
        callee: Name,
        def: &'a FuncDef,
        bindings: Vec<(Name, Value)>,
    ) -> EvalResult<Values> {
        let mut scoped = self.enter_call(callee, bindings)?;
        scoped
            .exec_suite(&def.body)
            .and_then(at_function_boundary)
            .map_err(|err| scoped.call_stack.attach_backtrace(err, scoped.interner))
    }
}
