//! RAII guard for user-function call scopes.
//!
//! [`ScopedInterpreter`] pops the call scope and the call-stack frame when
//! dropped, so every exit path of a call (normal return, error, panic
//! unwinding) releases the call's slots.

use std::ops::{Deref, DerefMut};

use tern_ir::Name;
use tern_value::{EvalResult, Value};

use super::Interpreter;

/// Interpreter borrowed for the duration of one call.
///
/// Derefs to [`Interpreter`], so the body is executed through the guard.
pub struct ScopedInterpreter<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
        self.interpreter.call_stack.pop();
    }
}

impl<'interp> Deref for ScopedInterpreter<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Enter a call to `function` with its bound arguments.
    ///
    /// Fails with `RecursionLimitExceeded` when the scope store is full; in
    /// that case nothing is pushed.
    pub fn enter_call<I>(&mut self, function: Name, args: I) -> EvalResult<ScopedInterpreter<'_, 'a>>
    where
        I: IntoIterator<Item = (Name, Value)>,
    {
        self.env.push_call_scope(args)?;
        self.call_stack.push(function);
        Ok(ScopedInterpreter { interpreter: self })
    }
}
