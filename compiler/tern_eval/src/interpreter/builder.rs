//! `InterpreterBuilder` for creating configured Interpreter instances.

use rustc_hash::FxHashMap;

use tern_ir::StringInterner;

use super::builtins::BuiltinNames;
use super::Interpreter;
use crate::diagnostics::CallStack;
use crate::environment::DEFAULT_MAX_DEPTH;
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// ```text
/// let handler = buffer_handler();
/// let mut interp = InterpreterBuilder::new(&module.interner)
///     .print_handler(handler.clone())
///     .max_call_depth(1_000)
///     .build();
/// interp.eval_module(&module)?;
/// ```
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: usize,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            print_handler: None,
            max_call_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Where `print` writes. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Bound on live scopes, the global scope included. Reaching it is a
    /// `RecursionLimitExceeded` error. Defaults to 20,000.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            builtins: BuiltinNames::resolve(self.interner),
            env: Environment::with_max_depth(self.max_call_depth),
            functions: FxHashMap::default(),
            call_stack: CallStack::new(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}
