//! Built-in functions: `print`, `int`, `float`, `str`, `bool`.
//!
//! Built-ins resolve before user functions, so a `def print(...)` is
//! registered but never called.

use std::fmt::Write;

use tern_ir::{Argument, Name, StringInterner};
use tern_value::errors::{builtin_arg_count, builtin_keyword};
use tern_value::{EvalResult, Value};

use super::Interpreter;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Builtin {
    Print,
    Int,
    Float,
    Str,
    Bool,
}

impl Builtin {
    const ALL: [Builtin; 5] = [
        Builtin::Print,
        Builtin::Int,
        Builtin::Float,
        Builtin::Str,
        Builtin::Bool,
    ];

    pub(crate) const fn name(self) -> &'static str {
        match self {
            Builtin::Print => "print",
            Builtin::Int => "int",
            Builtin::Float => "float",
            Builtin::Str => "str",
            Builtin::Bool => "bool",
        }
    }
}

/// Built-in names pre-resolved against a module's interner.
///
/// A name the module never mentions is `None` and can never be called.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BuiltinNames {
    names: [Option<Name>; 5],
}

impl BuiltinNames {
    pub(crate) fn resolve(interner: &StringInterner) -> Self {
        BuiltinNames {
            names: Builtin::ALL.map(|builtin| interner.get(builtin.name())),
        }
    }

    pub(crate) fn get(&self, name: Name) -> Option<Builtin> {
        Builtin::ALL
            .into_iter()
            .zip(self.names)
            .find_map(|(builtin, resolved)| (resolved == Some(name)).then_some(builtin))
    }
}

impl<'a> Interpreter<'a> {
    pub(super) fn call_builtin(&mut self, builtin: Builtin, args: &'a [Argument]) -> EvalResult {
        let function = builtin.name();
        if args.iter().any(Argument::is_keyword) {
            return Err(builtin_keyword(function));
        }
        if builtin != Builtin::Print && args.len() != 1 {
            return Err(builtin_arg_count(function, args.len()));
        }

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            if let Argument::Positional(expr) = arg {
                values.push(self.eval_expr(expr)?);
            }
        }

        match (builtin, values.as_slice()) {
            (Builtin::Print, values) => {
                self.print_values(values);
                Ok(Value::None)
            }
            (Builtin::Int, [value]) => value.to_int().map(Value::Int),
            (Builtin::Float, [value]) => value.to_float().map(Value::Float),
            (Builtin::Str, [value]) => Ok(Value::Str(value.to_string())),
            (Builtin::Bool, [value]) => Ok(Value::Bool(value.is_truthy())),
            (_, values) => Err(builtin_arg_count(function, values.len())),
        }
    }

    /// `print(a, b, ...)`: arguments joined by single spaces, then a newline.
    fn print_values(&self, values: &[Value]) {
        let mut line = String::new();
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            let _ = write!(line, "{value}");
        }
        self.print_handler.println(&line);
    }
}
