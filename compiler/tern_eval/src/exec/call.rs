//! Function call helpers: parameter-list validation and argument binding.

use tern_ir::{Argument, FuncDef, Name, StringInterner};
use tern_value::errors::{
    missing_argument, non_default_after_default, positional_after_keyword, too_many_positional,
    unexpected_keyword,
};
use tern_value::{EvalResult, Value};

/// A user function registered by `def`.
#[derive(Clone, Debug)]
pub struct UserFunction<'a> {
    pub def: &'a FuncDef,
    /// Default value per parameter, evaluated once when the `def` ran.
    pub defaults: Vec<Option<Value>>,
}

/// Evaluated call-site arguments in source order.
#[derive(Debug, Default)]
pub struct CallArgs {
    pub positional: Vec<Value>,
    pub keywords: Vec<(Name, Value)>,
}

/// Reject `def f(a=1, b)`: parameters without a default must come first.
pub fn check_param_order(def: &FuncDef, interner: &StringInterner) -> EvalResult<()> {
    let mut seen_default = false;
    for param in &def.params {
        match (&param.default, seen_default) {
            (Some(_), _) => seen_default = true,
            (None, true) => {
                return Err(non_default_after_default(
                    interner.lookup(def.name),
                    interner.lookup(param.name),
                ))
            }
            (None, false) => {}
        }
    }
    Ok(())
}

/// Reject `f(a=1, 2)` before any argument is evaluated.
pub fn check_argument_order(args: &[Argument], function: &str) -> EvalResult<()> {
    let mut seen_keyword = false;
    for arg in args {
        if arg.is_keyword() {
            seen_keyword = true;
        } else if seen_keyword {
            return Err(positional_after_keyword(function));
        }
    }
    Ok(())
}

/// Bind call arguments to the parameters of `function`.
///
/// Defaults fill first, then positional arguments in order, then keyword
/// arguments, which overwrite whatever the parameter held. Returns the
/// bindings in parameter order.
pub fn bind_arguments(
    function: &UserFunction<'_>,
    args: CallArgs,
    interner: &StringInterner,
) -> EvalResult<Vec<(Name, Value)>> {
    let params = &function.def.params;
    let name = || interner.lookup(function.def.name);

    if args.positional.len() > params.len() {
        return Err(too_many_positional(
            name(),
            params.len(),
            args.positional.len(),
        ));
    }

    let mut slots = function.defaults.clone();
    slots.resize(params.len(), None);
    for (slot, value) in slots.iter_mut().zip(args.positional) {
        *slot = Some(value);
    }
    for (keyword, value) in args.keywords {
        let Some(index) = params.iter().position(|p| p.name == keyword) else {
            return Err(unexpected_keyword(name(), interner.lookup(keyword)));
        };
        slots[index] = Some(value);
    }

    params
        .iter()
        .zip(slots)
        .map(|(param, slot)| {
            slot.map(|value| (param.name, value))
                .ok_or_else(|| missing_argument(name(), interner.lookup(param.name)))
        })
        .collect()
}

#[cfg(test)]
mod tests;
