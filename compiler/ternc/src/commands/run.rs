//! The `run` command: decode a JSON module and evaluate it.

use std::path::{Path, PathBuf};

use tern_eval::{InterpreterBuilder, SharedPrintHandler, DEFAULT_MAX_DEPTH};
use tern_ir::Module;
use tern_value::{EvalError, Value};
use tracing::debug;

/// Failure of a `run` invocation.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed module: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("runtime error: {0}")]
    Eval(#[from] EvalError),
}

/// Options for the `run` command.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Scope depth cap, global scope included.
    pub max_depth: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RunOptions {
    /// Parse `run` flags. Unknown flags are returned as the error.
    pub fn parse<'s>(args: impl IntoIterator<Item = &'s str>) -> Result<Self, &'s str> {
        let mut options = RunOptions::default();
        for arg in args {
            match arg
                .strip_prefix("--max-depth=")
                .and_then(|n| n.parse().ok())
            {
                Some(depth) => options.max_depth = depth,
                None => return Err(arg),
            }
        }
        Ok(options)
    }
}

/// Decode a module from its JSON form.
pub fn decode_module(json: &str) -> Result<Module, RunError> {
    let module: Module = serde_json::from_str(json)?;
    debug!(
        identifiers = module.interner.len(),
        statements = module.body.len(),
        "decoded module"
    );
    Ok(module)
}

/// Decode and run a module, sending `print` output to `handler`.
pub fn run_source(
    json: &str,
    options: &RunOptions,
    handler: SharedPrintHandler,
) -> Result<Value, RunError> {
    let module = decode_module(json)?;
    let mut interpreter = InterpreterBuilder::new(&module.interner)
        .print_handler(handler)
        .max_call_depth(options.max_depth)
        .build();
    Ok(interpreter.eval_module(&module)?)
}

/// Read `path` and run it.
pub fn run_file(
    path: &Path,
    options: &RunOptions,
    handler: SharedPrintHandler,
) -> Result<Value, RunError> {
    let json = std::fs::read_to_string(path).map_err(|source| RunError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    run_source(&json, options, handler)
}
