//! Command handlers for the `ternc` CLI.

mod run;

pub use run::{decode_module, run_file, run_source, RunError, RunOptions};
