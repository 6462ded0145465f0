//! Smoke tests for the `run` command against JSON modules on disk.

#![allow(clippy::unwrap_used)]

use std::io::Write;

use pretty_assertions::assert_eq;
use tern_eval::{buffer_handler, EvalErrorKind, Value};
use ternc::commands::{run_file, run_source, RunError, RunOptions};

/// `x = 3` then `print(x + 2)`.
const PRINT_SUM: &str = r#"{
  "interner": ["x", "print"],
  "body": [
    {"Assign": {"targets": [[0]], "value": [{"Number": "3"}]}},
    {"Expr": [{"Call": {"callee": 1, "args": [
      {"Positional": {"Binary": {"left": {"Name": 0}, "op": "Add", "right": {"Number": "2"}}}}
    ]}}]}
  ]
}"#;

/// `def r(n): return r(n + 1)` then `r(0)`.
const RUNAWAY: &str = r#"{
  "interner": ["r", "n"],
  "body": [
    {"FuncDef": {"name": 0, "params": [{"name": 1, "default": null}], "body": [
      {"Return": [{"Call": {"callee": 0, "args": [
        {"Positional": {"Binary": {"left": {"Name": 1}, "op": "Add", "right": {"Number": "1"}}}}
      ]}}]}
    ]}},
    {"Expr": [{"Call": {"callee": 0, "args": [{"Positional": {"Number": "0"}}]}}]}
  ]
}"#;

fn write_program(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn runs_program_from_file() {
    let file = write_program(PRINT_SUM);
    let handler = buffer_handler();
    let result = run_file(file.path(), &RunOptions::default(), handler.clone()).unwrap();

    assert_eq!(result, Value::None);
    assert_eq!(handler.output(), "5\n");
}

#[test]
fn module_result_is_last_expression() {
    let json = r#"{"interner": [], "body": [
        {"Expr": [{"Binary": {"left": {"Str": ["\"ab\""]}, "op": "Mul", "right": {"Number": "3"}}}]}
    ]}"#;
    let result = run_source(json, &RunOptions::default(), buffer_handler()).unwrap();
    assert_eq!(result, Value::string("ababab"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = run_file(&path, &RunOptions::default(), buffer_handler()).unwrap_err();
    assert!(matches!(err, RunError::Io { .. }));
}

#[test]
fn malformed_json_is_decode_error() {
    let err = run_source("{\"body\": 3}", &RunOptions::default(), buffer_handler()).unwrap_err();
    assert!(matches!(err, RunError::Decode(_)));
    assert!(err.to_string().starts_with("malformed module:"));
}

#[test]
fn max_depth_option_bounds_recursion() {
    let options = RunOptions::parse(["--max-depth=10"]).unwrap();
    assert_eq!(options.max_depth, 10);

    let err = run_source(RUNAWAY, &options, buffer_handler()).unwrap_err();
    let RunError::Eval(eval) = err else {
        panic!("expected evaluation error, got {err:?}");
    };
    assert_eq!(eval.kind, EvalErrorKind::RecursionLimitExceeded { limit: 10 });
    assert_eq!(eval.backtrace.unwrap().len(), 9);
}

#[test]
fn unknown_option_is_rejected() {
    assert_eq!(RunOptions::parse(["--fast"]).unwrap_err(), "--fast");
    assert_eq!(RunOptions::parse(["--max-depth=x"]).unwrap_err(), "--max-depth=x");
}

#[test]
fn duplicate_identifiers_are_a_decode_error() {
    let json = r#"{"interner": ["a", "a", "print"], "body": [
        {"Expr": [{"Call": {"callee": 2, "args": []}}]}
    ]}"#;
    let err = run_source(json, &RunOptions::default(), buffer_handler()).unwrap_err();
    assert!(matches!(err, RunError::Decode(_)));
    assert!(err.to_string().contains("duplicate identifier 'a' at position 1"));

    let distinct = json.replacen("\"a\", \"a\"", "\"a\", \"b\"", 1);
    let handler = buffer_handler();
    run_source(&distinct, &RunOptions::default(), handler.clone()).unwrap();
    assert_eq!(handler.output(), "\n");
}
