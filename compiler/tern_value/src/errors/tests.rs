use super::*;
use pretty_assertions::assert_eq;

#[test]
fn division_errors_name_the_operation() {
    assert_eq!(division_by_zero().to_string(), "division by zero");
    assert_eq!(
        integer_division_by_zero().to_string(),
        "integer division by zero"
    );
    assert_eq!(modulo_by_zero().to_string(), "modulo by zero");
    assert!(matches!(
        modulo_by_zero().kind,
        EvalErrorKind::DivisionByZero { .. }
    ));
}

#[test]
fn unsupported_operands_reports_type_names() {
    let err = unsupported_operands("-", &Value::string("a"), &Value::int(1));
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch(TypeMismatch::Operands {
            op: "-",
            left: "str",
            right: "int",
        })
    );
    assert_eq!(
        err.to_string(),
        "unsupported operand type(s) for -: 'str' and 'int'"
    );
}

#[test]
fn unorderable_message() {
    let err = unorderable("<", &Value::None, &Value::int(1));
    assert_eq!(
        err.to_string(),
        "'<' not supported between instances of 'NoneType' and 'int'"
    );
}

#[test]
fn unbound_name_message() {
    let err = unbound_name("x");
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundName {
            name: "x".to_string()
        }
    );
    assert_eq!(err.to_string(), "name 'x' is not defined");
}

#[test]
fn arity_errors_are_transparent() {
    let err = missing_argument("f", "b");
    assert!(matches!(
        err.kind,
        EvalErrorKind::ArityMismatch(ArityError::MissingArgument { .. })
    ));
    assert_eq!(err.to_string(), "f() missing required argument: 'b'");

    assert_eq!(
        too_many_positional("f", 2, 3).to_string(),
        "f() takes 2 positional argument(s) but 3 were given"
    );
    assert_eq!(
        builtin_arg_count("int", 2).to_string(),
        "int() takes exactly one argument (2 given)"
    );
}

#[test]
fn malformed_literal_message() {
    assert_eq!(
        malformed_literal("abc", "float").to_string(),
        "invalid literal for float(): 'abc'"
    );
}

#[test]
fn recursion_limit_message() {
    let err = recursion_limit_exceeded(20_000);
    assert_eq!(
        err.kind,
        EvalErrorKind::RecursionLimitExceeded { limit: 20_000 }
    );
    assert_eq!(
        err.to_string(),
        "maximum recursion depth exceeded (limit: 20000)"
    );
}

#[test]
fn backtrace_display_lists_frames() {
    let trace = EvalBacktrace::new(vec![
        BacktraceFrame {
            name: "outer".to_string(),
        },
        BacktraceFrame {
            name: "inner".to_string(),
        },
    ]);
    assert_eq!(trace.len(), 2);
    assert_eq!(trace.to_string(), "stack backtrace:\n  0: outer\n  1: inner\n");
    assert_eq!(EvalBacktrace::default().to_string(), "");
}

#[test]
fn with_backtrace_keeps_innermost() {
    let inner = EvalBacktrace::new(vec![BacktraceFrame {
        name: "inner".to_string(),
    }]);
    let outer = EvalBacktrace::new(vec![BacktraceFrame {
        name: "outer".to_string(),
    }]);
    let err = division_by_zero()
        .with_backtrace(inner.clone())
        .with_backtrace(outer);
    assert_eq!(err.backtrace, Some(inner));
}

#[test]
fn display_omits_backtrace() {
    let err = unbound_name("y").with_backtrace(EvalBacktrace::new(vec![BacktraceFrame {
        name: "f".to_string(),
    }]));
    assert_eq!(err.to_string(), "name 'y' is not defined");
}
