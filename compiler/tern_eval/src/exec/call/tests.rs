use super::*;
use pretty_assertions::assert_eq;
use tern_ir::{Expr, Param};
use tern_value::{ArityError, EvalErrorKind};

struct Fixture {
    interner: StringInterner,
    def: FuncDef,
}

/// `def f(a, b=2)`
fn fixture() -> Fixture {
    let mut interner = StringInterner::new();
    let f = interner.intern("f");
    let a = interner.intern("a");
    let b = interner.intern("b");
    let def = FuncDef::new(
        f,
        vec![
            Param::required(a),
            Param::with_default(b, Expr::number(2)),
        ],
        Vec::new(),
    );
    Fixture { interner, def }
}

fn function(fx: &Fixture) -> UserFunction<'_> {
    UserFunction {
        def: &fx.def,
        defaults: vec![None, Some(Value::int(2))],
    }
}

fn bound(fx: &Fixture, args: CallArgs) -> EvalResult<Vec<(String, Value)>> {
    let bindings = bind_arguments(&function(fx), args, &fx.interner)?;
    Ok(bindings
        .into_iter()
        .map(|(name, value)| (fx.interner.lookup(name).to_string(), value))
        .collect())
}

fn arity_kind(result: EvalResult<Vec<(String, Value)>>) -> Option<ArityError> {
    match result.err()?.kind {
        EvalErrorKind::ArityMismatch(err) => Some(err),
        _ => None,
    }
}

#[test]
fn test_default_fills_missing() {
    let fx = fixture();
    let args = CallArgs {
        positional: vec![Value::int(5)],
        keywords: Vec::new(),
    };
    assert_eq!(
        bound(&fx, args).ok(),
        Some(vec![
            ("a".to_string(), Value::int(5)),
            ("b".to_string(), Value::int(2)),
        ])
    );
}

#[test]
fn test_positional_overrides_default() {
    let fx = fixture();
    let args = CallArgs {
        positional: vec![Value::int(5), Value::int(10)],
        keywords: Vec::new(),
    };
    let bindings = bound(&fx, args).ok();
    assert_eq!(bindings.map(|b| b[1].1.clone()), Some(Value::int(10)));
}

#[test]
fn test_keyword_binds_by_name() {
    let fx = fixture();
    let b = fx.interner.get("b");
    let a = fx.interner.get("a");
    let (Some(a), Some(b)) = (a, b) else {
        panic!("names are interned");
    };
    let args = CallArgs {
        positional: Vec::new(),
        keywords: vec![(b, Value::int(7)), (a, Value::int(1))],
    };
    assert_eq!(
        bound(&fx, args).ok(),
        Some(vec![
            ("a".to_string(), Value::int(1)),
            ("b".to_string(), Value::int(7)),
        ])
    );
}

#[test]
fn test_keyword_overwrites_positional() {
    let fx = fixture();
    let Some(a) = fx.interner.get("a") else {
        panic!("a is interned");
    };
    let args = CallArgs {
        positional: vec![Value::int(1)],
        keywords: vec![(a, Value::int(9))],
    };
    let bindings = bound(&fx, args).ok();
    assert_eq!(bindings.map(|b| b[0].1.clone()), Some(Value::int(9)));
}

#[test]
fn test_missing_required_argument() {
    let fx = fixture();
    let err = arity_kind(bound(&fx, CallArgs::default()));
    assert_eq!(
        err,
        Some(ArityError::MissingArgument {
            function: "f".to_string(),
            param: "a".to_string(),
        })
    );
}

#[test]
fn test_too_many_positional() {
    let fx = fixture();
    let args = CallArgs {
        positional: vec![Value::int(1), Value::int(2), Value::int(3)],
        keywords: Vec::new(),
    };
    assert_eq!(
        arity_kind(bound(&fx, args)),
        Some(ArityError::TooManyPositional {
            function: "f".to_string(),
            max: 2,
            given: 3,
        })
    );
}

#[test]
fn test_unknown_keyword() {
    let mut fx = fixture();
    let c = fx.interner.intern("c");
    let args = CallArgs {
        positional: vec![Value::int(1)],
        keywords: vec![(c, Value::int(3))],
    };
    assert_eq!(
        arity_kind(bound(&fx, args)),
        Some(ArityError::UnexpectedKeyword {
            function: "f".to_string(),
            keyword: "c".to_string(),
        })
    );
}

#[test]
fn test_param_order() {
    let mut fx = fixture();
    assert!(check_param_order(&fx.def, &fx.interner).is_ok());

    let c = fx.interner.intern("c");
    fx.def.params.push(Param::required(c));
    let err = check_param_order(&fx.def, &fx.interner).err();
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("non-default parameter 'c' follows default parameter in f()".to_string())
    );
}

#[test]
fn test_argument_order() {
    let mut interner = StringInterner::new();
    let k = interner.intern("k");
    let ok = [
        Argument::Positional(Expr::number(1)),
        Argument::Keyword {
            name: k,
            value: Expr::number(2),
        },
    ];
    assert!(check_argument_order(&ok, "f").is_ok());

    let bad = [
        Argument::Keyword {
            name: k,
            value: Expr::number(2),
        },
        Argument::Positional(Expr::number(1)),
    ];
    assert!(matches!(
        check_argument_order(&bad, "f").map_err(|e| e.kind),
        Err(EvalErrorKind::ArityMismatch(
            ArityError::PositionalAfterKeyword { .. }
        ))
    ));
}
