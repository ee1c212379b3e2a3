use std::fs;

use exprkit::{
    calculate,
    error::{BracketError, Error, ParseError, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::{
            Evaluator,
            function::core::{Arity, FunctionTable},
        },
        lexer::tokenize,
        parser::parse,
        session::Session,
        value::Value,
    },
};
use walkdir::WalkDir;

#[test]
fn docs_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("docs/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, transcript) in extract_transcripts(&content).into_iter().enumerate() {
            let mut session = Session::new();
            for (input, expected) in transcript {
                count += 1;
                let actual = match session.run(&input) {
                    Ok(value) => value.to_string(),
                    Err(e) => e.to_string(),
                };
                assert_eq!(actual, expected,
                           "transcript {} in {:?} failed on '{}'",
                           i + 1,
                           path,
                           input);
            }
        }
    }

    assert!(count > 0, "No exprkit examples found in docs/src");
}

/// Collects every ```` ```exprkit ```` block as `(input, expected output)`
/// pairs. Input lines start with `> `; the line after each is its output.
fn extract_transcripts(content: &str) -> Vec<Vec<(String, String)>> {
    let mut transcripts = Vec::new();
    let mut inside = false;
    let mut pairs = Vec::new();
    let mut pending: Option<String> = None;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```exprkit") {
            inside = true;
            pairs = Vec::new();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            assert!(pending.is_none(), "input without output: {pending:?}");
            transcripts.push(std::mem::take(&mut pairs));
            continue;
        }
        if !inside {
            continue;
        }
        match (pending.take(), trimmed.strip_prefix("> ")) {
            (None, Some(input)) => pending = Some(input.to_string()),
            (Some(input), None) => pairs.push((input, trimmed.to_string())),
            (pending, _) => panic!("malformed transcript near '{line}' after {pending:?}"),
        }
    }

    transcripts
}

fn assert_success(src: &str) {
    let mut session = Session::new();
    for line in src.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Err(e) = session.run(line) {
            panic!("Line '{line}' failed: {e}");
        }
    }
}

fn assert_failure(src: &str) {
    if let Ok(v) = calculate(src, &Environment::with_constants()) {
        panic!("'{src}' evaluated to {v} but was expected to fail")
    }
}

fn value_of(src: &str) -> Value {
    calculate(src, &Environment::new()).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
}

#[test]
fn standard_arithmetic_precedence() {
    assert_eq!(value_of("(2 + 3) * 4"), Value::Number(20.0));
    assert_eq!(value_of("2 + 3 * 4 - 6 / 2"), Value::Number(11.0));
    assert_eq!(value_of("10 - 4 - 3"), Value::Number(3.0));
    assert_eq!(value_of("2 * (3 + 4) * 5"), Value::Number(70.0));
}

#[test]
fn exponent_is_right_associative() {
    assert_eq!(value_of("2 ** 3 ** 2"), Value::Number(512.0));
    assert_eq!(value_of("2 ^ 3 ^ 2"), Value::Number(512.0));
}

#[test]
fn builtins_compose() {
    assert_eq!(value_of("sqrt(16) + pow(2, 3)"), Value::Number(12.0));
    assert_eq!(value_of("max(abs(-7), round(6.5), 1)"), Value::Number(7.0));
}

#[test]
fn empty_input_is_unexpected_end() {
    assert_eq!(calculate("", &Environment::new()),
               Err(Error::Parse(ParseError::UnexpectedEndOfInput { position: 0 })));
    assert_eq!(calculate("   ", &Environment::new()),
               Err(Error::Parse(ParseError::UnexpectedEndOfInput { position: 0 })));
}

#[test]
fn dangling_operator_reports_end_of_input() {
    assert_eq!(calculate("1 +", &Environment::new()),
               Err(Error::Parse(ParseError::UnexpectedEndOfInput { position: 3 })));
}

#[test]
fn unclosed_bracket_is_unmatched() {
    assert!(matches!(calculate("(2 + 3", &Environment::new()),
                     Err(Error::Parse(ParseError::UnmatchedBracket(BracketError::Unclosed { .. })))));
}

#[test]
fn undefined_variable_is_named() {
    assert_eq!(calculate("x + 1", &Environment::new()),
               Err(Error::Runtime(RuntimeError::UndefinedVariable { name:     "x".to_string(),
                                                                    position: 0, })));
}

#[test]
fn misplaced_tokens_are_rejected() {
    assert!(matches!(calculate("* 2", &Environment::new()),
                     Err(Error::Parse(ParseError::UnexpectedToken { position: 0, .. }))));
    assert!(matches!(calculate("1 2", &Environment::new()),
                     Err(Error::Parse(ParseError::UnexpectedTrailingInput { position: 2, .. }))));
    assert!(matches!(calculate("max(1,)", &Environment::new()),
                     Err(Error::Parse(ParseError::UnexpectedToken { .. }))));
}

#[test]
fn token_round_trip_preserves_kinds() {
    let source = "{a1+2.5}*[b//c]%-max(d,e)**f^g>=h&&!i||j!=k";
    let kinds = |s: &str| tokenize(s).unwrap().into_iter().map(|(t, _)| t).collect::<Vec<_>>();

    let first = kinds(source);
    let rejoined = first.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
    assert_eq!(kinds(&rejoined), first);
}

#[test]
fn evaluation_is_repeatable() {
    let expr = parse(&tokenize("cos(t) ** 2 + sin(t) ** 2").unwrap()).unwrap();
    let env: Environment = [("t", 0.75)].into_iter().collect();
    let evaluator = Evaluator::new();

    let first = evaluator.evaluate(&expr, &env).unwrap();
    for _ in 0..3 {
        assert_eq!(evaluator.evaluate(&expr, &env).unwrap(), first);
    }
}

#[test]
fn logical_operators() {
    assert_success("assert(2 < 3)\nassert(3 > 2)\nassert(2 <= 2)\nassert(3 >= 3)");
    assert_success("assert(2 != 3)\nassert(2 == 2)\nassert(!(1 == 2))");
    assert_success("assert(1 < 2 && 2 < 3)\nassert(1 > 2 || 2 < 3)");
    assert_success("assert((1 < 2) == (3 < 4))");
    assert_failure("1 && 2");
    assert_failure("!1");
}

#[test]
fn short_circuit_skips_right_side() {
    assert_eq!(value_of("1 > 2 && nothing"), Value::Bool(false));
    assert_eq!(value_of("1 < 2 || nothing"), Value::Bool(true));
    assert_failure("1 > 2 & nothing");
    assert_failure("1 < 2 | nothing");
}

#[test]
fn assignments_persist_in_a_session() {
    assert_success("x = 2\ny = x * 3\nassert(y == 6)");
    assert_success("a = b = 7\nassert(a + b == 14)");
    assert_success("5 * 5\nassert(ans == 25)");
    assert_failure("(x) = 1");
    assert_failure("2 = 1");
}

#[test]
fn calculate_does_not_bind() {
    let env = Environment::new();
    assert_eq!(calculate("z = 3", &env), Ok(Value::Number(3.0)));
    assert!(!env.contains("z"));
}

#[test]
fn arithmetic_failures() {
    assert_failure("1 / 0");
    assert_failure("5 // (2 - 2)");
    assert_failure("5 % 0");
    assert_failure("10 ** 1000");
    assert_failure("(-8) ** 0.5");
    assert_failure("ln(0)");
    assert_failure("acos(2)");
}

#[test]
fn function_call_failures() {
    assert_failure("frobnicate(2)");
    assert_failure("sin(1, 2)");
    assert_failure("max()");
    assert_failure("sqrt(1 < 2)");
    assert_failure("assert(1 == 2)");
}

#[test]
fn custom_function_table() {
    let table = FunctionTable::empty().with("twice", Arity::Exact(1), |args, position| {
                                          Ok(Value::Number(2.0 * args[0].as_number(position)?))
                                      });
    let evaluator = Evaluator::with_functions(table);
    let expr = parse(&tokenize("twice(twice(3))").unwrap()).unwrap();
    assert_eq!(evaluator.evaluate(&expr, &Environment::new()), Ok(Value::Number(12.0)));

    let expr = parse(&tokenize("sqrt(4)").unwrap()).unwrap();
    assert!(matches!(evaluator.evaluate(&expr, &Environment::new()),
                     Err(RuntimeError::UnknownFunction { .. })));
}

#[test]
fn mixed_bracket_groups() {
    assert_eq!(value_of("[1 + {2 * (3 - 1)}] * 2"), Value::Number(10.0));
    assert!(matches!(calculate("[1 + 2)", &Environment::new()),
                     Err(Error::Parse(ParseError::UnmatchedBracket(BracketError::Mismatched { .. })))));
}

#[test]
fn deep_nesting_is_an_error_not_a_crash() {
    let env = Environment::new();
    let brackets = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let minuses = "-".repeat(10_000) + "1";
    let chain = vec!["x"; 10_000].join(" * ");
    let powers = vec!["1"; 10_000].join(" ^ ");

    for source in [&brackets, &minuses, &chain, &powers] {
        assert!(matches!(calculate(source, &env),
                         Err(Error::Parse(ParseError::NestingTooDeep { .. }))),
                "expected a nesting error for input of {} bytes",
                source.len());
    }

    assert_eq!(value_of(&format!("{}2{}", "{".repeat(100), "}".repeat(100))), Value::Number(2.0));
    assert_eq!(value_of(&("-".repeat(100) + "3")), Value::Number(3.0));
    assert_eq!(value_of(&vec!["1"; 400].join(" + ")), Value::Number(400.0));
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/session.calc").expect("missing file");
    assert_success(&script);
}
