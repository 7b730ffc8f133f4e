use diophant::{
    error::{Error, ParseError, RuntimeError},
    get_result,
    interpreter::{
        evaluator::core::Environment,
        parser::core::parse_line,
        reduction::{Reduction, completions},
        value::core::Value,
    },
    session::Session,
};
use pretty_assertions::assert_eq;

fn assert_success(src: &str) {
    if let Err(e) = get_result(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

/// Runs `src` and checks the canonical text of its last value.
fn assert_prints(src: &str, expected: &str) {
    match get_result(src) {
        Ok(Some(value)) => assert_eq!(value.to_string(), expected, "for {src:?}"),
        Ok(None) => panic!("Script {src:?} produced no value"),
        Err(e) => panic!("Script {src:?} failed: {e}"),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match get_result(src) {
        Err(Error::Runtime(e)) => e,
        other => panic!("expected a runtime error for {src:?}, got {other:?}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match get_result(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("expected a parse error for {src:?}, got {other:?}"),
    }
}

#[test]
fn rational_arithmetic_is_exact() {
    assert_prints("1/3 + 1/6", "1/2");
    assert_prints("4/2", "2");
    assert_prints("0 - 3/6", "-1/2");
    assert_prints("2 ^ 100", "1267650600228229401496703205376");
    assert_prints("2 ^ -2", "1/4");
    assert_prints("7 % 3", "1");
    assert_prints("-7 % 3", "-1");
    assert_prints("+5", "5");
    assert_prints("(1/3) * 3", "1");
}

#[test]
fn precedence_ladder() {
    assert_prints("1 + 2 * 3", "7");
    assert_prints("(1 + 2) * 3", "9");
    assert_prints("2 * 3 ^ 2", "36");
    assert_prints("8 / 2 * 2", "2");
    assert_prints("10 - 2 + 3", "11");
    assert_prints("10 + 2 - 3", "9");
    assert_prints("10 - 4 - 3", "3");
    assert_prints("-2 ^ 2", "4");
}

#[test]
fn residuals_print_canonically() {
    assert_prints("a : T\nb : T\na + b * 3", "a + b * 3");
    assert_prints("a : T\nb : T\n(a + b) * 2", "(a + b) * 2");
    assert_prints("a : T\na - (1 - 2)", "a - -1");
    assert_prints("a : T\nb : T\na - (b - 1)", "a - (b - 1)");
    assert_prints("a : T\n1 -> 2 -> a", "1 -> 2 -> a");
    assert_prints("a : T\n(a -> 2) -> 3", "(a -> 2) -> 3");
    assert_prints("p : T\nq : T\np & q | !true => q", "p & q | false => q");
    assert_prints("x : T\nx * 1/3", "x * 1 / 3");
    assert_prints("x : T\nx * (1/3)", "x * (1/3)");
    assert_prints("1 ~ 2", "1 ~ 2");
    assert_prints("~1", "~1");
    assert_prints("*[1, 2]", "*[1, 2]");
}

#[test]
fn residuals_keep_evaluated_operands() {
    assert_prints("x : T\ny := 2 * 3\nx + y", "x + 6");
    assert_prints("f : T\nf (1 + 1)", "f 2");
    assert_prints("f : T\nf 1 2", "f 1 2");
    assert_prints("f : T\ng : T\nf (g 1)", "f (g 1)");
    assert_prints("v : T\n-v", "-v");
    assert_prints("v : T\n[v, 1 + 1]", "[v, 2]");
}

#[test]
fn seeded_constants() {
    assert_prints("null", "null");
    assert_prints("true && !false", "true");
    assert_prints("null == null", "true");
    assert_prints("true != false", "true");
    assert_failure("null := 1");
}

#[test]
fn comparisons() {
    assert_prints("3 > 2", "true");
    assert_prints("2 > 3", "false");
    assert_prints("3 >= 3", "true");
    assert_prints("2 >= 3", "false");
    assert_prints("1/2 < 2/3", "true");
    assert_prints("2 <= 1", "false");
    assert_prints("4/2 == 2", "true");
    assert_prints("1 + 1 == 2 && 3 != 4", "true");

    assert!(matches!(runtime_error("true < false"), RuntimeError::InvalidOperation { .. }));
    assert!(matches!(runtime_error("null == 0"), RuntimeError::InvalidOperation { .. }));
    assert!(matches!(runtime_error("\"a\" == \"a\""), RuntimeError::InvalidOperation { .. }));
}

#[test]
fn comparisons_do_not_chain() {
    assert!(matches!(parse_error("1 < 2 < 3"), ParseError::UnexpectedTrailingTokens { .. }));
}

#[test]
fn boolean_operators_are_eager() {
    assert_eq!(runtime_error("true || x"),
               RuntimeError::UndefinedSymbol { name: "x".to_string() });
    assert_eq!(runtime_error("false && x"),
               RuntimeError::UndefinedSymbol { name: "x".to_string() });
    assert!(matches!(runtime_error("1 && true"), RuntimeError::InvalidOperation { .. }));
}

#[test]
fn mismatched_concrete_operands_are_errors() {
    assert!(matches!(runtime_error("true + 1"), RuntimeError::InvalidOperation { .. }));
    assert!(matches!(runtime_error("\"a\" * 2"), RuntimeError::InvalidOperation { .. }));
    assert!(matches!(runtime_error("-true"), RuntimeError::InvalidOperation { .. }));
    assert!(matches!(runtime_error("!1"), RuntimeError::InvalidOperation { .. }));
    assert!(matches!(runtime_error("1 2"), RuntimeError::InvalidOperation { .. }));
}

#[test]
fn division_by_zero_leaves_environment_unchanged() {
    let mut session = Session::new();
    let before = session.environment().binding_count();

    let error = session.process_line("5 / 0").unwrap_err();
    assert!(matches!(error, Error::Runtime(RuntimeError::DivisionByZero)));
    assert_eq!(session.environment().binding_count(), before);

    assert!(matches!(runtime_error("5 % 0"), RuntimeError::DivisionByZero));
    assert!(matches!(runtime_error("0 ^ -1"), RuntimeError::DivisionByZero));
}

#[test]
fn exponents_are_bounded_integers() {
    assert!(matches!(runtime_error("2 ^ (1/2)"), RuntimeError::ExponentTooLarge { .. }));
    assert!(matches!(runtime_error("2 ^ 65537"), RuntimeError::ExponentTooLarge { .. }));
    assert_prints("1 ^ 65536", "1");
}

#[test]
fn power_results_are_bounded() {
    assert!(matches!(runtime_error("2 ^ 65536 ^ 65536 ^ 65536"),
                     RuntimeError::ExponentTooLarge { .. }));
    assert!(matches!(runtime_error("2 ^ 65536 ^ 65536 ^ 65536 > 0"),
                     RuntimeError::ExponentTooLarge { .. }));

    let mut session = Session::new();
    session.process_line("a := 2 ^ 65536").unwrap();
    let error = session.process_line("b := a ^ 65536").unwrap_err();
    assert!(matches!(error, Error::Runtime(RuntimeError::ExponentTooLarge { .. })));
    assert_eq!(session.process_line("1 + 1").unwrap(), Some(Value::from(2)));

    let mut output = Vec::new();
    Session::new().run("2 ^ 65536 ^ 65536 > 0
1 + 1
".as_bytes(), &mut output)
                  .unwrap();
    let output = String::from_utf8(output).unwrap();
    assert_eq!(output,
               "error on line 1: Exponent 65536 is too large or not an integer.\n\
                result: 2\n");
}

#[test]
fn undefined_symbol_then_binding() {
    let mut session = Session::new();

    let error = session.process_line("x").unwrap_err();
    assert!(matches!(error, Error::Runtime(RuntimeError::UndefinedSymbol { ref name }) if name == "x"));

    assert_eq!(session.process_line("x := 5").unwrap(), Some(Value::from(5)));
    assert_eq!(session.process_line("x").unwrap(), Some(Value::from(5)));
}

#[test]
fn single_assignment() {
    assert_success("x := 1\ny = 2");
    assert_eq!(runtime_error("x := 1\nx := 1"),
               RuntimeError::AlreadyDefined { name: "x".to_string() });
    assert_eq!(runtime_error("x = 1\nx := 2"),
               RuntimeError::AlreadyDefined { name: "x".to_string() });
    assert!(matches!(runtime_error("1 := 2"), RuntimeError::InvalidOperation { .. }));
    assert!(matches!(runtime_error("a + b := 2"), RuntimeError::InvalidOperation { .. }));
}

#[test]
fn bindings_are_lazy() {
    let mut session = Session::new();
    assert!(session.process_line("y := x + 1").is_err());
    assert!(session.environment().lookup("y").is_some());
    session.process_line("x := 2").unwrap();
    assert_eq!(session.process_line("y").unwrap(), Some(Value::from(3)));

    let mut session = Session::new();
    for line in ["a := b", "b := c"] {
        assert!(session.process_line(line).is_err());
    }
    session.process_line("c := 7").unwrap();
    assert_eq!(session.process_line("a").unwrap(), Some(Value::from(7)));
}

#[test]
fn circular_definitions_are_reported() {
    assert_eq!(runtime_error("x := x + 1"),
               RuntimeError::CircularDefinition { name: "x".to_string() });

    let mut session = Session::new();
    session.process_line("a := b").unwrap_err();
    let error = session.process_line("b := a").unwrap_err();
    assert!(matches!(error, Error::Runtime(RuntimeError::CircularDefinition { .. })));

    assert_prints("z := 2\nw := z * z + z\nw", "6");
}

#[test]
fn declarations() {
    let mut session = Session::new();
    assert_eq!(session.process_line("t : Rational").unwrap(), None);
    assert_eq!(session.environment().declaration("t"), Some(&Value::symbol("Rational")));
    assert_eq!(session.process_line("t + 1").unwrap().unwrap().to_string(), "t + 1");

    let error = session.process_line("t : Boolean").unwrap_err();
    assert!(matches!(error, Error::Runtime(RuntimeError::AlreadyDeclared { .. })));

    assert_prints("u : Rational = 1/2\nu * 2", "1");
    assert!(matches!(runtime_error("u := 1\nu : Rational = 2"),
                     RuntimeError::AlreadyDefined { .. }));
}

#[test]
fn lists_objects_and_members() {
    assert_prints("[1 + 1, [], \"s\"]", "[2, [], \"s\"]");
    assert_prints("{a: 1, \"b c\": true}", "{a: 1, \"b c\": true}");
    assert_prints("{}", "{}");
    assert_prints("[10, 20, 30].1", "20");
    assert_prints("{a: [1, {b: 5}]}.a.1.b", "5");
    assert_prints("{a: 1, a: 2}.a", "1");
    assert_prints("o : T\no.x.0", "o.x.0");

    assert_eq!(runtime_error("[1, 2].2"),
               RuntimeError::IndexOutOfBounds { len: 2, found: 2 });
    assert_eq!(runtime_error("{a: 1}.b"),
               RuntimeError::UnknownMember { member: "b".to_string() });
    assert!(matches!(runtime_error("5.0"), RuntimeError::InvalidOperation { .. }));
}

#[test]
fn literals() {
    assert_prints("0x", "0");
    assert_prints("0x0aff", "2815");
    assert_prints("0xFF", "255");
    assert_prints("\"a\\\"b\"", "\"a\\\"b\"");
    assert_failure("0x123");
    assert_failure("007");
}

#[test]
fn application_requires_whitespace() {
    assert!(matches!(parse_error("f(x)"), ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_error("f[1]"), ParseError::UnexpectedTrailingTokens { .. }));
    assert_prints("f : T\nf [1]", "f [1]");
}

#[test]
fn parse_errors() {
    assert!(matches!(parse_error("(1 + 2"), ParseError::ExpectedClosing { delimiter: ')', column: 1 }));
    assert!(matches!(parse_error("[1, 2"), ParseError::ExpectedClosing { delimiter: ']', .. }));
    assert!(matches!(parse_error("1 +"), ParseError::UnexpectedEndOfInput { column: 4 }));
    assert!(matches!(parse_error("1 $ 2"), ParseError::UnexpectedToken { column: 3, .. }));
    assert!(matches!(parse_error("x := 1 := 2"), ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_error("{1: 2}"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("a.b."), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_error("a.99999999999999999999999999"),
                     ParseError::LiteralTooLarge { column: 3 }));
}

#[test]
fn parse_errors_do_not_touch_the_environment() {
    let mut session = Session::new();
    let before = session.environment().binding_count();
    assert!(session.process_line("x := (1").is_err());
    assert_eq!(session.environment().binding_count(), before);
    assert!(session.environment().lookup("x").is_none());
}

#[test]
fn stack_holds_at_most_one_value() {
    let sources = ["1",
                   "1 + 2 * 3 - 4 / 5",
                   "[1, [2, [3]]]",
                   "{a: {b: {c: 1}}}.a.b",
                   "f : T",
                   "g : T = 3",
                   "h := i => j -> k",
                   "!-~*+z"];

    for source in sources {
        let statement = parse_line(source).unwrap();
        let mut environment = Environment::new();
        let mut reduction = Reduction::new(&mut environment);
        for completion in completions(&statement) {
            reduction.apply(completion).unwrap();
        }
        assert!(reduction.depth() <= 1, "{source} left {} values", reduction.depth());
    }
}

#[test]
fn session_recovers_after_errors() {
    let script = "x := 1\n\
                  x / 0\n\
                  y\n\
                  (1 +\n\
                  \n\
                  x + 1\n\
                  t : T\n\
                  t\n";
    let mut output = Vec::new();
    Session::new().run(script.as_bytes(), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output,
               "result: 1\n\
                error on line 2: Division by zero.\n\
                error on line 3: Undefined symbol 'y'.\n\
                error on line 4: Unexpected end of input at column 5.\n\
                result: 2\n\
                result: t\n");
}
