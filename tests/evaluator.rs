use scicalc::{
    diagnostics::DiagnosticKind,
    evaluator::{Evaluation, Evaluator},
    memory::MEMORY_CAPACITY,
    repl::{Command, expand_constant_aliases},
};

fn eval(source: &str) -> Evaluation {
    Evaluator::new().evaluate(source)
}

fn eval_value(source: &str) -> f64 {
    let evaluation = eval(source);
    assert!(
        evaluation.is_ok(),
        "expected clean evaluation of {source:?}, got {:?}",
        evaluation.diagnostics
    );
    evaluation.value
}

fn eval_diagnostic(source: &str) -> (f64, DiagnosticKind, String) {
    let evaluation = eval(source);
    let diagnostic = evaluation
        .diagnostics
        .first()
        .unwrap_or_else(|| panic!("expected diagnostic for {source:?}"))
        .clone();
    (evaluation.value, diagnostic.kind, diagnostic.message)
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(eval_value("2+3*4"), 14.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(eval_value("(2+3)*4"), 20.0);
}

#[test]
fn exponentiation_chain_binds_right() {
    assert_eq!(eval_value("2^3^2"), 512.0);
}

#[test]
fn division_chain_binds_right() {
    assert_eq!(eval_value("8/4/2"), 4.0);
}

#[test]
fn subtraction_accumulates_left_to_right() {
    assert_eq!(eval_value("10-3-2"), 5.0);
}

#[test]
fn unary_functions_evaluate() {
    assert_eq!(eval_value("sqrt(16)"), 4.0);
    assert_eq!(eval_value("log(1)"), 0.0);
    assert_eq!(eval_value("abs(-5)"), 5.0);
}

#[test]
fn log10_resolves_despite_digits_in_the_name() {
    assert_eq!(eval_value("log10(100)"), 2.0);
}

#[test]
fn constants_resolve_without_arguments() {
    assert!((eval_value("PI") - std::f64::consts::PI).abs() < 1e-12);
    assert!((eval_value("E") - std::f64::consts::E).abs() < 1e-12);
    assert!((eval_value("cos(PI)") + 1.0).abs() < 1e-12);
}

#[test]
fn function_argument_is_a_full_term() {
    assert_eq!(eval_value("sqrt(9+7)"), 4.0);
    assert_eq!(eval_value("abs(2-7)"), 5.0);
}

#[test]
fn division_by_zero_reports_and_poisons() {
    let (value, kind, message) = eval_diagnostic("5/0");
    assert!(value.is_nan());
    assert_eq!(kind, DiagnosticKind::DivisionByZero);
    assert!(message.contains("Division by zero"), "{message}");
}

#[test]
fn division_by_computed_zero_reports() {
    let (value, kind, _) = eval_diagnostic("5/(1-1)");
    assert!(value.is_nan());
    assert_eq!(kind, DiagnosticKind::DivisionByZero);
}

#[test]
fn unknown_function_reports_and_poisons() {
    let (value, kind, message) = eval_diagnostic("foo(1)");
    assert!(value.is_nan());
    assert_eq!(kind, DiagnosticKind::UnknownFunction);
    assert!(message.contains("Invalid function"), "{message}");
}

#[test]
fn nan_poisons_the_enclosing_term() {
    let evaluation = eval("1+foo(1)");
    assert!(evaluation.value.is_nan());
    assert!(!evaluation.is_ok());
}

#[test]
fn math_domain_errors_propagate_without_diagnostics() {
    let evaluation = eval("sqrt(0-1)");
    assert!(evaluation.is_ok());
    assert!(evaluation.value.is_nan());

    let evaluation = eval("log(0)");
    assert!(evaluation.is_ok());
    assert!(evaluation.value.is_infinite());
}

#[test]
fn whitespace_is_allowed_around_operators() {
    assert_eq!(eval_value("1 + 2 * 3"), 7.0);
    assert_eq!(eval_value(" sqrt( 16 ) "), 4.0);
    assert_eq!(eval_value("2 ^ 3 ^ 2"), 512.0);
}

#[test]
fn missing_closing_paren_is_tolerated() {
    assert_eq!(eval_value("(2+3"), 5.0);
    assert_eq!(eval_value("sqrt(16"), 4.0);
}

#[test]
fn trailing_input_is_ignored() {
    assert_eq!(eval_value("2+3)"), 5.0);
    assert_eq!(eval_value("7 then some"), 7.0);
}

#[test]
fn scientific_notation_parses() {
    assert_eq!(eval_value("1e3"), 1000.0);
    assert_eq!(eval_value("2.5e-1"), 0.25);
    // An exponent marker without digits stays unconsumed.
    assert_eq!(eval_value("1e"), 1.0);
}

#[test]
fn unary_minus_is_absorbed_by_the_literal() {
    assert_eq!(eval_value("-5+3"), -2.0);
    assert_eq!(eval_value("2*-3"), -6.0);
}

#[test]
fn memory_stores_and_recalls_in_insertion_order() {
    let mut evaluator = Evaluator::new();
    evaluator.store(5.0).expect("first slot");
    evaluator.store(6.0).expect("second slot");
    assert_eq!(evaluator.recall(0).expect("slot 0"), 5.0);
    assert_eq!(evaluator.recall(1).expect("slot 1"), 6.0);
}

#[test]
fn full_memory_rejects_an_eleventh_store() {
    let mut evaluator = Evaluator::new();
    for slot in 0..MEMORY_CAPACITY {
        evaluator.store(slot as f64).expect("slot fits");
    }
    let err = evaluator.store(99.0).expect_err("bank is full");
    assert_eq!(err.kind, DiagnosticKind::MemoryFull);
    assert!(err.message.contains("Memory is full"), "{}", err.message);
    assert_eq!(evaluator.memory().len(), MEMORY_CAPACITY);
    assert_eq!(evaluator.recall(9).expect("last slot"), 9.0);
}

#[test]
fn clear_resets_and_is_idempotent() {
    let mut evaluator = Evaluator::new();
    evaluator.store(1.0).expect("slot fits");
    evaluator.clear_memory();
    let err = evaluator.recall(0).expect_err("bank is empty");
    assert_eq!(err.kind, DiagnosticKind::InvalidMemoryIndex);
    evaluator.clear_memory();
    assert!(evaluator.memory().is_empty());
}

#[test]
fn negative_and_out_of_range_indices_are_invalid() {
    let mut evaluator = Evaluator::new();
    evaluator.store(1.0).expect("slot fits");
    assert!(evaluator.recall(-1).is_err());
    assert!(evaluator.recall(1).is_err());
}

#[test]
fn arithmetic_evaluation_ignores_memory_state() {
    let mut evaluator = Evaluator::new();
    let before = evaluator.evaluate("2+3*4").value;
    evaluator.store(41.0).expect("slot fits");
    let after = evaluator.evaluate("2+3*4").value;
    assert_eq!(before, 14.0);
    assert_eq!(after, 14.0);
}

#[test]
fn registry_lists_names_in_insertion_order() {
    let evaluator = Evaluator::new();
    let names: Vec<_> = evaluator.registry().names().collect();
    assert_eq!(names.first(), Some(&"sin"));
    assert!(names.contains(&"log10"));
    assert_eq!(names.last(), Some(&"E"));
}

#[test]
fn alias_pass_rewrites_whole_identifiers_only() {
    assert_eq!(expand_constant_aliases("2*pi"), "2*PI");
    assert_eq!(expand_constant_aliases("e+e"), "E+E");
    assert_eq!(expand_constant_aliases("exp(1)"), "exp(1)");
    assert_eq!(expand_constant_aliases("1e3"), "1e3");
    assert_eq!(expand_constant_aliases("pi*e"), "PI*E");
}

#[test]
fn aliased_constants_evaluate() {
    let evaluator = Evaluator::new();
    let expression = expand_constant_aliases("2*pi");
    let value = evaluator.evaluate(&expression).value;
    assert!((value - 2.0 * std::f64::consts::PI).abs() < 1e-12);
}

#[test]
fn command_dispatch_recognizes_literals() {
    assert_eq!(Command::parse("exit"), Command::Exit);
    assert_eq!(Command::parse("help"), Command::Help);
    assert_eq!(Command::parse("clear"), Command::Clear);
    assert_eq!(Command::parse("store(5+1)"), Command::Store("5+1)"));
    assert_eq!(Command::parse("recall(3)"), Command::Recall(3));
    assert_eq!(Command::parse("recall(junk)"), Command::Recall(0));
    assert_eq!(Command::parse("2+2"), Command::Evaluate("2+2"));
}
