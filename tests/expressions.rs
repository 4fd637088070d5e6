use shuntyard::{EvalError, evaluate, evaluate_expression,
                pipeline::{registry::{OperationRegistry, StandardOperations},
                           tokenizer::tokenize},
                token::Token};

fn assert_value(expression: &str, expected: f64) {
    match evaluate(expression) {
        Ok(value) => assert_eq!(value, expected, "wrong result for '{expression}'"),
        Err(e) => panic!("'{expression}' failed: {e}"),
    }
}

fn assert_failure(expression: &str) -> EvalError {
    match evaluate(expression) {
        Ok(value) => panic!("'{expression}' succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("8 - 5", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("10 / 2", 5.0);
    assert_value("2 ^ 10", 1024.0);
    assert_value("2.5 * 4", 10.0);
}

#[test]
fn precedence_multiplication_binds_tighter() {
    assert_value("2+3*4", 14.0);
    assert_value("3*4+2", 14.0);
    assert_value("2+12/4", 5.0);
}

#[test]
fn left_associativity_of_same_precedence() {
    assert_value("10-4-3", 3.0);
    assert_value("100/5/2", 10.0);
}

#[test]
fn exponentiation_is_left_associative() {
    // (2^3)^2, not 2^(3^2).
    assert_value("2^3^2", 64.0);
}

#[test]
fn zero_power_convention() {
    assert_value("7^0", 1.0);
    assert_value("0^5", 0.0);
    assert_value("0^0", 1.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2+3)*4", 20.0);
    assert_value("((1+1))*3", 6.0);
}

#[test]
fn nested_grouping() {
    let result = evaluate("(2*(3 * 44) - 5) ^ ((4+3-1)*2)").unwrap();

    assert_eq!(result, 259.0_f64.powf(12.0));

    let expected = 9.111_652_934_323_097e28;
    assert!(((result - expected) / expected).abs() < 1e-12,
            "got {result}, expected about {expected}");
    assert!(result.is_finite());
}

#[test]
fn evaluation_is_idempotent() {
    let expression = "(2*(3 * 44) - 5) ^ ((4+3-1)*2)";
    let first = evaluate(expression).unwrap();

    for _ in 0..10 {
        assert_eq!(evaluate(expression).unwrap(), first);
    }
}

#[test]
fn division_by_zero_is_error() {
    let e = assert_failure("5/0");
    assert!(matches!(e, EvalError::DivisionByZero));

    let e = assert_failure("1 / (2 - 2)");
    assert!(matches!(e, EvalError::DivisionByZero));
}

#[test]
fn invalid_character_is_error() {
    let e = assert_failure("3 & 2");
    assert!(matches!(e, EvalError::InvalidCharacter { character: '&', position: 2 }));

    let e = assert_failure("two + 2");
    assert!(matches!(e, EvalError::InvalidCharacter { character: 't', .. }));
}

#[test]
fn unbalanced_parentheses_are_errors() {
    let e = assert_failure("(1+2");
    assert!(matches!(e, EvalError::UnbalancedParentheses));

    let e = assert_failure("1+2)");
    assert!(matches!(e, EvalError::UnbalancedParentheses));

    let e = assert_failure("((1+2)");
    assert!(matches!(e, EvalError::UnbalancedParentheses));
}

#[test]
fn empty_group_is_malformed() {
    let e = assert_failure("5 + ()");
    assert!(matches!(e,
                     EvalError::MalformedExpression { .. } | EvalError::UnbalancedParentheses));
}

#[test]
fn malformed_expressions_are_errors() {
    let e = assert_failure("");
    assert!(matches!(e, EvalError::MalformedExpression { .. }));

    let e = assert_failure("1 2");
    assert!(matches!(e, EvalError::MalformedExpression { .. }));

    let e = assert_failure("1 + + 2");
    assert!(matches!(e, EvalError::MalformedExpression { .. }));

    let e = assert_failure("3 +");
    assert!(matches!(e, EvalError::MalformedExpression { .. }));
}

#[test]
fn malformed_numeric_literal_is_error() {
    let e = assert_failure("1.2.3");
    assert!(matches!(e, EvalError::MalformedExpression { .. }));
}

#[test]
fn stray_decimal_point_is_dropped() {
    assert_eq!(tokenize(".").unwrap(), vec![]);
    assert_value(".5 + .5", 1.0);
}

#[test]
fn tokenizer_preserves_source_order() {
    let tokens = tokenize("(2+3)*4.5").unwrap();

    assert_eq!(tokens,
               vec![Token::LeftParen,
                    Token::Number(2.0),
                    Token::Operator('+'),
                    Token::Number(3.0),
                    Token::RightParen,
                    Token::Operator('*'),
                    Token::Number(4.5)]);
}

#[test]
fn whitespace_is_ignored() {
    assert_value(" 1 +\t2 ", 3.0);
    assert_value("1+2", 3.0);
}

#[test]
fn unknown_symbol_is_rejected_by_the_registry() {
    let registry = StandardOperations::new();
    let e = registry.apply('%', 1.0, 2.0).unwrap_err();
    assert!(matches!(e, EvalError::UnknownOperator { symbol: '%' }));
}

#[test]
fn registry_bindings_can_be_rerouted() {
    let mut registry = StandardOperations::new();
    registry.bind('+', |left, right| Ok(left * 100.0 + right));

    assert_eq!(evaluate_expression("2 + 3", &registry).unwrap(), 203.0);
    // Other bindings are untouched.
    assert_eq!(evaluate_expression("2 * 3", &registry).unwrap(), 6.0);
}
