use crate::{
    error::{EvalError, EvalResult},
    pipeline::registry::OperationRegistry,
    token::Token,
};

/// Evaluates a postfix token sequence to a single value.
///
/// Walks the sequence with a value stack: numbers are pushed, and every
/// operator pops its right operand, then its left operand, and pushes the
/// registry's result. Operators are applied strictly in postfix order, one
/// at a time; the stack left by each application feeds the next.
///
/// # Parameters
/// - `postfix`: The token sequence in postfix order.
/// - `registry`: The operation registry that computes each application.
///
/// # Returns
/// An `EvalResult<f64>` containing the single remaining value.
///
/// # Errors
/// Fails with `MalformedExpression` when an operator finds fewer than two
/// operands or when anything other than exactly one value remains at the
/// end, and propagates registry errors unmodified.
///
/// # Example
/// ```
/// use shuntyard::{
///     pipeline::{evaluator::evaluate, registry::StandardOperations},
///     token::Token,
/// };
///
/// // 2 3 4 * + is the postfix form of 2 + 3 * 4.
/// let postfix = vec![Token::Number(2.0),
///                    Token::Number(3.0),
///                    Token::Number(4.0),
///                    Token::Operator('*'),
///                    Token::Operator('+')];
///
/// let result = evaluate(&postfix, &StandardOperations::new()).unwrap();
/// assert_eq!(result, 14.0);
/// ```
pub fn evaluate(postfix: &[Token], registry: &impl OperationRegistry) -> EvalResult<f64> {
    let mut values: Vec<f64> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(value) => values.push(*value),

            Token::Operator(symbol) => {
                let Some(right) = values.pop() else {
                    return Err(missing_operand(*symbol));
                };
                let Some(left) = values.pop() else {
                    return Err(missing_operand(*symbol));
                };
                values.push(registry.apply(*symbol, left, right)?);
            },

            Token::LeftParen | Token::RightParen | Token::Ignored | Token::StrayDot => {
                return Err(EvalError::MalformedExpression { details:
                               format!("unexpected token {token:?} in postfix sequence"), });
            },
        }
    }

    match values.as_slice() {
        [value] => Ok(*value),
        [] => Err(EvalError::MalformedExpression { details:
                      "expression produced no value".to_string(), }),
        _ => {
            Err(EvalError::MalformedExpression { details:
                    format!("{} operands left without an operator", values.len()), })
        },
    }
}

fn missing_operand(symbol: char) -> EvalError {
    EvalError::MalformedExpression { details: format!("operator '{symbol}' is missing an operand"), }
}
