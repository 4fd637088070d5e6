use crate::{
    error::{EvalError, EvalResult},
    pipeline::operator::OperatorSpec,
    token::Token,
};

/// Converts an infix token sequence into postfix (RPN) order.
///
/// Implements the shunting-yard algorithm: numbers are appended to the
/// output directly, operators wait on a stack until the incoming operator
/// no longer lets them pop, `(` marks a group boundary on the stack, and
/// `)` drains the stack back to its matching `(`.
///
/// # Parameters
/// - `tokens`: The token sequence in source order.
///
/// # Returns
/// An `EvalResult<Vec<Token>>` containing the postfix sequence.
///
/// # Errors
/// Fails with `UnbalancedParentheses` when a `)` has no matching `(` or a
/// `(` survives to the end of input, and with `UnknownOperator` if a
/// symbol outside the operator table slips through the tokenizer.
///
/// # Example
/// ```
/// use shuntyard::{pipeline::converter::to_postfix, token::Token};
///
/// let tokens = vec![Token::Number(2.0),
///                   Token::Operator('+'),
///                   Token::Number(3.0),
///                   Token::Operator('*'),
///                   Token::Number(4.0)];
///
/// let postfix = to_postfix(tokens).unwrap();
/// assert_eq!(postfix,
///            vec![Token::Number(2.0),
///                 Token::Number(3.0),
///                 Token::Number(4.0),
///                 Token::Operator('*'),
///                 Token::Operator('+')]);
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> EvalResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),

            Token::Operator(symbol) => {
                let incoming =
                    OperatorSpec::lookup(symbol).ok_or(EvalError::UnknownOperator { symbol })?;

                while let Some(Token::Operator(top)) = operators.last().copied() {
                    let stacked = OperatorSpec::lookup(top)
                        .ok_or(EvalError::UnknownOperator { symbol: top })?;
                    if !stacked.pops_before(&incoming) {
                        break;
                    }
                    operators.pop();
                    output.push(Token::Operator(top));
                }

                operators.push(token);
            },

            Token::LeftParen => operators.push(token),

            Token::RightParen => loop {
                match operators.pop() {
                    Some(Token::LeftParen) => break,
                    Some(op) => output.push(op),
                    None => return Err(EvalError::UnbalancedParentheses),
                }
            },

            Token::Ignored | Token::StrayDot => {},
        }
    }

    while let Some(token) = operators.pop() {
        if token == Token::LeftParen {
            return Err(EvalError::UnbalancedParentheses);
        }
        output.push(token);
    }

    Ok(output)
}
