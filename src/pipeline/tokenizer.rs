use logos::Logos;

use crate::{
    error::{EvalError, EvalResult},
    token::Token,
};

/// Tokenizes an expression string.
///
/// Scans the input left to right and returns the ordered token sequence.
/// Whitespace is skipped. Any character outside the expression alphabet
/// fails with `InvalidCharacter`, carrying the character and its byte
/// position; a run of digits and dots that does not parse as a number
/// fails with `MalformedExpression`.
///
/// # Parameters
/// - `expression`: The raw expression string.
///
/// # Returns
/// An `EvalResult<Vec<Token>>` containing the token sequence.
///
/// # Example
/// ```
/// use shuntyard::{pipeline::tokenizer::tokenize, token::Token};
///
/// let tokens = tokenize("1 + 2.5").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(1.0), Token::Operator('+'), Token::Number(2.5)]);
///
/// assert!(tokenize("3 & 2").is_err());
/// ```
pub fn tokenize(expression: &str) -> EvalResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expression);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => return Err(classify_failure(lexer.slice(), lexer.span().start)),
        }
    }

    Ok(tokens)
}

/// Classifies a lexing failure into the pipeline error taxonomy.
///
/// A failing slice made of digits and dots is a numeric literal that did
/// not parse; anything else is a character outside the alphabet.
fn classify_failure(slice: &str, position: usize) -> EvalError {
    let is_literal = !slice.is_empty() && slice.chars().all(|c| c.is_ascii_digit() || c == '.');

    if is_literal {
        EvalError::MalformedExpression { details: format!("invalid numeric literal '{slice}'"), }
    } else {
        EvalError::InvalidCharacter { character: slice.chars().next().unwrap_or('\0'),
                                      position }
    }
}
