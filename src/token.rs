use logos::Logos;

/// Represents one lexical unit of an arithmetic expression.
///
/// Tokens are produced by the tokenizer, reordered by the converter, and
/// consumed by the evaluator. They are immutable once created; no token
/// survives past a single pipeline run.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal such as `42`, `3.14` or `.5`.
    ///
    /// The literal may contain at most one decimal point; a run of digits
    /// and dots that does not parse as a number (like `1.2.3`) is rejected
    /// at literal-parse time.
    #[regex(r"[0-9.]*[0-9][0-9.]*", parse_number)]
    #[regex(r"\.\.+", parse_number)]
    Number(f64),
    /// One of the binary operator symbols `+ - * / ^`.
    #[regex(r"[+\-*/^]", operator_symbol)]
    Operator(char),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,

    /// Whitespace between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
    /// A decimal point with no digits around it. The degenerate literal is
    /// dropped rather than flushed as a number.
    #[token(".", logos::skip)]
    StrayDot,
}

/// Parses a numeric literal from the current token slice.
///
/// Returns `None` when the slice is not a valid number (for example a
/// literal with two decimal points), which surfaces as a lexing error at
/// the slice's span.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Extracts the operator symbol from the current token slice.
fn operator_symbol(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}
