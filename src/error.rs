/// Result type used throughout the pipeline.
///
/// Every stage returns either a value of type `T` or the first `EvalError`
/// it encountered. No stage catches or reinterprets another stage's error.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Each variant is a local condition detected during a single pipeline run.
/// None are retried; a malformed expression is a permanent failure for that
/// input.
pub enum EvalError {
    /// A character outside the expression alphabet appeared in the input.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The byte position of the character in the input string.
        position:  usize,
    },
    /// A `)` had no matching `(`, or a `(` was never closed.
    UnbalancedParentheses,
    /// The operand/operator structure of the expression is inconsistent.
    MalformedExpression {
        /// Details about what was missing or left over.
        details: String,
    },
    /// The right-hand operand of `/` was exactly zero.
    DivisionByZero,
    /// A symbol outside the fixed operator set reached the operator table
    /// or the operation registry.
    UnknownOperator {
        /// The unrecognized symbol.
        symbol: char,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Invalid character '{character}' at position {position}.")
            },

            Self::UnbalancedParentheses => {
                write!(f, "Unbalanced parentheses in expression.")
            },

            Self::MalformedExpression { details } => {
                write!(f, "Malformed expression: {details}.")
            },

            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::UnknownOperator { symbol } => {
                write!(f, "Unknown operator '{symbol}'.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
