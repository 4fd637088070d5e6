//! # shuntyard
//!
//! shuntyard is a small arithmetic expression evaluator written in Rust.
//! It tokenizes an expression string, reorders it into postfix with the
//! shunting-yard algorithm, and reduces the postfix sequence against a
//! registry of operation handlers.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::pipeline::{converter::to_postfix, evaluator, registry::StandardOperations,
                      tokenizer::tokenize};

pub use crate::{error::{EvalError, EvalResult},
                pipeline::registry::OperationRegistry};

/// Provides the unified error type for the whole pipeline.
///
/// This module defines every error that can be raised while tokenizing,
/// converting, or evaluating an expression. Errors carry enough context
/// (offending character, byte position, or operator symbol) for a caller to
/// render a diagnostic message.
///
/// # Responsibilities
/// - Defines the `EvalError` enum covering all failure modes.
/// - Provides the `EvalResult` alias used by every stage.
pub mod error;
/// Orchestrates the three stages of expression evaluation.
///
/// This module ties together the tokenizer, the infix-to-postfix converter,
/// and the postfix evaluator, along with the operator table they share and
/// the operation registry boundary. Data flows strictly left to right
/// through the stages; no stage depends on anything above it.
///
/// # Responsibilities
/// - Declares the tokenizer, converter, evaluator, operator table, and
///   registry modules.
/// - Manages the flow of tokens and errors between stages.
pub mod pipeline;
/// Defines the token data model shared by every stage.
///
/// A token is a minimal but meaningful unit of an expression: a number, an
/// operator symbol, or a parenthesis. Tokens are created by the tokenizer
/// and discarded once the evaluation finishes.
pub mod token;

/// Evaluates an expression string against an operation registry.
///
/// Runs the full pipeline — tokenize, convert to postfix, evaluate —
/// short-circuiting on the first error from any stage. No partial result is
/// surfaced; the caller receives either the final value or the first error
/// encountered. The pipeline holds no state across calls, so re-running the
/// same input always yields the identical result.
///
/// # Errors
/// Returns the first `EvalError` raised by any stage, unmodified.
///
/// # Example
/// ```
/// use shuntyard::{evaluate_expression, pipeline::registry::StandardOperations};
///
/// let registry = StandardOperations::new();
///
/// assert_eq!(evaluate_expression("2 + 3 * 4", &registry).unwrap(), 14.0);
/// assert!(evaluate_expression("5 / 0", &registry).is_err());
/// ```
pub fn evaluate_expression(expression: &str,
                           registry: &impl OperationRegistry)
                           -> EvalResult<f64> {
    let tokens = tokenize(expression)?;
    let postfix = to_postfix(tokens)?;
    evaluator::evaluate(&postfix, registry)
}

/// Evaluates an expression string with the standard arithmetic bindings.
///
/// # Errors
/// Returns the first `EvalError` raised by any stage, unmodified.
///
/// # Example
/// ```
/// use shuntyard::evaluate;
///
/// assert_eq!(evaluate("(1 + 2) * 3").unwrap(), 9.0);
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    evaluate_expression(expression, &StandardOperations::new())
}
