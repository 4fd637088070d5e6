use std::collections::HashMap;

use crate::error::{EvalError, EvalResult};

/// A two-argument numeric function backing one operator symbol.
pub type OperationHandler = fn(left: f64, right: f64) -> EvalResult<f64>;

/// The operation collaborator boundary consumed by the evaluator.
///
/// `apply` must be synchronous from the evaluator's point of view — it
/// blocks until a result or error is returned — and must have no observable
/// side effect besides computing the value. How an implementation produces
/// the result (direct arithmetic, a dispatch table, a worker behind a
/// channel) is its own concern.
pub trait OperationRegistry {
    /// Applies the operation bound to `symbol` to `left` and `right`.
    ///
    /// # Errors
    /// Fails with `UnknownOperator` for a symbol with no binding, or with
    /// whatever error the bound handler reports.
    fn apply(&self, symbol: char, left: f64, right: f64) -> EvalResult<f64>;
}

/// The standard arithmetic registry.
///
/// Routes each operator symbol to a named handler function through a flat
/// map. Individual bindings can be re-routed with [`bind`](Self::bind)
/// without touching the rest of the pipeline.
///
/// ## Usage
///
/// `StandardOperations` is created once and shared by any number of
/// evaluations; it holds no per-evaluation state.
pub struct StandardOperations {
    /// A mapping from operator symbols to their handler functions.
    handlers: HashMap<char, OperationHandler>,
}

#[allow(clippy::new_without_default)]
impl StandardOperations {
    /// Creates a registry with the standard bindings for `+ - * / ^`.
    #[must_use]
    pub fn new() -> Self {
        let mut handlers: HashMap<char, OperationHandler> = HashMap::new();
        handlers.insert('+', add);
        handlers.insert('-', subtract);
        handlers.insert('*', multiply);
        handlers.insert('/', divide);
        handlers.insert('^', power);

        Self { handlers }
    }

    /// Binds `symbol` to `handler`, replacing any existing binding.
    ///
    /// # Example
    /// ```
    /// use shuntyard::{evaluate_expression, pipeline::registry::StandardOperations};
    ///
    /// let mut registry = StandardOperations::new();
    /// registry.bind('+', |left, right| Ok((left + right) * 10.0));
    ///
    /// assert_eq!(evaluate_expression("1 + 2", &registry).unwrap(), 30.0);
    /// ```
    pub fn bind(&mut self, symbol: char, handler: OperationHandler) {
        self.handlers.insert(symbol, handler);
    }
}

impl OperationRegistry for StandardOperations {
    fn apply(&self, symbol: char, left: f64, right: f64) -> EvalResult<f64> {
        match self.handlers.get(&symbol) {
            Some(handler) => handler(left, right),
            None => Err(EvalError::UnknownOperator { symbol }),
        }
    }
}

fn add(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left + right)
}

fn subtract(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left - right)
}

fn multiply(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left * right)
}

fn divide(left: f64, right: f64) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(left / right)
}

fn power(left: f64, right: f64) -> EvalResult<f64> {
    // An exponent of zero yields one for any base, including zero.
    if right == 0.0 {
        return Ok(1.0);
    }
    Ok(left.powf(right))
}
