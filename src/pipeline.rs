/// The converter module reorders infix tokens into postfix.
///
/// The converter implements Dijkstra's shunting-yard algorithm: numbers
/// flow straight to the output, operators wait on a stack until an operator
/// of lower precedence arrives, and parentheses delimit groups. The output
/// is a postfix (RPN) token sequence that needs no precedence lookup to
/// evaluate.
///
/// # Responsibilities
/// - Resolves operator precedence and associativity against the operator
///   table.
/// - Detects unmatched `)` and unclosed `(`.
pub mod converter;
/// The evaluator module reduces a postfix sequence to a single value.
///
/// The evaluator walks the postfix token sequence with a value stack,
/// dispatching every operator to the operation registry and pushing the
/// result back. This is the last stage of the pipeline.
///
/// # Responsibilities
/// - Maintains the value stack for one evaluation.
/// - Routes each operator application through the registry.
/// - Detects operand underflow and leftover operands.
pub mod evaluator;
/// The operator module defines the fixed operator table.
///
/// Each supported operator symbol maps to an `OperatorSpec` carrying its
/// precedence and associativity. The table is a process-wide compile-time
/// constant; adding an operator means adding one table row.
pub mod operator;
/// The registry module defines the operation collaborator boundary.
///
/// The evaluator never computes arithmetic itself; it hands every operator
/// application to an `OperationRegistry`. The default registry routes each
/// symbol to a named handler function through a flat map, and individual
/// bindings can be swapped out without touching the pipeline.
///
/// # Responsibilities
/// - Declares the `OperationRegistry` contract consumed by the evaluator.
/// - Provides the standard arithmetic handlers, including the division and
///   power edge cases.
pub mod registry;
/// The tokenizer module turns a raw string into tokens.
///
/// The tokenizer scans the input left to right, accumulating numeric
/// literals, skipping whitespace, and classifying operator and parenthesis
/// characters. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Produces the ordered token sequence for one expression string.
/// - Rejects characters outside the expression alphabet with their byte
///   position.
/// - Rejects malformed numeric literals at literal-parse time.
pub mod tokenizer;
