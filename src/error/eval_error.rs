use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum EvalError {
    /// An operator was reached with fewer than two values on the stack.
    #[error("Stack underflow: '{operator}' needs two operands.")]
    StackUnderflow {
        /// The operator that could not be applied.
        operator: char,
    },
    /// Evaluation finished with an empty value stack.
    #[error("Expression did not produce a result.")]
    NoResult,
    /// Evaluation finished with more than one value on the stack, as in
    /// `2 3`.
    #[error("Malformed expression: {residual} values left without an operator to combine them.")]
    MalformedExpression {
        /// Number of values left on the stack.
        residual: usize,
    },
    /// A parenthesis was handed to the evaluator as if it were an operator.
    #[error("Misplaced parenthesis '{paren}' in postfix input.")]
    MisplacedParenthesis {
        /// The parenthesis found.
        paren: char,
    },
}
