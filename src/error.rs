/// Scanning and conversion errors.
///
/// Defines the errors raised while turning source text into a postfix token
/// sequence: characters the scanner does not recognize and parentheses the
/// converter cannot match.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while reducing a postfix token sequence to a
/// single value, such as an operator without enough operands or input that
/// leaves several values behind.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// Any failure of a complete evaluation, from text to value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The expression could not be scanned or converted.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The postfix sequence could not be reduced to a value.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Result type of the top-level entry points.
pub type CalcResult<T> = Result<T, Error>;
