use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during scanning or conversion.
pub enum ParseError {
    /// A character that is neither a digit, whitespace nor one of
    /// `+ - * / ^ ( )`.
    #[error("Invalid character '{character}' at offset {offset}.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the expression.
        offset:    usize,
    },
    /// A parenthesis without a partner. `paren` is `)` when a closing mark
    /// found no opening one, and `(` when an opening mark was never closed.
    #[error("Unbalanced parentheses: unmatched '{paren}'.")]
    UnbalancedParentheses {
        /// The unmatched parenthesis.
        paren: char,
    },
}
