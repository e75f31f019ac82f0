use logos::Logos;

use crate::token::Symbol;

/// Represents a single classified character of the source input.
///
/// The lexer never groups characters: every lexeme covers exactly one
/// character, so numbers are assembled by the scanner's state machine rather
/// than by a regular expression. Anything not listed here is a lexing error.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    /// A decimal digit, carrying its value `0..=9`.
    #[regex(r"[0-9]", parse_digit)]
    Digit(u8),
    /// One of `+ - * / ^ ( )`.
    #[regex(r"[+\-*/^()]", parse_symbol)]
    Symbol(Symbol),
    /// Any Unicode whitespace character, as classified by `char::is_whitespace`.
    #[regex(r"\s")]
    Whitespace,
}

/// Parses the value of a single digit from the current lexeme slice.
///
/// # Returns
/// - `Some(u8)`: The digit value.
/// - `None`: If the slice is empty.
fn parse_digit(lex: &logos::Lexer<Lexeme>) -> Option<u8> {
    lex.slice().bytes().next().map(|b| b - b'0')
}

/// Maps the current lexeme slice to its [`Symbol`].
fn parse_symbol(lex: &logos::Lexer<Lexeme>) -> Option<Symbol> {
    lex.slice().chars().next().and_then(Symbol::from_char)
}
