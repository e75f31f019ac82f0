use logos::Logos;
use tracing::{debug, trace};

use crate::{
    error::ParseError,
    interpreter::{lexer::Lexeme, parser::ParseResult},
    token::Token,
};

/// State of the scanner between two lexemes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScanState {
    /// Not inside a literal. Whitespace is skipped here.
    Initial,
    /// Accumulating an integer literal; carries the value so far.
    InNumber(f64),
}

/// The outcome of feeding one lexeme to the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// The state to continue in.
    pub next:     ScanState,
    /// A token completed by this step, if any.
    pub emit:     Option<Token>,
    /// Whether the lexeme was used up. When `false` the same lexeme must be
    /// fed again in `next`.
    pub consumed: bool,
}

/// Computes a single step of the scanner.
///
/// A non-digit ends a literal without being consumed: the literal is emitted
/// and the lexeme is then reprocessed from [`ScanState::Initial`].
///
/// # Example
/// ```
/// use yardcalc::{
///     interpreter::{
///         lexer::Lexeme,
///         scanner::{ScanState, transition},
///     },
///     token::{Symbol, Token},
/// };
///
/// let step = transition(ScanState::InNumber(4.0), Lexeme::Digit(2));
/// assert_eq!(step.next, ScanState::InNumber(42.0));
///
/// let step = transition(ScanState::InNumber(42.0), Lexeme::Symbol(Symbol::Add));
/// assert_eq!(step.emit, Some(Token::Number(42.0)));
/// assert_eq!(step.next, ScanState::Initial);
/// assert!(!step.consumed);
/// ```
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn transition(state: ScanState, lexeme: Lexeme) -> Transition {
    match (state, lexeme) {
        (ScanState::Initial, Lexeme::Whitespace) => Transition { next:     ScanState::Initial,
                                                                 emit:     None,
                                                                 consumed: true, },
        (ScanState::Initial, Lexeme::Digit(digit)) => {
            Transition { next:     ScanState::InNumber(f64::from(digit)),
                         emit:     None,
                         consumed: true, }
        },
        (ScanState::Initial, Lexeme::Symbol(symbol)) => {
            Transition { next:     ScanState::Initial,
                         emit:     Some(Token::Operator(symbol)),
                         consumed: true, }
        },
        (ScanState::InNumber(value), Lexeme::Digit(digit)) => {
            Transition { next:     ScanState::InNumber(value * 10.0 + f64::from(digit)),
                         emit:     None,
                         consumed: true, }
        },
        (ScanState::InNumber(value), _) => Transition { next:     ScanState::Initial,
                                                        emit:     Some(Token::Number(value)),
                                                        consumed: false, },
    }
}

/// Scans an expression into its token sequence.
///
/// Characters are read left to right exactly once. A literal still being
/// accumulated at the end of input is flushed before returning.
///
/// # Errors
/// Returns [`ParseError::InvalidCharacter`] for the first character that is
/// not a digit, whitespace or one of `+ - * / ^ ( )`.
///
/// # Example
/// ```
/// use yardcalc::{
///     interpreter::scanner::scan,
///     token::{Symbol, Token},
/// };
///
/// let tokens = scan("12 * 3").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(12.0), Token::Operator(Symbol::Mul), Token::Number(3.0)]);
///
/// assert!(scan("2 + a").is_err());
/// ```
pub fn scan(source: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut state = ScanState::Initial;

    for (lexeme, span) in Lexeme::lexer(source).spanned() {
        let Ok(lexeme) = lexeme else {
            return Err(invalid_character(source, span.start));
        };

        loop {
            let step = transition(state, lexeme);
            trace!(?state, ?lexeme, next = ?step.next, "scanner transition");
            if let Some(token) = step.emit {
                tokens.push(token);
            }
            state = step.next;
            if step.consumed {
                break;
            }
        }
    }

    if let ScanState::InNumber(value) = state {
        tokens.push(Token::Number(value));
    }

    debug!(count = tokens.len(), "scanned expression");
    Ok(tokens)
}

fn invalid_character(source: &str, offset: usize) -> ParseError {
    let character = source.get(offset..)
                          .and_then(|rest| rest.chars().next())
                          .unwrap_or(char::REPLACEMENT_CHARACTER);
    ParseError::InvalidCharacter { character, offset }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::token::Symbol;

    #[test]
    fn flushes_trailing_number() {
        assert_eq!(scan("42").unwrap(), vec![Token::Number(42.0)]);
        assert_eq!(scan("7 ").unwrap(), vec![Token::Number(7.0)]);
    }

    #[test]
    fn whitespace_separates_literals() {
        assert_eq!(scan("2 3").unwrap(), vec![Token::Number(2.0), Token::Number(3.0)]);
    }

    #[test]
    fn empty_and_blank_input_yield_no_tokens() {
        assert!(scan("").unwrap().is_empty());
        assert!(scan(" \t ").unwrap().is_empty());
    }

    #[test]
    fn terminating_symbol_is_reprocessed() {
        assert_eq!(scan("(10)").unwrap(),
                   vec![Token::Operator(Symbol::LParen),
                        Token::Number(10.0),
                        Token::Operator(Symbol::RParen)]);
    }

    #[test]
    fn reports_offending_character_and_offset() {
        assert_eq!(scan("2+a"),
                   Err(ParseError::InvalidCharacter { character: 'a',
                                                      offset:    2, }));
        assert_eq!(scan("1.5"),
                   Err(ParseError::InvalidCharacter { character: '.',
                                                      offset:    1, }));
    }

    #[test]
    fn non_ascii_whitespace_separates_literals() {
        assert_eq!(scan("2\u{a0}+\u{b}3").unwrap(),
                   vec![Token::Number(2.0), Token::Operator(Symbol::Add), Token::Number(3.0)]);
    }

    #[test]
    fn whitespace_in_initial_is_consumed() {
        let step = transition(ScanState::Initial, Lexeme::Whitespace);
        assert_eq!(step,
                   Transition { next:     ScanState::Initial,
                                emit:     None,
                                consumed: true, });
    }

    #[test]
    fn whitespace_ends_a_literal_without_being_consumed() {
        let step = transition(ScanState::InNumber(5.0), Lexeme::Whitespace);
        assert_eq!(step.emit, Some(Token::Number(5.0)));
        assert!(!step.consumed);
    }

    #[test]
    fn rescanning_is_deterministic() {
        let source = "(1 + 22) * 333 ^ 4 / 5 - 6";
        assert_eq!(scan(source), scan(source));
    }
}
