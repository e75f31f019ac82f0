/// The evaluator module reduces postfix tokens to a value.
///
/// The evaluator walks a postfix token sequence with a single value stack,
/// applying each operator to the two most recent values. It is the last stage
/// of evaluation.
///
/// # Responsibilities
/// - Applies the binary operators with IEEE 754 semantics.
/// - Reports missing operands, empty results and leftover values.
/// - Holds the `Context` that decides how leftover values are treated.
pub mod evaluator;
/// The lexer module classifies source characters.
///
/// The lexer reads the raw source text and classifies every character as a
/// digit, an operator symbol or whitespace. Anything else is reported as an
/// error by the scanner.
pub mod lexer;
/// The parser module converts infix tokens to postfix order.
///
/// Implements the shunting-yard algorithm on top of the precedence table in
/// [`crate::token`], and reports unbalanced parentheses.
pub mod parser;
/// Textual renderings of token sequences.
///
/// Provides postfix notation for display and a fully-parenthesized infix form
/// that makes the converter's grouping visible.
pub mod render;
/// The scanner module turns text into tokens.
///
/// A two-state machine (`Initial`, `InNumber`) consumes lexemes one at a time,
/// accumulating integer literals and emitting operator tokens.
///
/// # Responsibilities
/// - Assembles multi-digit literals with single-lexeme lookahead.
/// - Skips whitespace between tokens.
/// - Reports the first invalid character together with its offset.
pub mod scanner;
