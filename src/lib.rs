//! # yardcalc
//!
//! yardcalc evaluates arithmetic expressions written in infix notation.
//! Text is scanned into tokens, reordered into postfix form with the
//! shunting-yard algorithm, and reduced to an `f64` on a value stack.
//!
//! Supported are non-negative integer literals, `+ - * / ^` and parentheses.
//! Every operator groups left to right, so `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::CalcResult,
    interpreter::{
        evaluator::Context,
        parser::{ParseResult, to_postfix},
        render::postfix_notation,
        scanner::scan,
    },
    token::Token,
};

/// Provides unified error types for scanning, conversion and evaluation.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (scanner, converter,
///   evaluator).
/// - Wraps them in a single `Error` for the top-level entry points.
pub mod error;
/// Orchestrates the stages of evaluation.
///
/// This module ties together the lexer, scanner, converter, evaluator and
/// renderers. Each stage consumes only the output of the previous one.
pub mod interpreter;
/// Defines the tokens shared by every stage.
///
/// Declares the `Token` and `Symbol` types together with the operator
/// precedence table and the associativity tie-break.
pub mod token;

/// Evaluates an expression with the default, strict [`Context`].
///
/// # Errors
/// Returns an error if the expression contains an invalid character, has
/// unbalanced parentheses, or does not reduce to exactly one value.
///
/// # Examples
/// ```
/// use yardcalc::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
/// assert_eq!(evaluate("2 ^ 3 ^ 2").unwrap(), 64.0);
///
/// // Unknown character.
/// assert!(evaluate("2 + a").is_err());
/// ```
pub fn evaluate(source: &str) -> CalcResult<f64> {
    evaluate_with(source, &Context::new())
}

/// Evaluates an expression with the given [`Context`].
///
/// Each call owns its own tokens and stacks, so calls are independent and
/// may run concurrently.
///
/// # Errors
/// Same as [`evaluate`], except that leftover values are only an error when
/// the context rejects them.
///
/// # Examples
/// ```
/// use yardcalc::{evaluate_with, interpreter::evaluator::Context};
///
/// assert!(evaluate_with("2 3", &Context::new()).is_err());
/// assert_eq!(evaluate_with("2 3", &Context::lenient()).unwrap(), 3.0);
/// ```
pub fn evaluate_with(source: &str, context: &Context) -> CalcResult<f64> {
    let postfix = compile(source)?;
    let value = context.eval_postfix(postfix)?;
    Ok(value)
}

/// Scans and converts an expression, returning its postfix tokens.
///
/// # Errors
/// Returns a `ParseError` for invalid characters or unbalanced parentheses.
///
/// # Examples
/// ```
/// use yardcalc::{compile, interpreter::render::postfix_notation};
///
/// let postfix = compile("10 / (2 + 3)").unwrap();
/// assert_eq!(postfix_notation(&postfix), "10 2 3 + /");
/// ```
pub fn compile(source: &str) -> ParseResult<Vec<Token>> {
    let tokens = scan(source)?;
    let postfix = to_postfix(tokens)?;
    debug!(source, postfix = %postfix_notation(&postfix), "compiled expression");
    Ok(postfix)
}
