use tracing::{debug, warn};

use crate::{error::EvalError, token::Token};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// What to do when evaluation leaves more than one value on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResiduePolicy {
    /// Fail with [`EvalError::MalformedExpression`].
    #[default]
    Reject,
    /// Report the most recently pushed value and discard the rest.
    KeepTop,
}

/// Stores the evaluation settings.
///
/// A `Context` holds no state between calls; every evaluation owns its own
/// value stack, so one context can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context {
    /// Handling of leftover values at the end of evaluation.
    pub residue: ResiduePolicy,
}

impl Context {
    /// Creates a strict context that rejects leftover values.
    #[must_use]
    pub const fn new() -> Self {
        Self { residue: ResiduePolicy::Reject }
    }

    /// Creates a context that silently reports the top of the stack when
    /// values are left over.
    #[must_use]
    pub const fn lenient() -> Self {
        Self { residue: ResiduePolicy::KeepTop }
    }

    /// Evaluates a postfix token sequence with a single value stack.
    ///
    /// Numbers are pushed. An operator pops the right operand, then the left
    /// one, and pushes the result of applying it. Arithmetic follows IEEE 754,
    /// so `1 0 /` yields infinity rather than an error.
    ///
    /// # Parameters
    /// - `postfix`: Tokens in postfix order, usually from
    ///   [`to_postfix`](crate::interpreter::parser::to_postfix).
    ///
    /// # Errors
    /// - [`EvalError::StackUnderflow`] if an operator finds fewer than two
    ///   values.
    /// - [`EvalError::NoResult`] if nothing is left at the end.
    /// - [`EvalError::MalformedExpression`] if several values are left and the
    ///   policy is [`ResiduePolicy::Reject`].
    /// - [`EvalError::MisplacedParenthesis`] if a parenthesis is present.
    ///
    /// # Example
    /// ```
    /// use yardcalc::{
    ///     interpreter::evaluator::Context,
    ///     token::{Symbol, Token},
    /// };
    ///
    /// let postfix = [Token::Number(2.0), Token::Number(3.0), Token::Operator(Symbol::Sub)];
    /// assert_eq!(Context::new().eval_postfix(postfix), Ok(-1.0));
    ///
    /// let residue = [Token::Number(2.0), Token::Number(3.0)];
    /// assert!(Context::new().eval_postfix(residue).is_err());
    /// assert_eq!(Context::lenient().eval_postfix(residue), Ok(3.0));
    /// ```
    pub fn eval_postfix<I>(&self, postfix: I) -> EvalResult<f64>
        where I: IntoIterator<Item = Token>
    {
        let mut values: Vec<f64> = Vec::new();

        for token in postfix {
            match token {
                Token::Number(value) => values.push(value),
                Token::Operator(symbol) if symbol.is_paren() => {
                    return Err(EvalError::MisplacedParenthesis { paren: symbol.as_char() });
                },
                Token::Operator(symbol) => {
                    let (Some(b), Some(a)) = (values.pop(), values.pop()) else {
                        return Err(EvalError::StackUnderflow { operator: symbol.as_char() });
                    };
                    let result = symbol.apply(a, b)
                                       .ok_or(EvalError::MisplacedParenthesis { paren: symbol.as_char() })?;
                    values.push(result);
                },
            }
        }

        self.finish(values)
    }

    /// Extracts the result from the final value stack.
    fn finish(&self, mut values: Vec<f64>) -> EvalResult<f64> {
        let Some(top) = values.pop() else {
            return Err(EvalError::NoResult);
        };

        if values.is_empty() {
            debug!(value = top, "evaluated postfix");
            return Ok(top);
        }

        match self.residue {
            ResiduePolicy::Reject => {
                Err(EvalError::MalformedExpression { residual: values.len() + 1 })
            },
            ResiduePolicy::KeepTop => {
                warn!(discarded = values.len(), value = top, "ignoring leftover values");
                Ok(top)
            },
        }
    }
}
