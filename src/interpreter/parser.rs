use tracing::debug;

use crate::{
    error::ParseError,
    token::{Symbol, Token},
};

/// Result type used by the scanner and the converter.
pub type ParseResult<T> = Result<T, ParseError>;

/// Reorders an infix token sequence into postfix order (shunting-yard).
///
/// Numbers go straight to the output. Operators wait on a stack until an
/// operator of lower rank arrives, a `)` closes their group, or the input
/// ends. On equal rank the operator already on the stack is output first, so
/// `2 ^ 3 ^ 2` becomes `2 3 ^ 2 ^`.
///
/// Operand and operator counts are not checked here; a sequence such as
/// `+ 2` converts fine and fails later, during evaluation.
///
/// # Parameters
/// - `tokens`: Infix tokens, usually the output of
///   [`scan`](crate::interpreter::scanner::scan).
///
/// # Errors
/// Returns [`ParseError::UnbalancedParentheses`] when a `)` has no matching
/// `(` or a `(` is never closed.
///
/// # Example
/// ```
/// use yardcalc::{
///     interpreter::{parser::to_postfix, render::postfix_notation, scanner::scan},
/// };
///
/// let postfix = to_postfix(scan("2 + 3 * 4").unwrap()).unwrap();
/// assert_eq!(postfix_notation(&postfix), "2 3 4 * +");
///
/// let postfix = to_postfix(scan("(2 + 3) * 4").unwrap()).unwrap();
/// assert_eq!(postfix_notation(&postfix), "2 3 + 4 *");
/// ```
pub fn to_postfix<I>(tokens: I) -> ParseResult<Vec<Token>>
    where I: IntoIterator<Item = Token>
{
    let mut operators: Vec<Symbol> = Vec::new();
    let mut output = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Operator(Symbol::LParen) => operators.push(Symbol::LParen),
            Token::Operator(Symbol::RParen) => loop {
                match operators.pop() {
                    Some(Symbol::LParen) => break,
                    Some(op) => output.push(Token::Operator(op)),
                    None => return Err(ParseError::UnbalancedParentheses { paren: ')' }),
                }
            },
            Token::Operator(op) => {
                while let Some(&top) = operators.last()
                      && top.yields_to(op)
                {
                    operators.pop();
                    output.push(Token::Operator(top));
                }
                operators.push(op);
            },
        }
    }

    while let Some(op) = operators.pop() {
        if op == Symbol::LParen {
            return Err(ParseError::UnbalancedParentheses { paren: '(' });
        }
        output.push(Token::Operator(op));
    }

    debug!(len = output.len(), "converted to postfix");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::{render::postfix_notation, scanner::scan};

    fn postfix(source: &str) -> ParseResult<String> {
        let tokens = scan(source)?;
        to_postfix(tokens).map(|postfix| postfix_notation(&postfix))
    }

    #[test]
    fn single_number_passes_through() {
        assert_eq!(postfix("42").unwrap(), "42");
    }

    #[test]
    fn higher_rank_binds_first() {
        assert_eq!(postfix("2+3*4").unwrap(), "2 3 4 * +");
        assert_eq!(postfix("2*3+4").unwrap(), "2 3 * 4 +");
        assert_eq!(postfix("2*3^4").unwrap(), "2 3 4 ^ *");
    }

    #[test]
    fn equal_rank_is_left_associative() {
        assert_eq!(postfix("2-3-4").unwrap(), "2 3 - 4 -");
        assert_eq!(postfix("8/4*2").unwrap(), "8 4 / 2 *");
        assert_eq!(postfix("2^3^2").unwrap(), "2 3 ^ 2 ^");
    }

    #[test]
    fn parentheses_group_and_disappear() {
        assert_eq!(postfix("10/(2+3)").unwrap(), "10 2 3 + /");
        assert_eq!(postfix("((1))").unwrap(), "1");
        assert_eq!(postfix("2^(3^2)").unwrap(), "2 3 2 ^ ^");
    }

    #[test]
    fn unmatched_close_paren_is_an_error() {
        assert_eq!(postfix("2+3)"),
                   Err(ParseError::UnbalancedParentheses { paren: ')' }));
        assert_eq!(postfix(")"), Err(ParseError::UnbalancedParentheses { paren: ')' }));
    }

    #[test]
    fn unclosed_open_paren_is_an_error() {
        assert_eq!(postfix("(2+3"),
                   Err(ParseError::UnbalancedParentheses { paren: '(' }));
        assert_eq!(postfix("2*(3+(4"),
                   Err(ParseError::UnbalancedParentheses { paren: '(' }));
    }

    #[test]
    fn operand_counts_are_not_checked() {
        assert_eq!(postfix("+2").unwrap(), "2 +");
        assert_eq!(postfix("2 3").unwrap(), "2 3");
    }
}
