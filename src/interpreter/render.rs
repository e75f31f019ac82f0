use crate::{error::EvalError, interpreter::evaluator::EvalResult, token::Token};

/// Renders a token sequence as space-separated text, e.g. `2 3 4 * +`.
#[must_use]
pub fn postfix_notation(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}

/// Rebuilds a fully-parenthesized infix expression from postfix tokens.
///
/// Every operator application gets its own pair of parentheses, making the
/// grouping chosen by the converter explicit. As long as every literal is
/// finite, the result scans and evaluates to the same value as the original
/// expression. A literal too long for `f64` (over 309 digits) is stored as
/// infinity and rendered as `inf`, which does not scan.
///
/// # Errors
/// Fails exactly where strict evaluation of the same sequence would:
/// [`EvalError::StackUnderflow`], [`EvalError::NoResult`],
/// [`EvalError::MalformedExpression`] or [`EvalError::MisplacedParenthesis`].
///
/// # Example
/// ```
/// use yardcalc::interpreter::{parser::to_postfix, render::parenthesize, scanner::scan};
///
/// let postfix = to_postfix(scan("2 ^ 3 ^ 2").unwrap()).unwrap();
/// assert_eq!(parenthesize(&postfix).unwrap(), "((2 ^ 3) ^ 2)");
/// ```
pub fn parenthesize(postfix: &[Token]) -> EvalResult<String> {
    let mut operands: Vec<String> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(_) => operands.push(token.to_string()),
            Token::Operator(symbol) if symbol.is_paren() => {
                return Err(EvalError::MisplacedParenthesis { paren: symbol.as_char() });
            },
            Token::Operator(symbol) => {
                let (Some(b), Some(a)) = (operands.pop(), operands.pop()) else {
                    return Err(EvalError::StackUnderflow { operator: symbol.as_char() });
                };
                operands.push(format!("({a} {symbol} {b})"));
            },
        }
    }

    match operands.len() {
        0 => Err(EvalError::NoResult),
        1 => operands.pop().ok_or(EvalError::NoResult),
        residual => Err(EvalError::MalformedExpression { residual }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        interpreter::{parser::to_postfix, scanner::scan},
        token::Symbol,
    };

    #[test]
    fn lone_number_needs_no_parentheses() {
        assert_eq!(parenthesize(&[Token::Number(42.0)]).unwrap(), "42");
    }

    #[test]
    fn groups_every_application() {
        let postfix = [Token::Number(2.0),
                       Token::Number(3.0),
                       Token::Number(4.0),
                       Token::Operator(Symbol::Mul),
                       Token::Operator(Symbol::Add)];
        assert_eq!(parenthesize(&postfix).unwrap(), "(2 + (3 * 4))");
        assert_eq!(postfix_notation(&postfix), "2 3 4 * +");
    }

    #[test]
    fn overflowing_literal_renders_as_inf() {
        let postfix = scan(&"9".repeat(400)).unwrap();
        assert_eq!(postfix, vec![Token::Number(f64::INFINITY)]);
        assert_eq!(parenthesize(&postfix).unwrap(), "inf");
        assert!(scan("inf").is_err());
    }

    #[test]
    fn finite_literals_render_in_scannable_form() {
        let postfix = to_postfix(scan("123456789 * 1000").unwrap()).unwrap();
        let infix = parenthesize(&postfix).unwrap();
        assert_eq!(infix, "(123456789 * 1000)");
        assert_eq!(to_postfix(scan(&infix).unwrap()).unwrap(), postfix);
    }

    #[test]
    fn fails_like_the_evaluator() {
        assert_eq!(parenthesize(&[]), Err(EvalError::NoResult));
        assert_eq!(parenthesize(&[Token::Number(1.0), Token::Operator(Symbol::Sub)]),
                   Err(EvalError::StackUnderflow { operator: '-' }));
        assert_eq!(parenthesize(&[Token::Number(1.0), Token::Number(2.0)]),
                   Err(EvalError::MalformedExpression { residual: 2 }));
    }
}
