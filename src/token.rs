use std::fmt;

/// A single-character operator or grouping mark.
///
/// `Symbol` covers the five binary operators and the two parentheses. The
/// parentheses never reach the evaluator when the postfix sequence comes from
/// [`to_postfix`](crate::interpreter::parser::to_postfix); they are handled
/// structurally by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

/// Precedence ranks of the binary operators.
///
/// Parentheses are deliberately absent. Lookups for them return `None`.
pub const PRECEDENCE_TABLE: [(Symbol, u8); 5] = [(Symbol::Pow, 3),
                                                 (Symbol::Mul, 2),
                                                 (Symbol::Div, 2),
                                                 (Symbol::Add, 1),
                                                 (Symbol::Sub, 1)];

impl Symbol {
    /// Maps a character to its symbol, if it is one of `+ - * / ^ ( )`.
    ///
    /// # Example
    /// ```
    /// use yardcalc::token::Symbol;
    ///
    /// assert_eq!(Symbol::from_char('^'), Some(Symbol::Pow));
    /// assert_eq!(Symbol::from_char('%'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            _ => None,
        }
    }

    /// The character this symbol was scanned from.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
            Self::LParen => '(',
            Self::RParen => ')',
        }
    }

    /// Returns `true` for `(` and `)`.
    #[must_use]
    pub const fn is_paren(self) -> bool {
        matches!(self, Self::LParen | Self::RParen)
    }

    /// Looks the symbol up in [`PRECEDENCE_TABLE`].
    ///
    /// # Returns
    /// - `Some(rank)` for the five binary operators.
    /// - `None` for parentheses.
    ///
    /// # Example
    /// ```
    /// use yardcalc::token::Symbol;
    ///
    /// assert_eq!(Symbol::Pow.precedence(), Some(3));
    /// assert_eq!(Symbol::Div.precedence(), Symbol::Mul.precedence());
    /// assert_eq!(Symbol::LParen.precedence(), None);
    /// ```
    #[must_use]
    pub fn precedence(self) -> Option<u8> {
        PRECEDENCE_TABLE.iter()
                        .find(|(symbol, _)| *symbol == self)
                        .map(|(_, rank)| *rank)
    }

    /// Decides whether `self`, sitting on top of the operator stack, must be
    /// popped to the output before `incoming` is pushed.
    ///
    /// Ties go to the operator already on the stack, which makes every
    /// operator left-associative, `^` included. A `(` on top never yields.
    ///
    /// # Example
    /// ```
    /// use yardcalc::token::Symbol;
    ///
    /// assert!(Symbol::Mul.yields_to(Symbol::Add));
    /// assert!(Symbol::Pow.yields_to(Symbol::Pow));
    /// assert!(!Symbol::Add.yields_to(Symbol::Mul));
    /// assert!(!Symbol::LParen.yields_to(Symbol::Add));
    /// ```
    #[must_use]
    pub fn yields_to(self, incoming: Self) -> bool {
        match (self.precedence(), incoming.precedence()) {
            (Some(top), Some(incoming)) => top >= incoming,
            _ => false,
        }
    }

    /// Applies the binary operation for this symbol using IEEE 754 semantics.
    ///
    /// Division by zero is not an error: it yields an infinity or NaN.
    ///
    /// # Returns
    /// `None` when the symbol is a parenthesis.
    ///
    /// # Example
    /// ```
    /// use yardcalc::token::Symbol;
    ///
    /// assert_eq!(Symbol::Sub.apply(2.0, 3.0), Some(-1.0));
    /// assert_eq!(Symbol::Pow.apply(2.0, 10.0), Some(1024.0));
    /// assert_eq!(Symbol::Div.apply(1.0, 0.0), Some(f64::INFINITY));
    /// assert_eq!(Symbol::RParen.apply(1.0, 2.0), None);
    /// ```
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> Option<f64> {
        match self {
            Self::Add => Some(a + b),
            Self::Sub => Some(a - b),
            Self::Mul => Some(a * b),
            Self::Div => Some(a / b),
            Self::Pow => Some(a.powf(b)),
            Self::LParen | Self::RParen => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A lexical token produced by the scanner.
///
/// `Display` prints numbers in Rust's shortest round-trip form, which the
/// scanner reads back for any finite integer. Infinity prints as `inf`.
///
/// Tokens are immutable once produced and are moved, not shared, through the
/// converter and the evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal such as `42`.
    Number(f64),
    /// An operator or grouping mark.
    Operator(Symbol),
}

impl From<Symbol> for Token {
    fn from(symbol: Symbol) -> Self {
        Self::Operator(symbol)
    }
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(symbol) => write!(f, "{symbol}"),
        }
    }
}
