use std::{fmt, str::FromStr};

use crate::error::EvaluationError;

/// The arithmetic operation an operator performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
    /// `%`, with the sign of the dividend.
    Rem,
}

impl OperatorKind {
    /// Returns the symbol the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Rem => '%',
        }
    }

    /// Maps an operator symbol back to its kind.
    ///
    /// # Example
    /// ```
    /// use postfixer::token::OperatorKind;
    ///
    /// assert_eq!(OperatorKind::from_symbol('%'), Some(OperatorKind::Rem));
    /// assert_eq!(OperatorKind::from_symbol('^'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '%' => Some(Self::Rem),
            _ => None,
        }
    }

    /// Only `+` and `-` have a meaning as sign operators.
    #[must_use]
    pub const fn allows_unary(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The number of operands an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// One operand, e.g. the sign in `-3`.
    Unary,
    /// Two operands, e.g. `2 - 3`.
    Binary,
}

/// An operator together with the arity it was resolved to during conversion.
///
/// The same symbol may be unary or binary depending on its position in the
/// infix input: the `-` in `-3` is unary, the one in `2 - 3` is binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operator {
    /// What the operator computes.
    pub kind:  OperatorKind,
    /// How many operands it takes.
    pub arity: Arity,
}

impl Operator {
    /// Creates a binary operator.
    #[must_use]
    pub const fn binary(kind: OperatorKind) -> Self {
        Self { kind,
               arity: Arity::Binary }
    }

    /// Creates a unary operator.
    #[must_use]
    pub const fn unary(kind: OperatorKind) -> Self {
        Self { kind,
               arity: Arity::Unary }
    }

    /// Returns the binding strength of the operator; higher binds tighter.
    ///
    /// - unary `+` and `-`: 2
    /// - `*`, `/` and `%`: 1
    /// - binary `+` and `-`: 0
    ///
    /// # Example
    /// ```
    /// use postfixer::token::{Operator, OperatorKind};
    ///
    /// assert_eq!(Operator::unary(OperatorKind::Sub).precedence(), 2);
    /// assert_eq!(Operator::binary(OperatorKind::Rem).precedence(), 1);
    /// assert_eq!(Operator::binary(OperatorKind::Add).precedence(), 0);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match (self.arity, self.kind) {
            (Arity::Unary, _) => 2,
            (Arity::Binary, OperatorKind::Mul | OperatorKind::Div | OperatorKind::Rem) => 1,
            (Arity::Binary, OperatorKind::Add | OperatorKind::Sub) => 0,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.arity {
            Arity::Unary => write!(f, "u{}", self.kind),
            Arity::Binary => write!(f, "{}", self.kind),
        }
    }
}

/// A single element of an infix or postfix expression.
///
/// Postfix sequences produced by the converter only ever contain `Number` and
/// `Operator`; the parenthesis variants exist so that hand-built sequences can
/// be represented and rejected by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// An integer operand.
    Number(i32),
    /// A unary or binary operator.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl From<Operator> for Token {
    fn from(value: Operator) -> Self {
        Self::Operator(value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}

/// Reads one whitespace-free word of rendered postfix text.
///
/// `u+` and `u-` become unary operators, the five operator symbols become
/// binary operators and anything that parses as an `i32`, including signed
/// literals such as `-5`, becomes a number.
///
/// # Example
/// ```
/// use postfixer::token::{Operator, OperatorKind, Token};
///
/// assert_eq!("u-".parse::<Token>().unwrap(),
///            Token::Operator(Operator::unary(OperatorKind::Sub)));
/// assert_eq!("-5".parse::<Token>().unwrap(), Token::Number(-5));
/// assert!("u*".parse::<Token>().is_err());
/// ```
impl FromStr for Token {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let operator = match (chars.next(), chars.next(), chars.next()) {
            (Some(symbol), None, _) => OperatorKind::from_symbol(symbol).map(Operator::binary),
            (Some('u'), Some(symbol), None) => {
                OperatorKind::from_symbol(symbol).filter(|kind| kind.allows_unary())
                                                 .map(Operator::unary)
            },
            _ => None,
        };

        if let Some(op) = operator {
            return Ok(Self::Operator(op));
        }

        s.parse()
         .map(Self::Number)
         .map_err(|_| EvaluationError::UnknownToken { token: s.to_string() })
    }
}
