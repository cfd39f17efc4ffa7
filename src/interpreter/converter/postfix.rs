use std::{fmt, ops::Deref, str::FromStr};

use crate::{error::EvaluationError, token::Token};

/// An ordered sequence of tokens in postfix notation.
///
/// This is what the converter hands to the evaluator. It is rendered to text
/// only for display: tokens are joined by single spaces, unary operators are
/// written `u+` and `u-`.
///
/// # Example
/// ```
/// use postfixer::{Postfix, token::Token};
///
/// let postfix: Postfix = "3 u- 4 +".parse().unwrap();
/// assert_eq!(postfix.len(), 4);
/// assert_eq!(postfix[0], Token::Number(3));
/// assert_eq!(postfix.to_string(), "3 u- 4 +");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Postfix(Vec<Token>);

impl Postfix {
    /// Returns the tokens in evaluation order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }
}

impl Deref for Postfix {
    type Target = [Token];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Token>> for Postfix {
    fn from(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }
}

impl FromIterator<Token> for Postfix {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Reads rendered postfix text, one token per whitespace-separated word.
impl FromStr for Postfix {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse::<Token>).collect()
    }
}
