use logos::Logos;

use crate::{error::ConversionError, interpreter::converter::core::ConvertResult, token::OperatorKind};

/// Represents a raw lexical unit of an infix line.
///
/// The lexer only splits the line at the delimiters `( ) + - * / %` and at
/// whitespace. Everything between delimiters is kept as an unclassified
/// `Word`; deciding whether a word is a valid operand is left to the
/// converter.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Lexeme {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any run of characters that are neither delimiters nor whitespace, such
    /// as `42` or `x1`.
    #[regex(r"[^()+\-*/%\x00-\x20]+", |lex| lex.slice().to_string())]
    Word(String),
    /// Spaces and every control character below them, including tabs, line
    /// breaks and vertical tabs.
    #[regex(r"[\x00-\x20]+", logos::skip)]
    Ignored,
}

impl Lexeme {
    /// Returns the operator this lexeme spells, if any.
    #[must_use]
    pub const fn operator_kind(&self) -> Option<OperatorKind> {
        match self {
            Self::Plus => Some(OperatorKind::Add),
            Self::Minus => Some(OperatorKind::Sub),
            Self::Star => Some(OperatorKind::Mul),
            Self::Slash => Some(OperatorKind::Div),
            Self::Percent => Some(OperatorKind::Rem),
            _ => None,
        }
    }
}

/// Splits a line into lexemes paired with their byte offset in the line.
///
/// Whitespace is discarded and never produces a lexeme.
///
/// # Errors
/// Returns `ConversionError::InvalidOperand` for input the lexer cannot match.
///
/// # Example
/// ```
/// use postfixer::interpreter::lexer::{Lexeme, tokenize};
///
/// let lexemes = tokenize("(12 +x)").unwrap();
/// assert_eq!(lexemes,
///            vec![(Lexeme::LParen, 0),
///                 (Lexeme::Word("12".to_string()), 1),
///                 (Lexeme::Plus, 4),
///                 (Lexeme::Word("x".to_string()), 5),
///                 (Lexeme::RParen, 6)]);
/// ```
pub fn tokenize(line: &str) -> ConvertResult<Vec<(Lexeme, usize)>> {
    let mut lexemes = Vec::new();
    let mut lexer = Lexeme::lexer(line);

    while let Some(lexeme) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(lex) = lexeme {
            lexemes.push((lex, position));
        } else {
            return Err(ConversionError::InvalidOperand { token: lexer.slice().to_string(),
                                                         position });
        }
    }

    Ok(lexemes)
}
