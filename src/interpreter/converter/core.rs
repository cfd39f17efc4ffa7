use log::{debug, trace};

use crate::{
    error::ConversionError,
    interpreter::{
        converter::postfix::Postfix,
        lexer::{Lexeme, tokenize},
    },
    token::{Operator, OperatorKind, Token},
};

/// Result type used by the converter.
pub type ConvertResult<T> = Result<T, ConversionError>;

/// An entry waiting on the operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    LeftParen,
    Operator(Operator),
}

/// State of one shunting-yard run.
///
/// A fresh instance is created for every line and consumed by `finish`, so
/// nothing survives from one conversion to the next.
struct ShuntingYard {
    /// Pending operators and open parentheses with their byte offsets.
    operators:    Vec<(Pending, usize)>,
    output:       Vec<Token>,
    /// Set at the start of the line and after an operator or `(`, where a
    /// sign or a fresh operand is expected.
    expect_unary: bool,
}

impl ShuntingYard {
    const fn new() -> Self {
        Self { operators:    Vec::new(),
               output:       Vec::new(),
               expect_unary: true, }
    }

    fn feed(&mut self, lexeme: Lexeme, position: usize) -> ConvertResult<()> {
        match lexeme {
            Lexeme::LParen => {
                self.operators.push((Pending::LeftParen, position));
                self.expect_unary = true;
            },
            Lexeme::RParen => {
                self.close_paren(position)?;
                self.expect_unary = false;
            },
            Lexeme::Word(word) => self.push_operand(&word, position)?,
            Lexeme::Ignored => {},
            op => {
                if let Some(kind) = op.operator_kind() {
                    self.push_operator(kind, position)?;
                }
            },
        }
        Ok(())
    }

    /// Pops operators into the output until the matching `(` is found.
    fn close_paren(&mut self, position: usize) -> ConvertResult<()> {
        loop {
            match self.operators.pop() {
                Some((Pending::LeftParen, _)) => return Ok(()),
                Some((Pending::Operator(op), _)) => self.output.push(op.into()),
                None => return Err(ConversionError::UnbalancedParentheses { position }),
            }
        }
    }

    /// Resolves the arity of an operator symbol and stacks it.
    ///
    /// Unary operators go straight onto the stack. Binary operators first
    /// flush every stacked operator that binds at least as tightly, which
    /// makes equal-precedence binary operators left-associative.
    fn push_operator(&mut self, kind: OperatorKind, position: usize) -> ConvertResult<()> {
        let operator = if self.expect_unary {
            if !kind.allows_unary() {
                return Err(ConversionError::InvalidOperator { operator: kind.symbol(),
                                                              position });
            }
            Operator::unary(kind)
        } else {
            let operator = Operator::binary(kind);
            while let Some(&(Pending::Operator(top), _)) = self.operators.last()
                  && top.precedence() >= operator.precedence()
            {
                self.operators.pop();
                self.output.push(top.into());
            }
            operator
        };

        self.operators.push((Pending::Operator(operator), position));
        self.expect_unary = true;
        Ok(())
    }

    fn push_operand(&mut self, word: &str, position: usize) -> ConvertResult<()> {
        let value = word.parse::<i32>()
                        .map_err(|_| ConversionError::InvalidOperand { token: word.to_string(),
                                                                       position })?;
        self.output.push(Token::Number(value));
        self.expect_unary = false;
        Ok(())
    }

    /// Flushes the remaining operators. A `(` still on the stack was never
    /// closed.
    fn finish(mut self) -> ConvertResult<Postfix> {
        while let Some((pending, position)) = self.operators.pop() {
            match pending {
                Pending::Operator(op) => self.output.push(op.into()),
                Pending::LeftParen => {
                    return Err(ConversionError::UnbalancedParentheses { position });
                },
            }
        }
        Ok(Postfix::from(self.output))
    }
}

/// Converts an infix line to postfix notation.
///
/// The line is tokenized and run through the shunting-yard algorithm. A `+`
/// or `-` at the start of the line, after another operator or after `(` is a
/// sign and is rendered as `u+` or `u-`.
///
/// # Errors
/// - `InvalidOperand` if a word between delimiters is not an integer.
/// - `UnbalancedParentheses` if a `)` has no matching `(` or a `(` is never
///   closed.
/// - `InvalidOperator` if `*`, `/` or `%` appears where an operand or sign is
///   expected.
///
/// # Example
/// ```
/// use postfixer::convert_to_postfix;
///
/// let postfix = convert_to_postfix("(9*9-0+8*7*7)").unwrap();
/// assert_eq!(postfix.to_string(), "9 9 * 0 - 8 7 * 7 * +");
///
/// let postfix = convert_to_postfix("--3").unwrap();
/// assert_eq!(postfix.to_string(), "3 u- u-");
///
/// assert!(convert_to_postfix("3 x").is_err());
/// ```
pub fn convert_to_postfix(line: &str) -> ConvertResult<Postfix> {
    let mut yard = ShuntingYard::new();

    for (lexeme, position) in tokenize(line)? {
        trace!("lexeme {lexeme:?} at {position}");
        yard.feed(lexeme, position)?;
    }

    let postfix = yard.finish()?;
    debug!("converted '{}' to '{postfix}'", line.trim());
    Ok(postfix)
}
