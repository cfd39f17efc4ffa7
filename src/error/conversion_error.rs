#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while converting infix to postfix.
pub enum ConversionError {
    /// A word in operand position is not an integer literal.
    InvalidOperand {
        /// The offending word.
        token:    String,
        /// Byte offset of the word in the input line.
        position: usize,
    },
    /// A `)` without a matching `(`, or a `(` that is never closed.
    UnbalancedParentheses {
        /// Byte offset of the unmatched parenthesis.
        position: usize,
    },
    /// An operator other than `+` or `-` where a sign was expected, as in
    /// `* 3` or `2 + / 3`.
    InvalidOperator {
        /// The operator symbol.
        operator: char,
        /// Byte offset of the operator in the input line.
        position: usize,
    },
}

impl ConversionError {
    /// Returns the byte offset in the input line the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidOperand { position, .. }
            | Self::UnbalancedParentheses { position }
            | Self::InvalidOperator { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperand { token, position } => {
                write!(f, "Error at position {position}: Invalid operand '{token}'.")
            },
            Self::UnbalancedParentheses { position } => write!(f,
                                                               "Error at position {position}: Unbalanced parentheses."),
            Self::InvalidOperator { operator, position } => write!(f,
                                                                   "Error at position {position}: '{operator}' cannot be used as a unary operator."),
        }
    }
}

impl std::error::Error for ConversionError {}
