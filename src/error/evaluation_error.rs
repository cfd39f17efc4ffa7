#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum EvaluationError {
    /// Encountered something that is neither a number nor an operator.
    UnknownToken {
        /// The unrecognized token, as written.
        token: String,
    },
    /// An operator needed more operands than were on the stack, or the
    /// sequence produced no value at all.
    StackUnderflow,
    /// The right operand of `/` or `%` was zero.
    DivisionByZero,
    /// More than one value was left on the stack after the last token.
    MalformedExpression {
        /// The number of values left on the stack.
        residual: usize,
    },
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownToken { token } => write!(f, "Unknown token: '{token}'."),
            Self::StackUnderflow => write!(f, "Not enough operands for operator."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::MalformedExpression { residual } => write!(f,
                                                             "Malformed expression: {residual} values left after evaluation."),
        }
    }
}

impl std::error::Error for EvaluationError {}
