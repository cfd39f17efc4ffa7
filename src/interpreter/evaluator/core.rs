use log::{debug, trace, warn};

use crate::{
    error::EvaluationError,
    token::{Arity, Operator, Token},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// What to do when more than one value is left on the stack after the last
/// token, as with `1 2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResidualPolicy {
    /// Fail with `EvaluationError::MalformedExpression`.
    #[default]
    Strict,
    /// Return the topmost value and discard the rest.
    Lenient,
}

/// Evaluates postfix sequences on an operand stack.
///
/// The evaluator only carries configuration. The operand stack is created
/// inside every call to [`Evaluator::evaluate`] and dropped when it returns,
/// so a failed evaluation can never leave values behind for the next one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    /// How leftover values are treated.
    pub policy: ResidualPolicy,
}

/// Pops the top operand, failing if the stack is empty.
fn pop(stack: &mut Vec<i32>) -> EvalResult<i32> {
    stack.pop().ok_or(EvaluationError::StackUnderflow)
}

impl Evaluator {
    /// Creates an evaluator with the given residual policy.
    #[must_use]
    pub const fn new(policy: ResidualPolicy) -> Self {
        Self { policy }
    }

    /// Evaluates a postfix sequence and returns its value.
    ///
    /// Numbers are pushed. A unary operator replaces the top value, a binary
    /// operator pops its right operand, then its left operand, and pushes the
    /// result. Exactly one value must remain at the end; see
    /// [`ResidualPolicy`] for what happens otherwise.
    ///
    /// # Errors
    /// - `StackUnderflow` if an operator finds too few operands or the
    ///   sequence is empty.
    /// - `DivisionByZero` if `/` or `%` has a zero right operand.
    /// - `UnknownToken` for parentheses or a unary `*`, `/` or `%`.
    /// - `MalformedExpression` if values are left over under
    ///   `ResidualPolicy::Strict`.
    ///
    /// # Example
    /// ```
    /// use postfixer::{
    ///     Evaluator, Postfix, ResidualPolicy, error::EvaluationError,
    /// };
    ///
    /// let postfix: Postfix = "1 2".parse().unwrap();
    ///
    /// let strict = Evaluator::new(ResidualPolicy::Strict).evaluate(&postfix);
    /// assert_eq!(strict, Err(EvaluationError::MalformedExpression { residual: 2 }));
    ///
    /// let lenient = Evaluator::new(ResidualPolicy::Lenient).evaluate(&postfix);
    /// assert_eq!(lenient, Ok(2));
    /// ```
    pub fn evaluate(&self, tokens: &[Token]) -> EvalResult<i32> {
        let mut stack = Vec::with_capacity(tokens.len());

        for token in tokens {
            trace!("{token} on {stack:?}");
            match *token {
                Token::Number(n) => stack.push(n),
                Token::Operator(Operator { kind,
                                           arity: Arity::Unary, }) => {
                    let operand = pop(&mut stack)?;
                    stack.push(Self::eval_unary(kind, operand)?);
                },
                Token::Operator(Operator { kind,
                                           arity: Arity::Binary, }) => {
                    let right = pop(&mut stack)?;
                    let left = pop(&mut stack)?;
                    stack.push(Self::eval_binary(kind, left, right)?);
                },
                Token::LeftParen | Token::RightParen => {
                    return Err(EvaluationError::UnknownToken { token: token.to_string() });
                },
            }
        }

        let result = pop(&mut stack)?;
        if !stack.is_empty() {
            match self.policy {
                ResidualPolicy::Strict => {
                    return Err(EvaluationError::MalformedExpression { residual: stack.len() + 1 });
                },
                ResidualPolicy::Lenient => {
                    warn!("discarding {} value(s) left below the result {result}", stack.len());
                },
            }
        }

        debug!("evaluated {} token(s) to {result}", tokens.len());
        Ok(result)
    }
}

/// Evaluates a postfix sequence, rejecting leftover values.
///
/// Shorthand for `Evaluator::default().evaluate(tokens)`.
///
/// # Errors
/// See [`Evaluator::evaluate`].
///
/// # Example
/// ```
/// use postfixer::{
///     error::EvaluationError,
///     evaluate_postfix,
///     token::{Operator, OperatorKind, Token},
/// };
///
/// let div = Token::Operator(Operator::binary(OperatorKind::Div));
/// assert_eq!(evaluate_postfix(&[Token::Number(7), Token::Number(2), div]), Ok(3));
/// assert_eq!(evaluate_postfix(&[Token::Number(7), Token::Number(0), div]),
///            Err(EvaluationError::DivisionByZero));
/// ```
pub fn evaluate_postfix(tokens: &[Token]) -> EvalResult<i32> {
    Evaluator::default().evaluate(tokens)
}
