use crate::{
    error::EvaluationError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    token::OperatorKind,
};

impl Evaluator {
    /// Evaluates `left <op> right` with native integer semantics.
    ///
    /// Overflow wraps around. Division truncates toward zero and the
    /// remainder takes the sign of the dividend, so `-7 / 2 == -3` and
    /// `-7 % 2 == -1`. A zero right operand of `/` or `%` is an error.
    ///
    /// # Example
    /// ```
    /// use postfixer::{Evaluator, error::EvaluationError, token::OperatorKind};
    ///
    /// assert_eq!(Evaluator::eval_binary(OperatorKind::Div, -7, 2), Ok(-3));
    /// assert_eq!(Evaluator::eval_binary(OperatorKind::Rem, -7, 2), Ok(-1));
    /// assert_eq!(Evaluator::eval_binary(OperatorKind::Rem, 1, 0),
    ///            Err(EvaluationError::DivisionByZero));
    /// ```
    pub fn eval_binary(kind: OperatorKind, left: i32, right: i32) -> EvalResult<i32> {
        match kind {
            OperatorKind::Add => Ok(left.wrapping_add(right)),
            OperatorKind::Sub => Ok(left.wrapping_sub(right)),
            OperatorKind::Mul => Ok(left.wrapping_mul(right)),
            OperatorKind::Div | OperatorKind::Rem if right == 0 => {
                Err(EvaluationError::DivisionByZero)
            },
            OperatorKind::Div => Ok(left.wrapping_div(right)),
            OperatorKind::Rem => Ok(left.wrapping_rem(right)),
        }
    }
}
