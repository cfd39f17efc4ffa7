use crate::{
    error::EvaluationError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    token::{Operator, OperatorKind},
};

impl Evaluator {
    /// Applies a sign operator to a value.
    ///
    /// `u+` returns the value unchanged and `u-` negates it, wrapping on
    /// `i32::MIN`. The other operator kinds have no unary meaning.
    ///
    /// # Example
    /// ```
    /// use postfixer::{Evaluator, token::OperatorKind};
    ///
    /// assert_eq!(Evaluator::eval_unary(OperatorKind::Sub, 5), Ok(-5));
    /// assert_eq!(Evaluator::eval_unary(OperatorKind::Add, -5), Ok(-5));
    /// assert!(Evaluator::eval_unary(OperatorKind::Mul, 5).is_err());
    /// ```
    pub fn eval_unary(kind: OperatorKind, value: i32) -> EvalResult<i32> {
        match kind {
            OperatorKind::Add => Ok(value),
            OperatorKind::Sub => Ok(value.wrapping_neg()),
            OperatorKind::Mul | OperatorKind::Div | OperatorKind::Rem => {
                Err(EvaluationError::UnknownToken { token: Operator::unary(kind).to_string() })
            },
        }
    }
}
