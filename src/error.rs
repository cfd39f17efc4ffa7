/// Conversion errors.
///
/// Defines all error types that can occur while turning an infix line into a
/// postfix sequence: operands that are not integers, unbalanced parentheses
/// and operators that cannot act as signs.
pub mod conversion_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while running a postfix
/// sequence on the operand stack, such as division by zero or missing
/// operands.
pub mod evaluation_error;

pub use conversion_error::ConversionError;
pub use evaluation_error::EvaluationError;
