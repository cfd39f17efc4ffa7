/// Core evaluation loop and configuration.
///
/// Runs a postfix sequence on a call-local operand stack and decides what to
/// do with values left over at the end.
pub mod core;

/// Unary operator evaluation.
///
/// Applies the sign operators `u+` and `u-`.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the five integer operators with wrapping overflow, truncating
/// division and division-by-zero checks.
pub mod binary;
