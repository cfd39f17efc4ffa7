/// Shunting-yard conversion from infix to postfix.
///
/// Holds the operator stack, resolves unary versus binary operators and
/// applies the precedence rules that order the postfix output.
pub mod core;

/// The postfix sequence produced by the converter.
///
/// Renders the sequence for display and reads rendered postfix text back
/// into tokens.
pub mod postfix;
