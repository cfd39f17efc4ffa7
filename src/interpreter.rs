/// The converter module turns infix token streams into postfix sequences.
///
/// It runs the shunting-yard algorithm over the lexemes of one line, decides
/// whether each `+` and `-` is a sign or a binary operator, and orders the
/// output by operator precedence.
///
/// # Responsibilities
/// - Resolves operator arity from position.
/// - Reports invalid operands and unbalanced parentheses with their position.
/// - Renders postfix sequences and reads them back from text.
pub mod converter;
/// The evaluator module computes the value of a postfix sequence.
///
/// The evaluator is a stack machine: operands are pushed, operators pop their
/// operands and push the result.
///
/// # Responsibilities
/// - Applies unary and binary integer operators.
/// - Reports missing operands, division by zero and leftover values.
pub mod evaluator;
/// The lexer module splits a raw line into lexemes.
///
/// The lexer separates delimiters and operand words and drops whitespace. It
/// does not decide whether a word is a valid number.
pub mod lexer;
