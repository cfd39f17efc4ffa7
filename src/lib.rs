//! # postfixer
//!
//! postfixer converts integer arithmetic expressions from infix to postfix
//! notation and evaluates them on a stack machine. It supports `+`, `-`, `*`,
//! `/` and `%`, parentheses, and unary `+` and `-`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides error types for conversion and evaluation.
///
/// This module defines every error that can be raised while converting an
/// infix line or evaluating a postfix sequence. Each kind is a separate
/// variant so callers can tell them apart, even though the interactive shell
/// reports them all the same way.
///
/// # Responsibilities
/// - Defines error enums for both phases.
/// - Attaches the offending token and its position where one exists.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Runs the conversion and evaluation pipeline.
///
/// This module ties together the lexer, the infix-to-postfix converter and
/// the postfix evaluator.
///
/// # Responsibilities
/// - Splits raw lines into lexemes.
/// - Converts infix lexemes into postfix sequences.
/// - Evaluates postfix sequences to integers.
pub mod interpreter;
/// The line-oriented front end used by the binary.
///
/// Prints the postfix form of each line as soon as it is converted, then the
/// value or `Invalid expression`.
pub mod shell;
/// Defines the tokens that make up postfix sequences.
///
/// Declares `Token`, `Operator` and their parts, operator precedence, and the
/// text form used when postfix sequences are displayed.
pub mod token;

pub use interpreter::{
    converter::{
        core::{ConvertResult, convert_to_postfix},
        postfix::Postfix,
    },
    evaluator::core::{EvalResult, Evaluator, ResidualPolicy, evaluate_postfix},
};

/// The notation an input line is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Notation {
    /// `1 + 2 * 3`, converted before evaluation.
    #[default]
    Infix,
    /// `1 2 3 * +`, evaluated directly.
    Postfix,
}

/// The outcome of evaluating one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The postfix form of the line.
    pub postfix: Postfix,
    /// The integer the expression evaluates to.
    pub value:   i32,
}

/// Reads one line of input into a postfix sequence without evaluating it.
///
/// Infix lines are converted with [`convert_to_postfix`]; postfix lines are
/// read token by token.
///
/// # Errors
/// Returns a `ConversionError` for infix input or an `EvaluationError` for
/// unreadable postfix text, boxed.
///
/// # Example
/// ```
/// use postfixer::{Notation, to_postfix};
///
/// let postfix = to_postfix("7 / 0", Notation::Infix).unwrap();
/// assert_eq!(postfix.to_string(), "7 0 /");
/// ```
pub fn to_postfix(line: &str, notation: Notation) -> Result<Postfix, Box<dyn std::error::Error>> {
    Ok(match notation {
        Notation::Infix => convert_to_postfix(line)?,
        Notation::Postfix => line.parse::<Postfix>()?,
    })
}

/// Evaluates one line of input and returns its postfix form and value.
///
/// The line is read with [`to_postfix`] and the sequence is then evaluated
/// with the given residual policy. Every call starts from scratch; nothing is carried
/// over from earlier calls, including failed ones.
///
/// # Errors
/// Returns a `ConversionError` or `EvaluationError`, boxed. Callers that need
/// the specific kind can `downcast_ref` to either.
///
/// # Examples
/// ```
/// use postfixer::{Notation, ResidualPolicy, error::EvaluationError, evaluate_line};
///
/// let evaluation = evaluate_line("9 + 0", Notation::Infix, ResidualPolicy::Strict).unwrap();
/// assert_eq!(evaluation.postfix.to_string(), "9 0 +");
/// assert_eq!(evaluation.value, 9);
///
/// let err = evaluate_line("7 0 /", Notation::Postfix, ResidualPolicy::Strict).unwrap_err();
/// assert_eq!(err.downcast_ref::<EvaluationError>(),
///            Some(&EvaluationError::DivisionByZero));
/// ```
pub fn evaluate_line(line: &str,
                     notation: Notation,
                     policy: ResidualPolicy)
                     -> Result<Evaluation, Box<dyn std::error::Error>> {
    let postfix = to_postfix(line, notation)?;
    let value = Evaluator::new(policy).evaluate(&postfix)?;

    Ok(Evaluation { postfix, value })
}
