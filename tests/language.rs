use std::fs;

use postfixer::{
    Evaluator, Notation, Postfix, ResidualPolicy, convert_to_postfix,
    error::{ConversionError, EvaluationError},
    evaluate_line, evaluate_postfix,
    interpreter::lexer::{Lexeme, tokenize},
    shell::{report_line, run_interactive},
    token::{Operator, OperatorKind, Token},
};
use walkdir::WalkDir;

const fn num(n: i32) -> Token {
    Token::Number(n)
}

const fn bin(kind: OperatorKind) -> Token {
    Token::Operator(Operator::binary(kind))
}

const fn un(kind: OperatorKind) -> Token {
    Token::Operator(Operator::unary(kind))
}

fn assert_value(src: &str, expected: i32) {
    match evaluate_line(src, Notation::Infix, ResidualPolicy::Strict) {
        Ok(evaluation) => assert_eq!(evaluation.value, expected, "wrong value for '{src}'"),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn conversion_error(src: &str) -> ConversionError {
    convert_to_postfix(src).expect_err("conversion succeeded but was expected to fail")
}

fn evaluation_error(src: &str, notation: Notation) -> EvaluationError {
    let err = evaluate_line(src, notation, ResidualPolicy::Strict).expect_err("evaluation succeeded but was expected to fail");
    err.downcast_ref::<EvaluationError>()
       .unwrap_or_else(|| panic!("'{src}' failed with a non-evaluation error: {err}"))
       .clone()
}

#[test]
fn case_files_pass() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;

            let parts: Vec<&str> = line.split("=>").map(str::trim).collect();
            match parts.as_slice() {
                [infix, "error"] => {
                    assert!(evaluate_line(infix, Notation::Infix, ResidualPolicy::Strict).is_err(),
                            "{path:?} line {}: '{infix}' should fail",
                            i + 1);
                },
                [infix, postfix, value] => {
                    let evaluation = evaluate_line(infix, Notation::Infix, ResidualPolicy::Strict)
                        .unwrap_or_else(|e| panic!("{path:?} line {}: '{infix}' failed: {e}", i + 1));
                    assert_eq!(evaluation.postfix.to_string(), *postfix, "{path:?} line {}", i + 1);
                    assert_eq!(evaluation.value.to_string(), *value, "{path:?} line {}", i + 1);
                },
                _ => panic!("{path:?} line {}: malformed case '{line}'", i + 1),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

#[test]
fn simple_sum_converts_and_evaluates() {
    let postfix = convert_to_postfix("9 + 0").unwrap();
    assert_eq!(postfix.tokens(), &[num(9), num(0), bin(OperatorKind::Add)]);
    assert_eq!(evaluate_postfix(&postfix), Ok(9));
}

#[test]
fn nested_precedence_converts_and_evaluates() {
    use OperatorKind::{Add, Mul, Sub};

    let postfix = convert_to_postfix("(9*9-0+8*7*7)").unwrap();
    assert_eq!(postfix.tokens(),
               &[num(9),
                 num(9),
                 bin(Mul),
                 num(0),
                 bin(Sub),
                 num(8),
                 num(7),
                 bin(Mul),
                 num(7),
                 bin(Mul),
                 bin(Add)]);
    assert_eq!(evaluate_postfix(&postfix), Ok(473));
}

#[test]
fn matches_native_precedence_and_associativity() {
    let cases: [(&str, i32); 7] = [("8 - 3 * 2 + 10 / 3 % 2", 8 - 3 * 2 + 10 / 3 % 2),
                 ("2 * 3 * 4 - 5 - 6", 2 * 3 * 4 - 5 - 6),
                 ("100 / 7 / 2 * 3", 100 / 7 / 2 * 3),
                 ("-(4 - 9) * -2 % 7", -(4 - 9) * -2 % 7),
                 ("1 - (2 - (3 - (4 - 5)))", 1 - (2 - (3 - (4 - 5)))),
                 ("-17 / 5 + -17 % 5", -17 / 5 + -17 % 5),
                 ("((2 + 3) * (7 - 4)) / -(1 + 1)", ((2 + 3) * (7 - 4)) / -(1 + 1))];

    for (src, expected) in cases {
        assert_value(src, expected);
    }
}

#[test]
fn unary_chains() {
    let postfix = convert_to_postfix("-3").unwrap();
    assert_eq!(postfix.tokens(), &[num(3), un(OperatorKind::Sub)]);
    assert_eq!(evaluate_postfix(&postfix), Ok(-3));

    let postfix = convert_to_postfix("--3").unwrap();
    assert_eq!(postfix.tokens(),
               &[num(3), un(OperatorKind::Sub), un(OperatorKind::Sub)]);
    assert_eq!(evaluate_postfix(&postfix), Ok(3));

    assert_value("+-+3", -3);
}

#[test]
fn conversion_is_deterministic() {
    let src = "-(12 % 5) * 3 - 4 / -2";
    let first = convert_to_postfix(src).unwrap();
    let second = convert_to_postfix(src).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(evaluate_postfix(&[num(7), num(0), bin(OperatorKind::Div)]),
               Err(EvaluationError::DivisionByZero));
    assert_eq!(evaluate_postfix(&[num(7), num(0), bin(OperatorKind::Rem)]),
               Err(EvaluationError::DivisionByZero));
    assert_eq!(evaluation_error("1 / (3 - 3)", Notation::Infix),
               EvaluationError::DivisionByZero);
}

#[test]
fn unbalanced_parentheses_are_errors() {
    assert_eq!(conversion_error("(1+2"),
               ConversionError::UnbalancedParentheses { position: 0 });
    assert_eq!(conversion_error("1+2)"),
               ConversionError::UnbalancedParentheses { position: 3 });
    assert_eq!(conversion_error("((1) + 2"),
               ConversionError::UnbalancedParentheses { position: 0 });
}

#[test]
fn non_numeric_operand_is_error() {
    assert_eq!(conversion_error("3 x"),
               ConversionError::InvalidOperand { token:    "x".to_string(),
                                                 position: 2, });
    assert_eq!(conversion_error("2 * 3.5"),
               ConversionError::InvalidOperand { token:    "3.5".to_string(),
                                                 position: 4, });
    assert_eq!(conversion_error("1 + 2147483648"),
               ConversionError::InvalidOperand { token:    "2147483648".to_string(),
                                                 position: 4, });
}

#[test]
fn non_sign_operator_in_unary_position_is_error() {
    assert_eq!(conversion_error("* 3"),
               ConversionError::InvalidOperator { operator: '*',
                                                  position: 0, });
    assert_eq!(conversion_error("2 + / 3"),
               ConversionError::InvalidOperator { operator: '/',
                                                  position: 4, });
    assert_eq!(conversion_error("(% 3)"),
               ConversionError::InvalidOperator { operator: '%',
                                                  position: 1, });
}

#[test]
fn missing_operands_underflow() {
    assert_eq!(evaluation_error("", Notation::Infix), EvaluationError::StackUnderflow);
    assert_eq!(evaluation_error("1 +", Notation::Infix), EvaluationError::StackUnderflow);
    assert_eq!(evaluation_error("-", Notation::Infix), EvaluationError::StackUnderflow);
    assert_eq!(evaluate_postfix(&[bin(OperatorKind::Add)]),
               Err(EvaluationError::StackUnderflow));
}

#[test]
fn residual_values_follow_policy() {
    let postfix = convert_to_postfix("2(3)").unwrap();
    assert_eq!(postfix.tokens(), &[num(2), num(3)]);

    assert_eq!(Evaluator::new(ResidualPolicy::Strict).evaluate(&postfix),
               Err(EvaluationError::MalformedExpression { residual: 2 }));
    assert_eq!(Evaluator::new(ResidualPolicy::Lenient).evaluate(&postfix), Ok(3));

    let evaluation = evaluate_line("1 2 3 +", Notation::Postfix, ResidualPolicy::Lenient).unwrap();
    assert_eq!(evaluation.value, 5);
}

#[test]
fn failed_evaluation_leaves_no_state_behind() {
    let evaluator = Evaluator::new(ResidualPolicy::Strict);

    assert_eq!(evaluator.evaluate(&[num(5), num(6), num(0), bin(OperatorKind::Div)]),
               Err(EvaluationError::DivisionByZero));
    assert_eq!(evaluator.evaluate(&[num(7)]), Ok(7));

    assert_eq!(evaluator.evaluate(&[num(1), num(2), num(3), bin(OperatorKind::Mul), un(OperatorKind::Mul)]),
               Err(EvaluationError::UnknownToken { token: "u*".to_string() }));
    assert_eq!(evaluator.evaluate(&[num(4), un(OperatorKind::Sub)]), Ok(-4));
}

#[test]
fn parentheses_in_postfix_are_unknown_tokens() {
    assert_eq!(evaluate_postfix(&[num(1), Token::LeftParen]),
               Err(EvaluationError::UnknownToken { token: "(".to_string() }));
    assert_eq!(evaluate_postfix(&[Token::RightParen]),
               Err(EvaluationError::UnknownToken { token: ")".to_string() }));
}

#[test]
fn postfix_text_is_read_back() {
    let evaluation = evaluate_line("  3 u-   4 + ", Notation::Postfix, ResidualPolicy::Strict).unwrap();
    assert_eq!(evaluation.postfix.to_string(), "3 u- 4 +");
    assert_eq!(evaluation.value, 1);

    assert_eq!(evaluate_line("-5 2 *", Notation::Postfix, ResidualPolicy::Strict).unwrap()
                                                                              .value,
               -10);

    assert_eq!(evaluation_error("u* 3", Notation::Postfix),
               EvaluationError::UnknownToken { token: "u*".to_string() });
    assert_eq!(evaluation_error("( 1 )", Notation::Postfix),
               EvaluationError::UnknownToken { token: "(".to_string() });
}

#[test]
fn rendered_postfix_parses_to_the_same_tokens() {
    let postfix = convert_to_postfix("-(1 + 2) * +4 % 3").unwrap();
    let reread: Postfix = postfix.to_string().parse().unwrap();
    assert_eq!(reread, postfix);
}

#[test]
fn overflow_wraps() {
    assert_value("2147483647 + 1", -2_147_483_648);
    assert_value("65536 * 65536", 0);
    assert_value("-2147483647 - 2", 2_147_483_647);
    assert_eq!(evaluate_postfix(&[num(i32::MIN), num(-1), bin(OperatorKind::Div)]),
               Ok(i32::MIN));
    assert_eq!(evaluate_postfix(&[num(i32::MIN), num(-1), bin(OperatorKind::Rem)]),
               Ok(0));
    assert_eq!(evaluate_postfix(&[num(i32::MIN), un(OperatorKind::Sub)]), Ok(i32::MIN));
}

#[test]
fn errors_display_their_position() {
    assert_eq!(conversion_error("3 x").to_string(),
               "Error at position 2: Invalid operand 'x'.");
    assert_eq!(conversion_error("(1").position(), 0);
    assert_eq!(EvaluationError::DivisionByZero.to_string(), "Division by zero.");
}

#[test]
fn control_characters_separate_tokens() {
    assert_eq!(tokenize("1\x0b+\x012").unwrap(),
               vec![(Lexeme::Word("1".to_string()), 0),
                    (Lexeme::Plus, 2),
                    (Lexeme::Word("2".to_string()), 4)]);
    assert_value("\x0b7\x0b*\x1f6\x00", 42);
}

fn run_session(input: &str) -> String {
    let mut out = Vec::new();
    run_interactive(input.as_bytes(), &mut out, Notation::Infix, ResidualPolicy::Strict).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn session_prints_postfix_before_evaluation_errors() {
    assert_eq!(run_session("7/0\n1 2\n9 + 0\nq\n"),
               "Type an infix expression (to quit, type q)\n\
                >postfix = 7 0 /\n\
                Invalid expression\n\
                >postfix = 1 2\n\
                Invalid expression\n\
                >postfix = 9 0 +\n\
                9\n\
                >");
}

#[test]
fn session_skips_postfix_when_conversion_fails() {
    assert_eq!(run_session("3 x\n(1+2\n"),
               "Type an infix expression (to quit, type q)\n\
                >Invalid expression\n\
                >Invalid expression\n\
                >");
}

#[test]
fn report_line_returns_the_value() {
    let mut out = Vec::new();
    let value = report_line(&mut out, "(9*9-0+8*7*7)", Notation::Infix, ResidualPolicy::Strict).unwrap()
                                                                                             .unwrap();
    assert_eq!(value, 473);
    assert_eq!(String::from_utf8(out).unwrap(), "postfix = 9 9 * 0 - 8 7 * 7 * +\n473\n");

    let mut out = Vec::new();
    let outcome = report_line(&mut out, "1 2", Notation::Postfix, ResidualPolicy::Lenient).unwrap();
    assert_eq!(outcome.unwrap(), 2);
    assert_eq!(String::from_utf8(out).unwrap(), "postfix = 1 2\n2\n");
}
