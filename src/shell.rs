use std::io::{self, BufRead, Write};

use log::debug;

use crate::{Evaluator, Notation, ResidualPolicy, to_postfix};

/// Converts and evaluates one line, writing each stage as it completes.
///
/// `postfix = <rendered>` is written as soon as the line has been read into a
/// postfix sequence, so it still appears when evaluation fails afterwards.
/// The value follows on its own line if evaluation succeeds. Nothing is
/// written for the failing stage; the error is returned instead.
///
/// The outer `Result` reports failures writing to `out`, the inner one
/// reports a rejected expression.
///
/// # Example
/// ```
/// use postfixer::{Notation, ResidualPolicy, shell::report_line};
///
/// let mut out = Vec::new();
/// let outcome = report_line(&mut out, "7/0", Notation::Infix, ResidualPolicy::Strict).unwrap();
///
/// assert!(outcome.is_err());
/// assert_eq!(String::from_utf8(out).unwrap(), "postfix = 7 0 /\n");
/// ```
pub fn report_line<W: Write>(out: &mut W,
                             line: &str,
                             notation: Notation,
                             policy: ResidualPolicy)
                             -> io::Result<Result<i32, Box<dyn std::error::Error>>> {
    let postfix = match to_postfix(line, notation) {
        Ok(postfix) => postfix,
        Err(e) => return Ok(Err(e)),
    };
    writeln!(out, "postfix = {postfix}")?;

    match Evaluator::new(policy).evaluate(&postfix) {
        Ok(value) => {
            writeln!(out, "{value}")?;
            Ok(Ok(value))
        },
        Err(e) => Ok(Err(e.into())),
    }
}

/// Runs the prompt loop until `q` or the end of `input`.
///
/// Every rejected line, whichever stage rejected it, is answered with
/// `Invalid expression`; the reason is logged at debug level.
///
/// # Errors
/// Returns an error if reading `input` or writing `out` fails.
pub fn run_interactive<R: BufRead, W: Write>(mut input: R,
                                             out: &mut W,
                                             notation: Notation,
                                             policy: ResidualPolicy)
                                             -> io::Result<()> {
    match notation {
        Notation::Infix => writeln!(out, "Type an infix expression (to quit, type q)")?,
        Notation::Postfix => writeln!(out, "Type a postfix expression (to quit, type q)")?,
    }

    let mut buf = String::new();
    loop {
        write!(out, ">")?;
        out.flush()?;

        buf.clear();
        if input.read_line(&mut buf)? == 0 {
            return Ok(());
        }

        let line = buf.trim();
        if line == "q" {
            return Ok(());
        }

        if let Err(e) = report_line(out, line, notation, policy)? {
            debug!("'{line}' rejected: {e}");
            writeln!(out, "Invalid expression")?;
        }
    }
}
