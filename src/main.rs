use std::{fs, io};

use clap::Parser;
use log::error;
use postfixer::{
    Notation, ResidualPolicy,
    shell::{report_line, run_interactive},
};

/// postfixer converts integer arithmetic from infix to postfix notation and
/// evaluates it. Without an expression it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells postfixer to read expressions from a file, one per line, instead
    /// of taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Expressions are already written in postfix notation, e.g. `3 u- 4 +`.
    #[arg(short, long)]
    postfix: bool,

    /// Lenient mode returns the topmost value when an expression leaves
    /// several values on the stack, instead of rejecting it.
    #[arg(short, long)]
    lenient: bool,

    contents: Option<String>,
}

/// Evaluates one expression and prints the outcome. Returns `false` on error.
fn run_line(line: &str, notation: Notation, policy: ResidualPolicy) -> bool {
    match report_line(&mut io::stdout(), line, notation, policy) {
        Ok(Ok(_)) => true,
        Ok(Err(e)) => {
            eprintln!("{e}");
            false
        },
        Err(e) => {
            error!("Failed to write the result: {e}");
            false
        },
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let notation = if args.postfix {
        Notation::Postfix
    } else {
        Notation::Infix
    };
    let policy = if args.lenient {
        ResidualPolicy::Lenient
    } else {
        ResidualPolicy::Strict
    };

    let Some(contents) = args.contents else {
        if let Err(e) = run_interactive(io::stdin().lock(), &mut io::stdout(), notation, policy) {
            error!("Interactive session failed: {e}");
            std::process::exit(1);
        }
        return;
    };

    let succeeded = if args.file {
        let script = fs::read_to_string(&contents).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                         std::process::exit(1);
                     });

        script.lines()
              .filter(|line| !line.trim().is_empty())
              .fold(true, |ok, line| run_line(line, notation, policy) && ok)
    } else {
        run_line(&contents, notation, policy)
    };

    if !succeeded {
        std::process::exit(1);
    }
}
