use std::{fs, process::ExitCode};

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;
use yardcalc::{
    compile,
    error::CalcResult,
    interpreter::{
        evaluator::Context,
        render::{parenthesize, postfix_notation},
    },
};

/// yardcalc evaluates arithmetic expressions such as `(2 + 3) * 4 ^ 2`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells yardcalc to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Number of fractional digits printed for each result.
    #[arg(short, long, default_value_t = 6)]
    precision: usize,

    /// Reports the last value instead of failing when an expression leaves
    /// several values behind, e.g. `2 3`.
    #[arg(long)]
    lenient: bool,

    /// Prints the postfix form of the expression instead of its value.
    #[arg(long, conflicts_with = "explain")]
    rpn: bool,

    /// Prints the fully-parenthesized expression next to its value.
    #[arg(long, conflicts_with = "lenient")]
    explain: bool,

    /// Enables debug logging on stderr. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    /// The expression, or the script path with `--file`. May start with `-`.
    #[arg(allow_hyphen_values = true)]
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let Some(contents) = args.contents.as_deref() else {
        println!("{}", Args::command().render_usage());
        return ExitCode::SUCCESS;
    };

    let context = if args.lenient {
        Context::lenient()
    } else {
        Context::new()
    };

    if !args.file {
        return match run(contents, &args, &context) {
            Ok(output) => {
                println!("{output}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let Ok(script) = fs::read_to_string(contents) else {
        eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
        return ExitCode::FAILURE;
    };

    for (index, line) in script.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match run(line, &args, &context) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                eprintln!("Error on line {}: {e}", index + 1);
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}

/// Evaluates one expression and formats it according to the flags.
fn run(expression: &str, args: &Args, context: &Context) -> CalcResult<String> {
    let postfix = compile(expression)?;
    if args.rpn {
        return Ok(postfix_notation(&postfix));
    }

    let value = context.eval_postfix(postfix.iter().copied())?;
    let precision = args.precision;
    if args.explain {
        let infix = parenthesize(&postfix)?;
        return Ok(format!("{infix} = {value:.precision$}"));
    }
    Ok(format!("{value:.precision$}"))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}
