use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use log::error;
use reckon::{error::StreamError, interpreter::session::Session};

const BANNER: &str = "\
Welcome to reckon, a simple calculator.
Enter expressions followed by ; and [Enter] to print the result. Scientific e notation (1e2 = 100) can be used.
Operators +, -, *, / and % (on integers) are available. Variables are declared with 'let', e.g. let x = 5;
and can be reassigned with x = 7;
Predefined names pi, e and k = 1000 and the functions sqrt(x) and pow(x, i) = x^i are also available.
To quit, type 'quit' followed by [Enter].";

/// reckon is an interactive calculator with variables, `sqrt` and `pow`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Suppresses the banner, prompts and recovery hints.
    #[arg(short, long)]
    quiet: bool,

    /// Reads statements from this file instead of standard input. Implies
    /// `--quiet`.
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = Args::parse();

    let result = match &args.file {
        Some(path) => match File::open(path) {
            Ok(file) => run(BufReader::new(file), false),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::from(1);
            },
        },
        None => run(io::stdin().lock(), !args.quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("session aborted: {e}");
            eprintln!("exception: {e}");
            ExitCode::from(e.exit_status())
        },
    }
}

fn run<R: BufRead>(input: R, interactive: bool) -> Result<(), StreamError> {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    if interactive {
        writeln!(out, "{BANNER}")?;
    }

    Session::new(input).interactive(interactive).run(&mut out, &mut err)
}
