use std::{
    fs,
    io::{self, BufRead, Write},
};

use anyhow::{Context, Result};
use clap::Parser;
use quill::{get_result, init_tracing, interpreter::value::environment::Environment};

const PROMPT: &str = ">> ";

/// quill is a small, dynamically typed expression language with first-class
/// functions, arrays and maps.
///
/// Without arguments, quill starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quill to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// The program to run, or its path when `--file` is given.
    contents: Option<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let Some(contents) = args.contents else {
        return repl();
    };

    let script = if args.file {
        fs::read_to_string(&contents).with_context(|| {
                                          format!("failed to read the input file '{contents}'")
                                      })?
    } else {
        contents
    };

    run(&script, &Environment::new());
    Ok(())
}

/// Evaluates one source text and reports its outcome: the rendering of a
/// non-null result on stdout, syntax or runtime errors on stderr.
fn run(source: &str, env: &Environment) {
    match get_result(source, env) {
        Ok(result) if result.is_error() => eprintln!("{}", result.inspect()),
        Ok(result) if result.is_null() => {},
        Ok(result) => println!("{}", result.inspect()),
        Err(errors) => eprintln!("{errors}"),
    }
}

/// Reads lines from stdin and evaluates each one in a shared environment
/// until end of input.
fn repl() -> Result<()> {
    let env = Environment::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line).context("failed to read from stdin")? == 0 {
            return Ok(());
        }

        run(&line, &env);
    }
}
