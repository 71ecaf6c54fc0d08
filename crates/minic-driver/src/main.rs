//! minicc - command-line driver for the minic parsing core.
//!
//! Reads a source file, lexes and parses it, and optionally prints the
//! token stream and/or the resulting AST.

mod error;
mod print;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use error::{DriverError, Result};
use minic_lex::Lexer;
use minic_par::Parser;
use minic_util::Handler;

/// minicc - parse a minic source file and inspect the result.
#[derive(ClapParser, Debug)]
#[command(name = "minicc")]
#[command(author = "minic contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexes and parses a minic source file", long_about = None)]
struct Cli {
    /// Source file to parse
    input: PathBuf,

    /// Enable verbose (debug-level) logging
    #[arg(short, long, global = true, env = "MINICC_VERBOSE")]
    verbose: bool,

    /// Print the token stream produced by the lexer
    #[arg(long)]
    emit_tokens: bool,

    /// Print the AST produced by the parser
    #[arg(long)]
    emit_ast: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))?;

    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let source = std::fs::read_to_string(&cli.input).map_err(|source| DriverError::ReadSource {
        path: cli.input.display().to_string(),
        source,
    })?;

    let handler = Handler::new();

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let tokens = Lexer::new(&source, &handler).tokenize();
        let program = Parser::new(tokens.clone(), &handler).parse();
        (tokens, program)
    }));

    let (tokens, program) = match result {
        Ok(output) => output,
        Err(_) => {
            for diagnostic in handler.diagnostics() {
                eprintln!("{diagnostic}");
            }
            return Err(DriverError::ParseFailed);
        }
    };

    if cli.emit_tokens {
        print!("{}", print::format_tokens(&tokens));
    }
    if cli.emit_ast {
        print!("{}", print::format_program(&program));
    }

    Ok(())
}
