use std::{
    env,
    fs::read_to_string,
    io,
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::{ArgAction, Parser};
use monkey::{
    parse, render_error,
    repl::{self, ReplMode},
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Tokenizer and parser front-end for the Monkey language.
#[derive(Parser, Debug)]
#[command(name = "monkey", version)]
struct Cli {
    /// Source file to parse. Starts an interactive session when omitted.
    file: Option<PathBuf>,

    /// Parse REPL lines instead of echoing their tokens.
    #[arg(long)]
    parse: bool,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(io::stderr)
        .init();

    match cli.file {
        Some(file) => parse_file(file),
        None => run_repl(if cli.parse {
            ReplMode::Parse
        } else {
            ReplMode::Tokens
        }),
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "monkey=warn",
        1 => "monkey=debug",
        _ => "monkey=trace",
    }
}

fn parse_file(file: PathBuf) -> ExitCode {
    let source = match read_to_string(&file) {
        Ok(source) => source,
        Err(err) => {
            error!("failed to read {}: {}", file.display(), err);
            eprintln!("Failed to read {}: {}", file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let file_name = file.to_string_lossy().to_string();
    let start = Instant::now();
    let (program, errors) = parse(&source, Some(file_name.clone()));
    debug!("parsed {} in {:?}", file_name, start.elapsed());

    print!("{}", program);
    if !program.is_empty() {
        println!();
    }

    if errors.is_empty() {
        return ExitCode::SUCCESS;
    }

    for error in &errors {
        eprint!("{}", render_error(error, &source));
    }
    eprintln!("{} syntax error(s)", errors.len());
    ExitCode::FAILURE
}

fn run_repl(mode: ReplMode) -> ExitCode {
    let user = env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| String::from("there"));

    println!("Hello, {}! This is the Monkey programming language!", user);
    println!("Feel free to type in commands");

    let stdin = io::stdin();
    match repl::start(stdin.lock(), io::stdout(), mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("repl failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
