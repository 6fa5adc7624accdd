use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use sprout::{interpreter::scope::Scope, repl, run};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// sprout is a small imperative scripting language. Run it without
/// arguments to start an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads the program from a file instead of the command line.
    #[arg(short, long, conflicts_with = "script")]
    file: Option<PathBuf>,

    /// Does not print the value returned by the program.
    #[arg(short, long)]
    quiet: bool,

    /// Source code to run.
    script: Option<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let script = match (args.file, args.script) {
        (Some(path), _) => match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        },
        (None, Some(script)) => script,
        (None, None) => {
            let scope = Scope::with_builtins();
            return match repl::start(io::stdin().lock(), io::stdout(), io::stderr(), &scope) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("{e}");
                    ExitCode::FAILURE
                },
            };
        },
    };

    match run(&script, &Scope::with_builtins()) {
        Ok(result) => {
            if !args.quiet
               && let Some(value) = result
            {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Installs a log subscriber writing to stderr, but only when `RUST_LOG` is
/// set.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}
