mod repl;
mod runner;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, ensure, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const SOURCE_EXTENSION: &str = "slp";

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Evaluate a single expression and exit
    #[arg(short, long, conflicts_with = "path")]
    expression: Option<String>,
    /// Program file to evaluate (must end in `.slp`)
    path: Option<PathBuf>,
    /// Keep definitions in the REPL after an evaluation error
    #[arg(long)]
    keep_environment: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,slisp_runner=info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn check_extension(path: &Path) -> anyhow::Result<()> {
    ensure!(
        path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION),
        "{} is not a .{SOURCE_EXTENSION} file",
        path.display()
    );
    Ok(())
}

fn execute(source: impl Read) -> anyhow::Result<()> {
    // Interpreter errors hold `Rc` values, so they cross into anyhow as text.
    let result = runner::execute(source).map_err(|error| anyhow!("{error}"))?;
    if let Some(line) = result {
        println!("{line}");
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(expression) = cli.expression {
        return execute(expression.as_bytes());
    }

    match cli.path {
        None => repl::start(cli.keep_environment)?,
        Some(path) => {
            check_extension(&path)?;
            let file = File::open(&path)
                .with_context(|| format!("could not open {}", path.display()))?;
            execute(BufReader::new(file))?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
