//! `pyprojectsort` command line entry point.
//!
//! Loads the target file, canonicalizes it and overwrites it in place.
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use clap::Parser;
use pyprojectsort::{sort_file, Error, SortOptions, DEFAULT_CONFIG};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pyprojectsort")]
#[command(version, about = "Formatter for pyproject.toml files", long_about = None)]
struct Cli {
    /// Configuration file to canonicalize
    #[arg(default_value = DEFAULT_CONFIG)]
    file: PathBuf,

    /// Rewrite top-level keys: drop `--`, turn `-` into `_`
    #[arg(long)]
    normalize_keys: bool,

    /// Write arrays one element per line
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pyprojectsort=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = SortOptions::new()
        .with_normalize_keys(cli.normalize_keys)
        .with_pretty(cli.pretty);

    match sort_file(&cli.file, &options) {
        Ok(changed) => {
            tracing::debug!(file = %cli.file.display(), changed, "done");
            ExitCode::SUCCESS
        }
        Err(err @ Error::MissingFile(_)) => {
            println!("{}", err);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
