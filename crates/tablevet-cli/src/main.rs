//! tablevet CLI - data-quality vetting for post-ETL tabular outputs.

mod cli;
mod commands;

use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, LogLevel};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.loglevel, cli.logfile.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::ExportMetadata { output } => commands::export::run(output),

        Commands::Validate {
            data_dir,
            frequency,
            json,
        } => commands::validate::run(data_dir, &frequency, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing. RUST_LOG overrides --loglevel when set; --logfile
/// redirects output from stderr to the given file.
fn init_logging(
    level: LogLevel,
    logfile: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.filter()));

    match logfile {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("cannot open logfile '{}': {}", path.display(), e))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}
