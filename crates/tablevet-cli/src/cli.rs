//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tablevet: data-quality vetting for post-ETL tabular outputs
#[derive(Parser)]
#[command(name = "tablevet")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// If specified, write logs to this file
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Set logging level (DEBUG, INFO, WARNING, ERROR, or CRITICAL)
    #[arg(long, global = true, default_value = "INFO")]
    pub loglevel: LogLevel,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export dataset catalog metadata as a YAML document
    ExportMetadata {
        /// Path to the file where the YAML output should be written
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,
    },

    /// Run the data-quality harness against materialized outputs
    Validate {
        /// Directory holding the ETL output tree (<dir>/<frequency>/<dataset>.csv)
        #[arg(value_name = "DATA_DIR")]
        data_dir: PathBuf,

        /// Aggregation frequency to validate (raw, monthly, annual)
        #[arg(short, long, default_value = "annual")]
        frequency: String,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Logging verbosity choice.
#[derive(Clone, Copy, Debug, Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// The tracing filter directive this level maps to. tracing has no
    /// CRITICAL level; it maps to ERROR.
    pub fn filter(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            _ => Err(format!(
                "Unknown log level: {}. Use DEBUG, INFO, WARNING, ERROR, or CRITICAL.",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARNING"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}
