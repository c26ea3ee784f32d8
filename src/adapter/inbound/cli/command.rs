//! Command-line interface definitions.
//!
//! Defines the CLI structure for the rota driver using `clap`. The driver
//! validates settings files and runs solve sessions with scripted edits.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default settings file looked up in the working directory.
pub const DEFAULT_CONFIG: &str = "rota.toml";

/// Minimum-cost weekly staff rostering
#[derive(Parser, Debug)]
#[command(name = "rota")]
#[command(version, about)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the rota CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a settings file and print a summary
    Check(ConfigPathArg),

    /// Solve the configured week, optionally applying edits in order
    Solve(SolveArgs),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to settings file
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

/// Arguments for the `solve` subcommand.
#[derive(Parser, Debug)]
pub struct SolveArgs {
    /// Path to settings file (the built-in seed week is used when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Edit command as JSON, e.g. '{"kind":"adjust_day_demand","day":"Fri","delta":-1}'
    #[arg(short, long = "edit", value_name = "JSON")]
    pub edits: Vec<String>,
}
