//! # Drywall CLI
//!
//! Command-line front end for drywall framing capacity checks.
//!
//! # Commands
//!
//! - `check <FILE>`: run every item of a project job file
//! - `ceiling`: one-off ceiling runner system check
//! - `stud`: one-off wall stud check
//! - `catalog [KIND]`: list catalog components
//! - `new <FILE>`: write a starter project job file
//!
//! Logs go to stderr; results go to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

use commands::{CatalogKind, CeilingArgs, OutputArgs, StudArgs};
use error::CliExitCode;

/// Drywall framing capacity checker
#[derive(Parser)]
#[command(name = "drywall")]
#[command(version)]
#[command(about = "Structural checks for drywall ceiling runners and wall studs")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every item in a project job file
    Check {
        /// Project job file (JSON)
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Check a ceiling runner system
    Ceiling(CeilingArgs),
    /// Check a wall stud
    Stud(StudArgs),
    /// List catalog components
    Catalog {
        #[arg(value_enum)]
        kind: Option<CatalogKind>,
    },
    /// Write a starter project job file
    New {
        file: PathBuf,

        #[arg(long, default_value = "New project")]
        name: String,

        #[arg(long, default_value = "")]
        author: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match &cli.command {
        Commands::Check { file, output } => commands::check(file, output),
        Commands::Ceiling(args) => commands::ceiling(args),
        Commands::Stud(args) => commands::stud(args),
        Commands::Catalog { kind } => commands::list_catalog(*kind),
        Commands::New {
            file,
            name,
            author,
            force,
        } => commands::new_project(file, name, author, *force),
    };

    match outcome {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("error [{}]: {}", e.code(), e);
            CliExitCode::Error.into()
        }
    }
}
