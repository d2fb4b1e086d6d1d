//! Planilla CLI
//!
//! Command-line tools for Planilla data directories.
//!
//! # Commands
//!
//! - `dump` - Print every row of a table file as stored
//! - `verify` - Check the employee and user tables for unreadable rows
//! - `ledger` - Show the persisted ID ledger
//! - `next-id` - Issue the next ID for a name
//! - `employees` - List employees
//! - `users` - List users

mod commands;

use clap::{Parser, Subcommand};
use commands::OutputFormat;
use planilla_core::PayrollType;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Planilla command-line data tools.
#[derive(Parser)]
#[command(name = "planilla")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the data directory
    #[arg(global = true, short, long, alias = "data-dir", default_value = ".")]
    path: PathBuf,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every row of a table file as stored
    Dump {
        /// Table file, relative to the data directory
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check the employee and user tables
    Verify,

    /// Show the persisted ID ledger
    Ledger {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Issue the next ID for a name
    NextId {
        /// Ledger name, usually a table file name
        name: String,
    },

    /// List employees
    Employees {
        /// Only employees with this pay frequency (QUINCENAL, MENSUAL)
        #[arg(short = 't', long)]
        payroll_type: Option<PayrollType>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List users
    Users {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Dump { file, format } => {
            commands::dump::run(&cli.path, &file, format)?;
        }
        Commands::Verify => {
            commands::verify::run(&cli.path)?;
        }
        Commands::Ledger { format } => {
            commands::ledger::run(&cli.path, format)?;
        }
        Commands::NextId { name } => {
            commands::next_id::run(&cli.path, &name)?;
        }
        Commands::Employees {
            payroll_type,
            format,
        } => {
            commands::list::employees(&cli.path, payroll_type, format)?;
        }
        Commands::Users { format } => {
            commands::list::users(&cli.path, format)?;
        }
        Commands::Version => {
            println!("Planilla CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Planilla Core v{}", planilla_core::VERSION);
        }
    }

    Ok(())
}
