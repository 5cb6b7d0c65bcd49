//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for disasterscan using clap's
//! derive macros.

use clap::{Parser, Subcommand, ValueEnum};
use strum::Display;

/// Disasterscan - structured disaster information from news articles
#[derive(Parser)]
#[command(name = "disasterscan")]
#[command(version)]
#[command(about = "Extract structured disaster information from news article text", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Process every article in a directory and print reports
    Scan {
        /// Article directory (default: from configuration)
        dir: Option<String>,

        /// Output a JSON array instead of console reports
        #[arg(long)]
        json: bool,
    },

    /// Process a single article file
    Extract {
        /// Article file path
        file: String,

        /// Output JSON instead of a console report
        #[arg(long)]
        json: bool,
    },

    /// Batch-extract a directory and write the results to a file
    Export {
        /// Article directory (default: from configuration)
        dir: Option<String>,

        /// Output file path (default: timestamped name)
        #[arg(long, short)]
        output: Option<String>,

        /// Output file format
        #[arg(long, value_enum, default_value_t)]
        format: ExportFormat,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Export file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: disasterscan.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
