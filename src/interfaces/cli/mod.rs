//! CLI interface module
//!
//! This module provides command-line interface functionality for
//! disasterscan.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use commands::{config_management, export_reports, extract_article, scan_articles};

#[derive(Debug)]
pub enum CliError {
    FileError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::FileError(msg) => format!("File error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::FileError(msg) => {
                format!("{} {}", "File error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::DisasterScanError> for CliError {
    fn from(err: crate::errors::DisasterScanError) -> Self {
        match err {
            crate::errors::DisasterScanError::FileOperation(_)
            | crate::errors::DisasterScanError::DirectoryNotFound(_) => {
                CliError::FileError(err.to_string())
            }
            _ => CliError::CommandError(err.to_string()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Scan { dir, json } => scan_articles(dir, json),

        Commands::Extract { file, json } => extract_article(file, json),

        Commands::Export {
            dir,
            output,
            format,
        } => export_reports(dir, output, format),

        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => {
                config_management::config_generate(output_path, force)
            }
        },
    }
}
