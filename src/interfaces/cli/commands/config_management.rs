//! Configuration management commands

use std::fs;
use std::path::Path;

use colored::Colorize;

use crate::config::AppConfig;
use crate::interfaces::cli::CliError;

/// Generate example configuration file
pub fn config_generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| "disasterscan.example.toml".to_string());

    if Path::new(&path).exists() && !force {
        return Err(CliError::CommandError(format!(
            "File '{}' already exists (use --force to overwrite)",
            path
        )));
    }

    let content = AppConfig::generate_sample_config();
    fs::write(&path, content).map_err(|e| {
        CliError::CommandError(format!("Unable to write configuration file: {}", e))
    })?;

    println!(
        "{} Generated configuration file: {}",
        "✓".bold().green(),
        path.cyan()
    );

    Ok(())
}
