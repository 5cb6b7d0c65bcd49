//! Export command: batch-extract a directory into a flat file

use std::fs::File;
use std::io::BufWriter;

use chrono::Utc;
use colored::Colorize;

use crate::articles;
use crate::cli::ExportFormat;
use crate::config::get_config;
use crate::extract::process_article;
use crate::interfaces::cli::CliError;
use crate::report::DisasterReport;
use crate::utils::csv_handler;

/// Extract every article in a directory and write the reports to a file
pub fn export_reports(
    dir: Option<String>,
    output: Option<String>,
    format: ExportFormat,
) -> Result<(), CliError> {
    let config = get_config();
    let dir = dir.unwrap_or_else(|| config.articles.dir.clone());

    let batch = articles::load_directory(&dir, &config.articles.extension)?;

    for failure in &batch.failures {
        println!(
            "{} Skipped '{}': {}",
            "✗".bold().red(),
            failure.filename.cyan(),
            failure.reason
        );
    }

    if batch.articles.is_empty() {
        println!(
            "{} No .{} articles found in '{}', nothing to export",
            "ℹ".bold().blue(),
            config.articles.extension,
            dir.cyan()
        );
        return Ok(());
    }

    let reports: Vec<DisasterReport> = batch
        .articles
        .iter()
        .map(|article| process_article(article, &config.extraction))
        .collect();

    let output_path = output.unwrap_or_else(|| match format {
        ExportFormat::Csv => csv_handler::generate_export_filename(),
        ExportFormat::Json => format!(
            "disaster_reports_{}.json",
            Utc::now().format("%Y%m%d_%H%M%S")
        ),
    });

    match format {
        ExportFormat::Csv => {
            csv_handler::export_to_csv(&reports, &output_path)
                .map_err(|e| CliError::CommandError(format!("Failed to export CSV: {}", e)))?;
        }
        ExportFormat::Json => {
            let file = File::create(&output_path).map_err(|e| {
                CliError::CommandError(format!(
                    "Failed to create export file '{}': {}",
                    output_path, e
                ))
            })?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, &reports)
                .map_err(|e| CliError::CommandError(format!("Failed to export JSON: {}", e)))?;
        }
    }

    println!(
        "{} Exported {} report(s) to: {}",
        "✓".bold().green(),
        reports.len().to_string().green(),
        output_path.cyan()
    );

    Ok(())
}
