//! Scan command: batch-process an article directory

use colored::Colorize;

use crate::articles;
use crate::config::get_config;
use crate::extract::process_article;
use crate::interfaces::cli::CliError;
use crate::report::{DisasterReport, text};

/// Process every article in a directory and print the reports
pub fn scan_articles(dir: Option<String>, json: bool) -> Result<(), CliError> {
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
            "{} No .{} articles found in '{}'",
            "ℹ".bold().blue(),
            config.articles.extension,
            dir.cyan()
        );
        return Ok(());
    }

    println!(
        "Found {} article(s) to process...\n",
        batch.articles.len().to_string().green()
    );

    let reports: Vec<DisasterReport> = batch
        .articles
        .iter()
        .map(|article| process_article(article, &config.extraction))
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&reports)
            .map_err(|e| CliError::CommandError(format!("Failed to serialize reports: {}", e)))?;
        println!("{}", out);
    } else {
        for report in &reports {
            println!("{}", text::render(report));
        }
    }

    Ok(())
}
