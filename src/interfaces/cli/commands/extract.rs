//! Extract command: process a single article file

use crate::articles;
use crate::config::get_config;
use crate::extract::process_article;
use crate::interfaces::cli::CliError;
use crate::report::text;

/// Process one article file and print its report
pub fn extract_article(file: String, json: bool) -> Result<(), CliError> {
    let config = get_config();

    let article = articles::load_file(&file)?;
    let report = process_article(&article, &config.extraction);

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::CommandError(format!("Failed to serialize report: {}", e)))?;
        println!("{}", out);
    } else {
        println!("{}", text::render(&report));
    }

    Ok(())
}
