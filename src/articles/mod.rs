//! Article ingestion
//!
//! Loads raw news article text from disk. Articles are plain UTF-8 text
//! files collected ahead of time; the scanner only accepts the configured
//! extension and skips everything else in the directory.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{DisasterScanError, Result};

/// A single raw news article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub filename: String,
    pub text: String,
}

/// One file the directory scanner could not read
#[derive(Debug, Clone)]
pub struct LoadFailure {
    pub filename: String,
    pub reason: String,
}

/// Result of scanning an article directory
///
/// Unreadable files do not abort the batch; they are collected in
/// `failures` so the caller can report them and keep going.
#[derive(Debug, Default)]
pub struct ArticleBatch {
    pub articles: Vec<Article>,
    pub failures: Vec<LoadFailure>,
}

/// Load a single article from a text file
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Article> {
    let path = path.as_ref();
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
        .unwrap_or_else(|| path.display().to_string());

    let text = fs::read_to_string(path).map_err(|e| {
        DisasterScanError::file_operation(format!("Failed to read '{}': {}", path.display(), e))
    })?;

    Ok(Article { filename, text })
}

/// Load every article with the given extension from a directory
///
/// Entries are processed in filename order so batch output is stable.
pub fn load_directory<P: AsRef<Path>>(dir: P, extension: &str) -> Result<ArticleBatch> {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        return Err(DisasterScanError::directory_not_found(format!(
            "Directory '{}' not found",
            dir.display()
        )));
    }

    let mut paths: Vec<_> = fs::read_dir(dir)
        .map_err(|e| {
            DisasterScanError::file_operation(format!(
                "Failed to read directory '{}': {}",
                dir.display(),
                e
            ))
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .collect();
    paths.sort();

    let mut batch = ArticleBatch::default();
    for path in paths {
        match load_file(&path) {
            Ok(article) => {
                debug!("Loaded article: {}", article.filename);
                batch.articles.push(article);
            }
            Err(e) => {
                warn!("Skipping article '{}': {}", path.display(), e);
                batch.failures.push(LoadFailure {
                    filename: path.display().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(batch)
}
