//! Disaster type classification
//!
//! Keyword-based classification of an article. Flood reporting is the
//! only category the pipeline currently recognizes; anything without a
//! flood keyword stays `Unknown`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Classification of the disaster an article reports on
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DisasterType {
    Flood,
    #[default]
    Unknown,
}

/// Classify an article by scanning for flood-related keywords
///
/// Matching is a case-insensitive substring search, so "flood" also
/// covers headlines like "Floods devastate the north".
pub fn detect_disaster_type(text: &str, keywords: &[String]) -> DisasterType {
    let text_lower = text.to_lowercase();
    let found = keywords
        .iter()
        .any(|kw| !kw.is_empty() && text_lower.contains(&kw.to_lowercase()));

    if found {
        DisasterType::Flood
    } else {
        DisasterType::Unknown
    }
}
