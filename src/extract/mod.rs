//! Information extraction pipeline
//!
//! Turns raw article text into a structured disaster report. Each stage
//! is independent and infallible over arbitrary text; I/O problems are
//! the ingestion layer's business.
//!
//! - `disaster_type`: keyword classification
//! - `casualties`: death/injury/impact figures
//! - `locations`: district and upazila extraction
//! - `dates`: event date selection

pub mod casualties;
pub mod dates;
pub mod disaster_type;
pub mod locations;

pub use casualties::{CasualtyFigures, extract_casualties};
pub use dates::{EventDate, extract_event_date};
pub use disaster_type::{DisasterType, detect_disaster_type};
pub use locations::{Locations, extract_locations};

use tracing::debug;

use crate::articles::Article;
use crate::config::ExtractionConfig;
use crate::report::DisasterReport;

/// Run the full extraction pipeline over one article
pub fn process_article(article: &Article, config: &ExtractionConfig) -> DisasterReport {
    debug!("Processing article: {}", article.filename);

    let disaster_type = detect_disaster_type(&article.text, &config.flood_keywords);
    let casualties = extract_casualties(&article.text);
    let locations = extract_locations(&article.text, config.context_window);
    let event_date = extract_event_date(&article.text);

    DisasterReport {
        article: article.filename.clone(),
        disaster_type,
        event_date,
        locations,
        casualties,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(text: &str) -> Article {
        Article {
            filename: "test.txt".to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_process_article_end_to_end() {
        let text = "At least 12 people died as monsoon floodwater inundated Kurigram district \
                    on August 21, 2017. The worst-hit upazilas -- Chilmari, Ulipur, and \
                    Nageshwari. Nearly 50,000 people marooned across the region.";
        let report = process_article(&article(text), &ExtractionConfig::default());

        assert_eq!(report.article, "test.txt");
        assert_eq!(report.disaster_type, DisasterType::Flood);
        assert_eq!(
            report.event_date,
            EventDate::Explicit("August 21, 2017".to_string())
        );
        assert!(report.locations.districts.contains(&"Kurigram".to_string()));
        assert!(report.locations.upazilas.contains(&"Ulipur".to_string()));
        assert!(report.casualties.deaths.contains(&"12".to_string()));
        assert!(report.casualties.affected.contains(&"50,000".to_string()));
    }

    #[test]
    fn test_process_article_empty_text() {
        let report = process_article(&article(""), &ExtractionConfig::default());
        assert_eq!(report.disaster_type, DisasterType::Unknown);
        assert_eq!(report.event_date, EventDate::Unspecified);
        assert!(report.locations.districts.is_empty());
        assert!(report.casualties.deaths.is_empty());
    }
}
