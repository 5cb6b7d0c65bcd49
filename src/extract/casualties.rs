//! Casualty and impact figure extraction
//!
//! Pulls numbers out of an article together with the context that tells
//! us what they count: deaths, injuries, or people otherwise affected.
//! Figures are kept as the raw matched strings ("12", "1,500", "2.5")
//! since magnitude words like "million" or "lakh" qualify them in ways a
//! plain integer cannot carry.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number followed by death words: "12 people died", "3 killed"
static DEATH_BEFORE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(?:people?|persons?|individuals?)?\s*(?:died|dead|killed|death|deaths)")
        .expect("valid death pattern")
});

/// Death words followed by a number: "death toll rose to 18"
static DEATH_AFTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:died|dead|killed|death toll|deaths).*?(\d+)").expect("valid death pattern")
});

/// Number followed by injury words: "30 people injured"
static INJURED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(?:people?|persons?)?\s*(?:injured|wounded|hurt)")
        .expect("valid injury pattern")
});

/// Number (with separators/decimals) followed by impact words:
/// "50,000 people marooned", "2.5 million affected"
static AFFECTED_BEFORE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(\d+(?:,\d+)*(?:\.\d+)?)\s*(?:million|lakh|thousand|people?|persons?|families)?\s*(?:affected|stranded|marooned|displaced|impacted)",
    )
    .expect("valid impact pattern")
});

/// Impact words followed by a number: "displaced nearly 4,000"
static AFFECTED_AFTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:affected|stranded|marooned|displaced).*?(\d+(?:,\d+)*(?:\.\d+)?)\s*(?:million|lakh|thousand|people?|families)?",
    )
    .expect("valid impact pattern")
});

/// Casualty and impact figures extracted from one article
///
/// Each list holds de-duplicated raw figure strings in sorted order. An
/// empty list means the article did not mention that category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasualtyFigures {
    pub deaths: Vec<String>,
    pub injured: Vec<String>,
    pub affected: Vec<String>,
}

impl CasualtyFigures {
    /// Human rendering of the death figures
    pub fn deaths_display(&self) -> String {
        if self.deaths.is_empty() {
            "0 or not mentioned".to_string()
        } else {
            self.deaths.join(", ")
        }
    }

    /// Human rendering of the injury figures
    pub fn injured_display(&self) -> String {
        if self.injured.is_empty() {
            "not mentioned".to_string()
        } else {
            self.injured.join(", ")
        }
    }

    /// Human rendering of the affected figures
    pub fn affected_display(&self) -> String {
        if self.affected.is_empty() {
            "not mentioned".to_string()
        } else {
            self.affected.join(", ")
        }
    }
}

/// Extract categorized casualty figures from article text
///
/// Both orderings are tried for deaths and affected counts since news
/// copy phrases them either way ("12 died" vs "death toll reached 12").
pub fn extract_casualties(text: &str) -> CasualtyFigures {
    let text_lower = text.to_lowercase();

    let mut deaths = BTreeSet::new();
    for cap in DEATH_BEFORE.captures_iter(&text_lower) {
        deaths.insert(cap[1].to_string());
    }
    for cap in DEATH_AFTER.captures_iter(&text_lower) {
        deaths.insert(cap[1].to_string());
    }

    let mut injured = BTreeSet::new();
    for cap in INJURED.captures_iter(&text_lower) {
        injured.insert(cap[1].to_string());
    }

    let mut affected = BTreeSet::new();
    for cap in AFFECTED_BEFORE.captures_iter(&text_lower) {
        affected.insert(cap[1].to_string());
    }
    for cap in AFFECTED_AFTER.captures_iter(&text_lower) {
        affected.insert(cap[1].to_string());
    }

    CasualtyFigures {
        deaths: deaths.into_iter().collect(),
        injured: injured.into_iter().collect(),
        affected: affected.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deaths_number_first() {
        let figures = extract_casualties("At least 12 people died in the flooding.");
        assert!(figures.deaths.contains(&"12".to_string()));
    }

    #[test]
    fn test_deaths_number_after() {
        let figures = extract_casualties("The death toll climbed to 18 on Friday.");
        assert!(figures.deaths.contains(&"18".to_string()));
    }

    #[test]
    fn test_injured() {
        let figures = extract_casualties("Officials said 30 people injured were taken to hospital.");
        assert_eq!(figures.injured, vec!["30".to_string()]);
    }

    #[test]
    fn test_affected_with_separator() {
        let figures = extract_casualties("Nearly 50,000 people marooned in low-lying areas.");
        assert!(figures.affected.contains(&"50,000".to_string()));
    }

    #[test]
    fn test_affected_with_magnitude() {
        let figures = extract_casualties("About 2.5 million affected across the region.");
        assert!(figures.affected.contains(&"2.5".to_string()));
    }

    #[test]
    fn test_deduplication() {
        let figures =
            extract_casualties("5 killed on Monday. Reports confirmed 5 dead by evening.");
        assert_eq!(
            figures.deaths.iter().filter(|d| d.as_str() == "5").count(),
            1
        );
    }

    #[test]
    fn test_empty_text() {
        let figures = extract_casualties("The river level is receding.");
        assert!(figures.deaths.is_empty());
        assert!(figures.injured.is_empty());
        assert!(figures.affected.is_empty());
        assert_eq!(figures.deaths_display(), "0 or not mentioned");
        assert_eq!(figures.injured_display(), "not mentioned");
        assert_eq!(figures.affected_display(), "not mentioned");
    }
}
