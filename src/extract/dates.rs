//! Event date extraction
//!
//! News articles usually carry several dates (publication, background,
//! the event itself). The event date is taken from the first date phrase
//! introduced by a temporal preposition; without one, the first date
//! mention is used as a guess and flagged as estimated.

use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Date phrase introduced by a temporal preposition:
/// "on August 21", "since August 20, 2017"
static EVENT_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:on|since|from|during)\s+([A-Z][a-z]+\s+\d{1,2}(?:,?\s+\d{4})?)")
        .expect("valid event date pattern")
});

/// Any month-name date mention: "August 21", "21 August 2017"
static DATE_MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(?:,\s*\d{4})?|\d{1,2}\s+(?:January|February|March|April|May|June|July|August|September|October|November|December)(?:\s+\d{4})?)\b",
    )
    .expect("valid date mention pattern")
});

/// The date an article's disaster event happened on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum EventDate {
    /// Date phrase anchored by a temporal preposition
    Explicit(String),
    /// Best guess: the first date mentioned anywhere in the article
    Estimated(String),
    /// No usable date mention found
    Unspecified,
}

impl EventDate {
    /// The raw date phrase, if any
    pub fn phrase(&self) -> Option<&str> {
        match self {
            EventDate::Explicit(phrase) | EventDate::Estimated(phrase) => Some(phrase),
            EventDate::Unspecified => None,
        }
    }

    /// Calendar date, when the phrase carries a year
    pub fn normalized(&self) -> Option<NaiveDate> {
        let phrase = self.phrase()?;
        for format in ["%B %d, %Y", "%B %d %Y", "%d %B %Y"] {
            if let Ok(date) = NaiveDate::parse_from_str(phrase, format) {
                return Some(date);
            }
        }
        None
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventDate::Explicit(phrase) => write!(f, "{}", phrase),
            EventDate::Estimated(phrase) => write!(f, "{} (estimated)", phrase),
            EventDate::Unspecified => write!(f, "not clearly mentioned"),
        }
    }
}

/// Pick the event date out of article text
pub fn extract_event_date(text: &str) -> EventDate {
    if let Some(cap) = EVENT_DATE.captures(text) {
        return EventDate::Explicit(cap[1].to_string());
    }

    if let Some(mention) = DATE_MENTION.find(text) {
        return EventDate::Estimated(mention.as_str().to_string());
    }

    EventDate::Unspecified
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_with_preposition() {
        let date = extract_event_date("Floodwater entered the town on August 21 and kept rising.");
        assert_eq!(date, EventDate::Explicit("August 21".to_string()));
    }

    #[test]
    fn test_explicit_with_year() {
        let date = extract_event_date("Heavy rain battered the district since August 20, 2017.");
        assert_eq!(date, EventDate::Explicit("August 20, 2017".to_string()));
    }

    #[test]
    fn test_estimated_fallback() {
        let date = extract_event_date("The August 21 deluge destroyed standing crops.");
        assert_eq!(date, EventDate::Estimated("August 21".to_string()));
        assert_eq!(date.to_string(), "August 21 (estimated)");
    }

    #[test]
    fn test_unspecified() {
        let date = extract_event_date("Water levels remain above the danger mark.");
        assert_eq!(date, EventDate::Unspecified);
        assert_eq!(date.to_string(), "not clearly mentioned");
    }

    #[test]
    fn test_day_first_mention() {
        let date = extract_event_date("Relief began after the 21 August 2017 breach.");
        assert_eq!(date, EventDate::Estimated("21 August 2017".to_string()));
    }

    #[test]
    fn test_normalized_with_year() {
        let date = EventDate::Explicit("August 20, 2017".to_string());
        assert_eq!(
            date.normalized(),
            Some(NaiveDate::from_ymd_opt(2017, 8, 20).unwrap())
        );

        let day_first = EventDate::Estimated("21 August 2017".to_string());
        assert_eq!(
            day_first.normalized(),
            Some(NaiveDate::from_ymd_opt(2017, 8, 21).unwrap())
        );
    }

    #[test]
    fn test_normalized_without_year() {
        let date = EventDate::Explicit("August 21".to_string());
        assert_eq!(date.normalized(), None);
        assert_eq!(EventDate::Unspecified.normalized(), None);
    }

    #[test]
    fn test_first_preposition_wins() {
        let text = "The river burst its banks on August 19. More villages flooded on August 22.";
        let date = extract_event_date(text);
        assert_eq!(date, EventDate::Explicit("August 19".to_string()));
    }
}
