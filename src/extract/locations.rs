//! Administrative location extraction
//!
//! Recovers district and upazila names from article text. Two passes
//! feed the result:
//!
//! 1. **Pattern pass**: explicit administrative phrases ("Kurigram
//!    district", "upazilas -- Chilmari, Ulipur, and Nageshwari") matched
//!    with regexes tuned for Bangladeshi place-name conventions, which
//!    generic gazetteers routinely miss.
//! 2. **Candidate pass**: capitalized spans that look like proper place
//!    names, classified by the administrative keywords found in a token
//!    window around them. Candidates with no contextual evidence are
//!    reported as uncertain rather than dropped.
//!
//! Both passes are merged and de-duplicated into sorted output.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// "<Name> district" / "<Name> zila"
static DISTRICT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)\s+(?:district|zila|zilla)")
        .expect("valid district pattern")
});

/// "<Name> upazila" / "<Name> thana" / "<Name> sub-district"
static UPAZILA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)\s+(?:upazila|upazilla|thana|sub-district)")
        .expect("valid upazila pattern")
});

/// "upazilas -- A, B, and C" / "upazilas: A, B, C"
static UPAZILA_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"upazilas?\s*(?:--|:)\s*([A-Z][^.]+?)(?:\.|,\s*(?:Nearly|Almost|About|\d))")
        .expect("valid upazila list pattern")
});

/// "districts -- A, B, and C" / "districts: A, B, C"
static DISTRICT_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"districts?\s*(?:--|:)\s*([A-Z][^.]+?)(?:\.|,\s*(?:Nearly|Almost|About|\d))")
        .expect("valid district list pattern")
});

/// Separator inside enumerated place lists: ", " and ", and "
static LIST_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*(?:and\s+)?").expect("valid list separator pattern"));

/// Keywords that mark upazila-level context (checked before district:
/// "sub-district" must not fall through to the district branch)
const UPAZILA_CONTEXT: &[&str] = &["upazila", "upazilla", "thana", "sub-district"];

/// Keywords that mark district-level context
const DISTRICT_CONTEXT: &[&str] = &["district", "zila", "zilla"];

/// Capitalized words that are never place names in news copy
const CANDIDATE_STOPWORDS: &[&str] = &[
    "a", "an", "the", "in", "on", "at", "of", "for", "with", "from", "since", "during", "by",
    "as", "and", "but", "or", "this", "that", "these", "those", "it", "its", "he", "she", "they",
    "we", "you", "his", "her", "their", "our", "monday", "tuesday", "wednesday", "thursday",
    "friday", "saturday", "sunday", "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december", "jan", "feb", "mar",
    "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "nearly", "almost",
    "about", "least", "more", "over", "under", "several", "many", "some", "officials",
    "authorities", "government", "police", "army", "district", "districts", "upazila",
    "upazilas", "upazilla", "thana", "zila", "zilla", "river", "rivers", "flood", "floods",
    "flooding", "floodwater", "monsoon", "heavy", "rain", "rains", "water", "according",
    "meanwhile", "however", "reports", "report", "news", "agency", "minister", "ministry",
    "prime", "local", "people",
];

/// Locations extracted from one article, by administrative level
///
/// `uncertain` holds place-name candidates that lacked administrative
/// context; they are surfaced so a reviewer can resolve them instead of
/// silently losing coverage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locations {
    pub districts: Vec<String>,
    pub upazilas: Vec<String>,
    #[serde(rename = "uncertain_locations")]
    pub uncertain: Vec<String>,
}

/// Extract and categorize locations from article text
///
/// `context_window` is the number of tokens scanned on each side of a
/// candidate when looking for administrative keywords.
pub fn extract_locations(text: &str, context_window: usize) -> Locations {
    let mut districts = BTreeSet::new();
    let mut upazilas = BTreeSet::new();
    let mut uncertain = BTreeSet::new();

    // Pattern pass
    for cap in DISTRICT.captures_iter(text) {
        districts.insert(cap[1].to_string());
    }
    for cap in UPAZILA.captures_iter(text) {
        upazilas.insert(cap[1].to_string());
    }
    for cap in UPAZILA_LIST.captures_iter(text) {
        for place in split_place_list(&cap[1]) {
            upazilas.insert(place);
        }
    }
    for cap in DISTRICT_LIST.captures_iter(text) {
        for place in split_place_list(&cap[1]) {
            districts.insert(place);
        }
    }

    // Candidate pass
    let tokens = tokenize(text);
    for candidate in place_candidates(&tokens) {
        if candidate.sentence_initial {
            // Sentence-leading capitalization is ambiguous; only an
            // administrative keyword directly after the span is trusted.
            let next = tokens
                .get(candidate.end + 1)
                .map(|token| token.text.to_lowercase());
            match next.as_deref() {
                Some(word) if UPAZILA_CONTEXT.iter().any(|kw| word.starts_with(kw)) => {
                    upazilas.insert(candidate.name);
                }
                Some(word) if DISTRICT_CONTEXT.iter().any(|kw| word.starts_with(kw)) => {
                    districts.insert(candidate.name);
                }
                _ => {}
            }
            continue;
        }

        let window = context_words(&tokens, candidate.start, candidate.end, context_window);
        if UPAZILA_CONTEXT.iter().any(|kw| window.contains(kw)) {
            upazilas.insert(candidate.name);
        } else if DISTRICT_CONTEXT.iter().any(|kw| window.contains(kw)) {
            districts.insert(candidate.name);
        } else {
            uncertain.insert(candidate.name);
        }
    }

    // A name confirmed at some administrative level is no longer uncertain
    let uncertain = uncertain
        .into_iter()
        .filter(|name| !districts.contains(name) && !upazilas.contains(name))
        .collect();

    Locations {
        districts: districts.into_iter().collect(),
        upazilas: upazilas.into_iter().collect(),
        uncertain,
    }
}

/// Split an enumerated list capture ("Chilmari, Ulipur, and Nageshwari")
/// into individual place names
fn split_place_list(capture: &str) -> Vec<String> {
    LIST_SEPARATOR
        .split(capture)
        .map(|place| place.trim())
        .filter(|place| !place.is_empty())
        .map(|place| place.to_string())
        .collect()
}

/// A word with the punctuation cues the candidate scanner needs
struct Token {
    /// The word with surrounding punctuation stripped
    text: String,
    /// The first word of a sentence
    sentence_initial: bool,
    /// Punctuation separated this word from the previous one, so a name
    /// span must not join them ("Chilmari, Ulipur" is two places)
    break_before: bool,
}

/// A capitalized span that may be a place name
struct PlaceCandidate {
    name: String,
    /// Token index of the first word
    start: usize,
    /// Token index of the last word
    end: usize,
    sentence_initial: bool,
}

/// Whitespace tokens with punctuation cues preserved
fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut sentence_initial = true;
    let mut break_before = true;

    for raw in text.split_whitespace() {
        let cleaned = raw.trim_matches(|c: char| !c.is_alphanumeric());
        let trailing: String = raw
            .chars()
            .rev()
            .take_while(|c| !c.is_alphanumeric())
            .collect();
        let ends_sentence = trailing.contains(['.', '!', '?']);

        if cleaned.is_empty() {
            // Pure punctuation ("--") still separates names
            break_before = true;
            sentence_initial = sentence_initial || ends_sentence;
            continue;
        }

        tokens.push(Token {
            text: cleaned.to_string(),
            sentence_initial,
            break_before,
        });
        break_before = !trailing.is_empty();
        sentence_initial = ends_sentence;
    }

    tokens
}

/// Collect capitalized spans (up to three tokens) that pass the stopword
/// filter
fn place_candidates(tokens: &[Token]) -> Vec<PlaceCandidate> {
    let mut candidates = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if !is_name_token(&tokens[i].text) {
            i += 1;
            continue;
        }

        let start = i;
        let mut end = i;
        while end + 1 < tokens.len()
            && end - start < 2
            && !tokens[end + 1].break_before
            && is_name_token(&tokens[end + 1].text)
        {
            end += 1;
        }

        candidates.push(PlaceCandidate {
            name: tokens[start..=end]
                .iter()
                .map(|token| token.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            start,
            end,
            sentence_initial: tokens[start].sentence_initial,
        });
        i = end + 1;
    }

    candidates
}

/// A token counts toward a place-name span if it is capitalized,
/// alphabetic, and not a known non-place word
fn is_name_token(token: &str) -> bool {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_uppercase() || token.len() < 2 {
        return false;
    }
    if !chars.all(|c| c.is_alphabetic() || c == '\'' || c == '-') {
        return false;
    }
    !CANDIDATE_STOPWORDS.contains(&token.to_lowercase().as_str())
}

/// Lower-cased text of the tokens around a candidate span
fn context_words(tokens: &[Token], start: usize, end: usize, window: usize) -> String {
    let from = start.saturating_sub(window);
    let to = (end + window + 1).min(tokens.len());
    tokens[from..to]
        .iter()
        .map(|token| token.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
