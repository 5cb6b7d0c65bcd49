//! Report rendering and export integration tests

use std::fs;

use disasterscan::articles::Article;
use disasterscan::config::ExtractionConfig;
use disasterscan::extract::process_article;
use disasterscan::report::{DisasterReport, text};
use disasterscan::utils::csv_handler;
use tempfile::NamedTempFile;

fn reports() -> Vec<DisasterReport> {
    let config = ExtractionConfig::default();
    let texts = [
        (
            "kurigram.txt",
            "Floodwater inundated Kurigram district on August 21. At least 5 people died.",
        ),
        (
            "dry.txt",
            "The weather office forecast clear skies for the weekend.",
        ),
    ];

    texts
        .iter()
        .map(|(name, text)| {
            process_article(
                &Article {
                    filename: name.to_string(),
                    text: text.to_string(),
                },
                &config,
            )
        })
        .collect()
}

#[test]
fn test_batch_json_shape() {
    let json = serde_json::to_value(reports()).unwrap();
    let array = json.as_array().unwrap();
    assert_eq!(array.len(), 2);

    assert_eq!(array[0]["article"], "kurigram.txt");
    assert_eq!(array[0]["disaster_type"], "flood");
    assert_eq!(array[0]["event_date"]["kind"], "explicit");
    assert_eq!(array[0]["locations"]["districts"][0], "Kurigram");

    assert_eq!(array[1]["disaster_type"], "unknown");
    assert_eq!(array[1]["event_date"]["kind"], "unspecified");
}

#[test]
fn test_csv_export_roundtrip() {
    let temp_file = NamedTempFile::new().unwrap();
    csv_handler::export_to_csv(&reports(), temp_file.path()).unwrap();

    let content = fs::read_to_string(temp_file.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3); // header + 2 rows
    assert!(lines[0].starts_with("article,disaster_type,event_date"));
    assert!(lines[1].contains("kurigram.txt"));
    assert!(lines[1].contains("flood"));
    assert!(lines[2].contains("not clearly mentioned"));
}

#[test]
fn test_console_rendering() {
    colored::control::set_override(false);

    let rendered: Vec<String> = reports().iter().map(text::render).collect();

    assert!(rendered[0].contains("Article: kurigram.txt"));
    assert!(rendered[0].contains("Disaster Type: flood"));
    assert!(rendered[0].contains("Event Date: August 21"));
    assert!(rendered[0].contains("Districts: Kurigram"));
    assert!(rendered[0].contains("Deaths:   5"));

    assert!(rendered[1].contains("Disaster Type: unknown"));
    assert!(rendered[1].contains("Event Date: not clearly mentioned"));
    assert!(rendered[1].contains("Deaths:   0 or not mentioned"));
}
