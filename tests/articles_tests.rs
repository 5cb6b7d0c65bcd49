//! Article ingestion integration tests

use std::fs;

use disasterscan::articles;
use disasterscan::errors::DisasterScanError;
use tempfile::tempdir;

#[test]
fn test_directory_scan_skips_unreadable_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("good.txt"), "Flooding in Bogura district.").unwrap();
    // Invalid UTF-8 forces a read failure without aborting the batch
    fs::write(dir.path().join("broken.txt"), [0xff, 0xfe, 0xfd]).unwrap();
    fs::write(dir.path().join("notes.md"), "not an article").unwrap();

    let batch = articles::load_directory(dir.path(), "txt").unwrap();

    assert_eq!(batch.articles.len(), 1);
    assert_eq!(batch.articles[0].filename, "good.txt");
    assert_eq!(batch.failures.len(), 1);
    assert!(batch.failures[0].filename.ends_with("broken.txt"));
}

#[test]
fn test_missing_directory_is_an_error() {
    let result = articles::load_directory("no/such/dir", "txt");
    assert!(matches!(
        result,
        Err(DisasterScanError::DirectoryNotFound(_))
    ));
}

#[test]
fn test_custom_extension() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("story.article"), "River levels rose.").unwrap();
    fs::write(dir.path().join("story.txt"), "ignored this time").unwrap();

    let batch = articles::load_directory(dir.path(), "article").unwrap();
    assert_eq!(batch.articles.len(), 1);
    assert_eq!(batch.articles[0].filename, "story.article");
}

#[test]
fn test_batch_order_is_stable() {
    let dir = tempdir().unwrap();
    for name in ["c.txt", "a.txt", "b.txt"] {
        fs::write(dir.path().join(name), "text").unwrap();
    }

    let batch = articles::load_directory(dir.path(), "txt").unwrap();
    let names: Vec<&str> = batch
        .articles
        .iter()
        .map(|article| article.filename.as_str())
        .collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
}
