use std::fs;

use showlist_import::*;
use tempfile::TempDir;

#[test]
fn discover_only_picks_csv_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("netflix_titles.csv"), "show_id\ns1").unwrap();
    fs::write(tmp.path().join("disney_plus_titles.csv"), "show_id\ns1").unwrap();
    fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();
    fs::create_dir(tmp.path().join("nested.csv")).unwrap();

    let sources = discover_sources(tmp.path()).unwrap();
    let platforms: Vec<_> = sources.iter().map(|s| s.platform.as_str()).collect();
    assert_eq!(platforms, vec!["disney-plus", "netflix"]);
}

#[test]
fn discover_missing_dir_is_empty() {
    let tmp = TempDir::new().unwrap();
    let sources = discover_sources(&tmp.path().join("nope")).unwrap();
    assert!(sources.is_empty());
}

#[test]
fn discover_on_a_file_is_an_io_error() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("extracted");
    fs::write(&file, "not a directory").unwrap();

    let err = discover_sources(&file).unwrap_err();
    match err {
        ImportError::Io { path, .. } => assert_eq!(path, file),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn merge_directory_concatenates_rows() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a_titles.csv"), "show_id,title\ns1,One\ns2,Two").unwrap();
    fs::write(tmp.path().join("b_titles.csv"), "show_id,title\ns1,Three").unwrap();

    let records = merge_directory(tmp.path(), &SilentProgress).unwrap();
    let ids: Vec<_> = records.iter().map(|r| r.listing_id.as_str()).collect();
    assert_eq!(ids, vec!["a-s1", "a-s2", "b-s1"]);
}

#[test]
fn listing_ids_are_unique_across_platforms() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a_titles.csv"), "show_id\ns1\ns2").unwrap();
    fs::write(tmp.path().join("b_titles.csv"), "show_id\ns1\ns2").unwrap();

    let records = merge_directory(tmp.path(), &SilentProgress).unwrap();
    let mut ids: Vec<_> = records.iter().map(|r| r.listing_id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), records.len());
}

#[test]
fn read_source_reports_missing_file() {
    let tmp = TempDir::new().unwrap();
    let source = CsvSource::from_path(tmp.path().join("netflix_titles.csv"));
    let err = read_source(&source).unwrap_err();
    assert!(matches!(err, ImportError::Io { .. }));
}
