use std::fs;
use std::path::Path;

use serde_json::Value;
use showlist_import::*;
use tempfile::TempDir;

const HEADER: &str = "show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description";

fn write_csv(dir: &Path, name: &str, rows: &[&str]) {
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    fs::write(dir.join(name), content).unwrap();
}

fn setup() -> (TempDir, DataLayout) {
    let tmp = TempDir::new().unwrap();
    let layout = DataLayout::new(tmp.path().join("data"));
    layout.prepare().unwrap();

    let extracted = layout.extracted_dir();
    write_csv(
        &extracted,
        "netflix_titles.csv",
        &[
            "s1,Movie,Dick Johnson Is Dead,Kirsten Johnson,,United States,\"September 25, 2021\",2019,PG-13,90 min,Documentaries,A film",
            "s2,TV Show,Blood & Water,,\"A, B, A\",South Africa,\"September 24, 2021\",2021,TV-MA,2 Seasons,\"International TV Shows, TV Dramas\",A show",
        ],
    );
    write_csv(
        &extracted,
        "amazon_prime_titles.csv",
        &["s1,TV Show,Solo,,,,,,,1 Season,Kids,Single season"],
    );

    (tmp, layout)
}

fn read_array(path: &Path) -> Vec<Value> {
    let text = fs::read_to_string(path).unwrap();
    match serde_json::from_str(&text).unwrap() {
        Value::Array(items) => items,
        other => panic!("expected array in {}, got {other}", path.display()),
    }
}

#[test]
fn process_writes_all_artifacts() {
    let (_tmp, layout) = setup();
    let summary = process(&layout, &SilentProgress).unwrap();

    assert_eq!(summary.sources, 2);
    assert_eq!(summary.listings, 3);
    assert_eq!(summary.directors, 1);
    assert_eq!(summary.casts, 2);
    assert_eq!(summary.unrecognized_durations, 1);

    for name in [
        "listings.json",
        "listing_directors.json",
        "listing_casts.json",
        "listing_producer_countries.json",
        "listing_categories.json",
    ] {
        assert!(layout.normalised_file(name).exists(), "{name} missing");
    }
    assert!(layout.enriched_file().exists());
}

#[test]
fn sources_are_merged_in_file_name_order() {
    let (_tmp, layout) = setup();
    process(&layout, &SilentProgress).unwrap();

    let enriched = read_array(&layout.enriched_file());
    let ids: Vec<_> = enriched
        .iter()
        .map(|r| r["listing_id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["amazon-prime-s1", "netflix-s1", "netflix-s2"]);
}

#[test]
fn enriched_fields_follow_scenarios() {
    let (_tmp, layout) = setup();
    process(&layout, &SilentProgress).unwrap();

    let enriched = read_array(&layout.enriched_file());
    let movie = enriched
        .iter()
        .find(|r| r["listing_id"] == "netflix-s1")
        .unwrap();
    assert_eq!(movie["platform"], "netflix");
    assert_eq!(movie["date_added"], "2021-09-25");
    assert_eq!(movie["added_day_of_week"], 6);
    assert_eq!(movie["years_after_release"], 2);
    assert_eq!(movie["movie_duration"], 90);
    assert_eq!(movie["tv_series_seasons"], Value::Null);
    assert_eq!(movie["casts"], Value::Null);
    assert_eq!(movie["duration"], "90 min");

    let solo = enriched
        .iter()
        .find(|r| r["listing_id"] == "amazon-prime-s1")
        .unwrap();
    assert_eq!(solo["date_added"], Value::Null);
    assert_eq!(solo["rating"], Value::Null);
    assert_eq!(solo["movie_duration"], Value::Null);
    assert_eq!(solo["tv_series_seasons"], Value::Null);
}

#[test]
fn durations_are_never_both_set() {
    let (_tmp, layout) = setup();
    process(&layout, &SilentProgress).unwrap();

    for r in read_array(&layout.enriched_file()) {
        assert!(r["movie_duration"].is_null() || r["tv_series_seasons"].is_null());
    }
}

#[test]
fn listing_scalars_match_enriched() {
    let (_tmp, layout) = setup();
    process(&layout, &SilentProgress).unwrap();

    let enriched = read_array(&layout.enriched_file());
    let listings = read_array(&layout.normalised_file("listings.json"));
    assert_eq!(listings.len(), enriched.len());

    for listing in &listings {
        let source = enriched
            .iter()
            .find(|r| r["listing_id"] == listing["listing_id"])
            .unwrap();
        for (key, value) in listing.as_object().unwrap() {
            assert_eq!(&source[key], value, "field {key} differs");
        }
    }
}

#[test]
fn cast_join_table_is_deduplicated() {
    let (_tmp, layout) = setup();
    process(&layout, &SilentProgress).unwrap();

    let casts = read_array(&layout.normalised_file("listing_casts.json"));
    let mut pairs: Vec<_> = casts
        .iter()
        .map(|r| {
            (
                r["listing_id"].as_str().unwrap().to_string(),
                r["cast"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    pairs.sort();
    assert_eq!(
        pairs,
        vec![
            ("netflix-s2".to_string(), "A".to_string()),
            ("netflix-s2".to_string(), "B".to_string()),
        ]
    );

    let countries = read_array(&layout.normalised_file("listing_producer_countries.json"));
    assert!(countries.iter().all(|r| r.get("producer_country").is_some()));
}

#[test]
fn running_twice_is_byte_identical() {
    let (_tmp, layout) = setup();
    process(&layout, &SilentProgress).unwrap();
    let first_enriched = fs::read(layout.enriched_file()).unwrap();
    let first_cats = fs::read(layout.normalised_file("listing_categories.json")).unwrap();

    process(&layout, &SilentProgress).unwrap();
    assert_eq!(fs::read(layout.enriched_file()).unwrap(), first_enriched);
    assert_eq!(
        fs::read(layout.normalised_file("listing_categories.json")).unwrap(),
        first_cats
    );
}

#[test]
fn malformed_date_aborts_run() {
    let tmp = TempDir::new().unwrap();
    let layout = DataLayout::new(tmp.path());
    layout.prepare().unwrap();
    write_csv(
        &layout.extracted_dir(),
        "netflix_titles.csv",
        &["s1,Movie,Bad,,,,2021-09-25,2020,,90 min,,"],
    );

    let err = process(&layout, &SilentProgress).unwrap_err();
    assert!(matches!(err, ImportError::Enrich(_)));
    assert!(!layout.enriched_file().exists());
}

#[test]
fn empty_extracted_dir_writes_empty_arrays() {
    let tmp = TempDir::new().unwrap();
    let layout = DataLayout::new(tmp.path());
    layout.prepare().unwrap();

    let summary = process(&layout, &SilentProgress).unwrap();
    assert_eq!(summary, PipelineSummary::default());
    assert_eq!(fs::read_to_string(layout.enriched_file()).unwrap(), "[]");
}

#[test]
fn explicit_sources_keep_their_labels() {
    let tmp = TempDir::new().unwrap();
    let layout = DataLayout::new(tmp.path());
    layout.prepare().unwrap();
    write_csv(tmp.path(), "dump.csv", &["s5,Movie,X,,,,,,,,,"]);

    let sources = vec![CsvSource::new("disney-plus", tmp.path().join("dump.csv"))];
    process_sources(&sources, &layout, &SilentProgress).unwrap();

    let listings = read_array(&layout.normalised_file("listings.json"));
    assert_eq!(listings[0]["listing_id"], "disney-plus-s5");
    assert_eq!(listings[0]["platform"], "disney-plus");
}
