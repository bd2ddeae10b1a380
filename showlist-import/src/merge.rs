//! Merging per-platform titles CSV files into one record sequence.
//!
//! Each source carries an explicit platform label. Sources discovered on disk
//! derive that label from the `<platform>_titles.csv` naming convention.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use showlist_core::{RawRecord, TITLE_COLUMNS};

use crate::error::ImportError;
use crate::progress::PipelineProgress;

/// File name suffix of an extracted titles CSV.
pub const TITLES_SUFFIX: &str = "_titles.csv";

/// A titles CSV file and the platform its rows belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSource {
    pub platform: String,
    pub path: PathBuf,
}

impl CsvSource {
    pub fn new(platform: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            platform: platform.into(),
            path: path.into(),
        }
    }

    /// Label a file by its name (see [`platform_from_file_name`]).
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let platform = platform_from_file_name(&path.to_string_lossy());
        Self { platform, path }
    }
}

/// Derive a platform label from a titles CSV path.
///
/// Directory components are dropped whichever separator they use, then the
/// `_titles.csv` suffix (or a bare `.csv`) is stripped and underscores become
/// hyphens: `data\extracted\amazon_prime_titles.csv` gives `amazon-prime`.
pub fn platform_from_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let stem = base
        .strip_suffix(TITLES_SUFFIX)
        .or_else(|| base.strip_suffix(".csv"))
        .unwrap_or(base);
    stem.replace('_', "-")
}

/// Find every `.csv` file directly inside `dir`, sorted by file name.
///
/// A missing directory yields no sources.
pub fn discover_sources(dir: &Path) -> Result<Vec<CsvSource>, ImportError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| ImportError::io(dir, e))? {
        let path = entry.map_err(|e| ImportError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(paths.into_iter().map(CsvSource::from_path).collect())
}

/// Parse titles CSV content, tagging every row with `platform`.
///
/// The first row names the columns. Rows shorter than the header get empty
/// strings for the missing trailing fields; values past the last header are
/// dropped.
pub fn parse_titles_csv<R: Read>(reader: R, platform: &str) -> Result<Vec<RawRecord>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let missing: Vec<_> = TITLE_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .collect();
    if !missing.is_empty() {
        log::warn!("{platform}: titles CSV has no column(s) {missing:?}, treating them as empty");
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), row.get(i).unwrap_or("").to_string()));
        records.push(RawRecord::from_columns(platform, columns));
    }

    Ok(records)
}

/// Read and parse one source file.
pub fn read_source(source: &CsvSource) -> Result<Vec<RawRecord>, ImportError> {
    let file = File::open(&source.path).map_err(|e| ImportError::io(&source.path, e))?;
    parse_titles_csv(file, &source.platform).map_err(|e| ImportError::csv(&source.path, e))
}

/// Concatenate the rows of every source, in source order.
pub fn merge_sources(
    sources: &[CsvSource],
    progress: &dyn PipelineProgress,
) -> Result<Vec<RawRecord>, ImportError> {
    let mut merged = Vec::new();
    for source in sources {
        let records = read_source(source)?;
        progress.on_source(&source.platform, records.len());
        merged.extend(records);
    }
    Ok(merged)
}

/// Discover and merge every titles CSV in `dir`.
pub fn merge_directory(
    dir: &Path,
    progress: &dyn PipelineProgress,
) -> Result<Vec<RawRecord>, ImportError> {
    let sources = discover_sources(dir)?;
    if sources.is_empty() {
        log::warn!("No CSV files found in {}", dir.display());
    }
    merge_sources(&sources, progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_unix_path() {
        assert_eq!(
            platform_from_file_name("data/extracted/netflix_titles.csv"),
            "netflix"
        );
    }

    #[test]
    fn test_platform_from_windows_path() {
        assert_eq!(
            platform_from_file_name("data\\extracted\\amazon_prime_titles.csv"),
            "amazon-prime"
        );
    }

    #[test]
    fn test_platform_from_bare_csv() {
        assert_eq!(platform_from_file_name("disney_plus.csv"), "disney-plus");
        assert_eq!(platform_from_file_name("hulu"), "hulu");
    }

    #[test]
    fn test_parse_titles_csv() {
        let csv = "\
show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,Dick Johnson Is Dead,Kirsten Johnson,,United States,\"September 25, 2021\",2020,PG-13,90 min,Documentaries,\"As her father nears the end of his life, filmmaker Kirsten Johnson stages his death.\"
s2,TV Show,Blood & Water,,\"Ama Qamata, Khosi Ngema\",South Africa,\"September 24, 2021\",2021,TV-MA,2 Seasons,\"International TV Shows, TV Dramas\",After crossing paths at a party";

        let records = parse_titles_csv(csv.as_bytes(), "netflix").unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.listing_id, "netflix-s1");
        assert_eq!(first.platform, "netflix");
        assert_eq!(first.date_added, "September 25, 2021");
        assert_eq!(first.cast, "");
        assert!(first.description.contains("Kirsten Johnson stages"));

        let second = &records[1];
        assert_eq!(second.kind, "TV Show");
        assert_eq!(second.cast, "Ama Qamata, Khosi Ngema");
        assert_eq!(second.listed_in, "International TV Shows, TV Dramas");
    }

    #[test]
    fn test_parse_short_rows_and_extra_columns() {
        let csv = "\
show_id,title,imdb,duration
s1,Short
s2,Full,7.5,45 min";

        let records = parse_titles_csv(csv.as_bytes(), "hulu").unwrap();
        assert_eq!(records[0].duration, "");
        assert_eq!(records[0].extra["imdb"], "");
        assert_eq!(records[1].extra["imdb"], "7.5");
        assert_eq!(records[1].duration, "45 min");
    }

    #[test]
    fn test_empty_show_id_still_gets_listing_id() {
        let csv = "show_id,title\n,Nameless";
        let records = parse_titles_csv(csv.as_bytes(), "netflix").unwrap();
        assert_eq!(records[0].listing_id, "netflix-");
    }
}
