//! JSON artifact output.
//!
//! Every artifact is a pretty-printed JSON array (4-space indent) written in
//! one shot, replacing whatever was there before.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use showlist_core::{EnrichedRecord, NormalizedTables};

use crate::error::ImportError;
use crate::layout::{
    DataLayout, LISTING_CASTS_FILE, LISTING_CATEGORIES_FILE, LISTING_DIRECTORS_FILE,
    LISTING_PRODUCER_COUNTRIES_FILE, LISTINGS_FILE,
};

/// Serialize `value` as JSON with a 4-space indent.
pub fn to_json_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, ImportError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `value` to `path` as indented JSON, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ImportError> {
    let bytes = to_json_bytes(value)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ImportError::io(parent, e))?;
    }
    fs::write(path, bytes).map_err(|e| ImportError::io(path, e))
}

/// Write the full enriched record sequence to `enriched/enriched.json`.
pub fn write_enriched(layout: &DataLayout, records: &[EnrichedRecord]) -> Result<(), ImportError> {
    write_json(&layout.enriched_file(), records)
}

/// Write the five normalized tables. The first failure aborts.
pub fn write_normalized(layout: &DataLayout, tables: &NormalizedTables) -> Result<(), ImportError> {
    write_json(&layout.normalised_file(LISTINGS_FILE), &tables.listings)?;
    write_json(&layout.normalised_file(LISTING_DIRECTORS_FILE), &tables.directors)?;
    write_json(&layout.normalised_file(LISTING_CASTS_FILE), &tables.casts)?;
    write_json(
        &layout.normalised_file(LISTING_PRODUCER_COUNTRIES_FILE),
        &tables.producer_countries,
    )?;
    write_json(&layout.normalised_file(LISTING_CATEGORIES_FILE), &tables.categories)?;
    Ok(())
}
