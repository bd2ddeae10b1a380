//! Title catalog data model, enrichment, and normalization.
//!
//! This crate is pure: it never touches the filesystem. `showlist-import`
//! feeds it merged CSV rows and writes its output as JSON artifacts.

pub mod enrich;
pub mod error;
pub mod normalize;
pub mod types;

pub use enrich::{
    Duration, DurationUnit, enrich_all, enrich_record, has_unrecognized_duration,
    parse_date_added, parse_duration, split_list,
};
pub use error::{DateError, EnrichError};
pub use normalize::{NormalizedTables, distinct_values, normalize};
pub use types::*;
