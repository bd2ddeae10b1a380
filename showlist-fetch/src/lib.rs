//! Acquisition of the catalog datasets: HTTP download and zip extraction.
//!
//! Deposits `<platform>_titles.csv` files into the extraction directory for
//! `showlist-import` to pick up. No retries; a failed source is skipped.

pub mod error;
pub mod fetch;
pub mod sources;

pub use error::FetchError;
pub use fetch::{Acquired, acquire_all, acquire_source, download, extract_member};
pub use sources::{SOURCES, Source, find_source};
