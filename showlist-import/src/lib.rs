//! Merge titles CSV files and write enriched and normalized JSON artifacts.
//!
//! This crate owns all file I/O around `showlist-core`: discovering and
//! parsing the extracted CSV files, the data directory layout, the settings
//! file, and the JSON writers.

pub mod error;
pub mod layout;
pub mod merge;
pub mod pipeline;
pub mod progress;
pub mod settings;
pub mod writer;

pub use error::ImportError;
pub use layout::DataLayout;
pub use merge::{
    CsvSource, discover_sources, merge_directory, merge_sources, parse_titles_csv,
    platform_from_file_name, read_source,
};
pub use pipeline::{PipelineSummary, process, process_sources};
pub use progress::{LogProgress, PipelineProgress, SilentProgress};
pub use writer::{write_enriched, write_json, write_normalized};
