//! On-disk layout of the data directory.
//!
//! ```text
//! data/
//!   downloaded/   source zip archives
//!   extracted/    <platform>_titles.csv files
//!   enriched/     enriched.json
//!   normalised/   listings.json and the four join tables
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ImportError;

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_ROOT: &str = "data";

pub const ENRICHED_FILE: &str = "enriched.json";
pub const LISTINGS_FILE: &str = "listings.json";
pub const LISTING_DIRECTORS_FILE: &str = "listing_directors.json";
pub const LISTING_CASTS_FILE: &str = "listing_casts.json";
pub const LISTING_PRODUCER_COUNTRIES_FILE: &str = "listing_producer_countries.json";
pub const LISTING_CATEGORIES_FILE: &str = "listing_categories.json";

/// Paths of every directory and artifact the pipeline touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn downloaded_dir(&self) -> PathBuf {
        self.root.join("downloaded")
    }

    pub fn extracted_dir(&self) -> PathBuf {
        self.root.join("extracted")
    }

    pub fn enriched_dir(&self) -> PathBuf {
        self.root.join("enriched")
    }

    pub fn normalised_dir(&self) -> PathBuf {
        self.root.join("normalised")
    }

    pub fn enriched_file(&self) -> PathBuf {
        self.enriched_dir().join(ENRICHED_FILE)
    }

    pub fn normalised_file(&self, name: &str) -> PathBuf {
        self.normalised_dir().join(name)
    }

    /// Create all four data directories if they don't exist yet.
    pub fn prepare(&self) -> Result<(), ImportError> {
        for dir in [
            self.downloaded_dir(),
            self.extracted_dir(),
            self.enriched_dir(),
            self.normalised_dir(),
        ] {
            fs::create_dir_all(&dir).map_err(|e| ImportError::io(&dir, e))?;
        }
        Ok(())
    }
}

impl Default for DataLayout {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_ROOT)
    }
}
