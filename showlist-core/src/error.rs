use thiserror::Error;

/// Errors raised while enriching a single record.
///
/// Any of these aborts the run: enrichment expects previously validated
/// source data and never produces a partially enriched record.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// `date_added` is not of the form `"September 25, 2021"`
    #[error("{listing_id}: invalid date_added {value:?}: {source}")]
    InvalidDate {
        listing_id: String,
        value: String,
        source: DateError,
    },

    /// A numeric field (`release_year` or the duration amount) is not an integer
    #[error("{listing_id}: invalid {field} {value:?}: {source}")]
    InvalidNumber {
        listing_id: String,
        field: &'static str,
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Why a `date_added` string was rejected.
#[derive(Debug, Error)]
pub enum DateError {
    #[error("{0:?} is not a full month name")]
    MonthName(String),

    #[error("expected \"<Month> <Day>, <Year>\"")]
    Layout,

    #[error(transparent)]
    Chrono(#[from] chrono::ParseError),
}

impl EnrichError {
    /// Listing the error was raised for.
    pub fn listing_id(&self) -> &str {
        match self {
            Self::InvalidDate { listing_id, .. } | Self::InvalidNumber { listing_id, .. } => {
                listing_id
            }
        }
    }
}
