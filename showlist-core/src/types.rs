//! Data model types for the merged title catalog.
//!
//! Records move through three shapes: [`RawRecord`] (one CSV row tagged with
//! its platform), [`EnrichedRecord`] (raw columns plus derived typed fields),
//! and the normalized tables ([`NormalizedListing`] plus one join row type per
//! multi-valued attribute).

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Columns every `<platform>_titles.csv` file is expected to carry.
pub const TITLE_COLUMNS: [&str; 12] = [
    "show_id",
    "type",
    "title",
    "director",
    "cast",
    "country",
    "date_added",
    "release_year",
    "rating",
    "duration",
    "listed_in",
    "description",
];

/// Field names produced by enrichment. A raw extra column with one of these
/// names is dropped in favour of the derived value.
pub const DERIVED_FIELDS: [&str; 14] = [
    "directors",
    "casts",
    "producer_countries",
    "categories",
    "date_added",
    "added_year",
    "added_month",
    "added_day_of_month",
    "added_day_of_week",
    "release_year",
    "rating",
    "years_after_release",
    "movie_duration",
    "tv_series_seasons",
];

/// Build the globally unique listing id for a platform's `show_id`.
pub fn listing_id(platform: &str, show_id: &str) -> String {
    format!("{platform}-{show_id}")
}

// ── Raw ─────────────────────────────────────────────────────────────────────

/// One row of a titles CSV, tagged with its source platform.
///
/// The twelve known columns are typed fields; any other column is kept in
/// `extra` in header order and passed through enrichment untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub listing_id: String,
    pub platform: String,
    #[serde(default)]
    pub show_id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub cast: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub date_added: String,
    #[serde(default)]
    pub release_year: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub listed_in: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub extra: IndexMap<String, String>,
}

impl RawRecord {
    /// Build a record from `(column, value)` pairs read from a CSV row.
    ///
    /// `listing_id` and `platform` are always injected from `platform` and the
    /// row's `show_id`; columns with those names in the source are ignored.
    pub fn from_columns<I>(platform: &str, columns: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut record = RawRecord {
            platform: platform.to_string(),
            ..Default::default()
        };

        for (name, value) in columns {
            match name.as_str() {
                "show_id" => record.show_id = value,
                "type" => record.kind = value,
                "title" => record.title = value,
                "director" => record.director = value,
                "cast" => record.cast = value,
                "country" => record.country = value,
                "date_added" => record.date_added = value,
                "release_year" => record.release_year = value,
                "rating" => record.rating = value,
                "duration" => record.duration = value,
                "listed_in" => record.listed_in = value,
                "description" => record.description = value,
                "listing_id" | "platform" => {}
                _ => {
                    record.extra.insert(name, value);
                }
            }
        }

        record.listing_id = listing_id(platform, &record.show_id);
        record
    }
}

// ── Enriched ────────────────────────────────────────────────────────────────

/// A raw record plus its derived fields.
///
/// `date_added`, `release_year` and `rating` replace the raw string columns of
/// the same name. Serialized field order: raw columns, extra columns, then the
/// derived fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub listing_id: String,
    pub platform: String,
    pub show_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub director: String,
    pub cast: String,
    pub country: String,
    /// Serialized as `YYYY-MM-DD`
    pub date_added: Option<NaiveDate>,
    pub release_year: Option<i32>,
    pub rating: Option<String>,
    pub duration: String,
    pub listed_in: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: IndexMap<String, String>,
    pub directors: Option<Vec<String>>,
    pub casts: Option<Vec<String>>,
    pub producer_countries: Option<Vec<String>>,
    pub added_year: Option<i32>,
    pub added_month: Option<u32>,
    pub added_day_of_month: Option<u32>,
    /// ISO weekday, Monday = 1 through Sunday = 7
    pub added_day_of_week: Option<u32>,
    pub years_after_release: Option<i32>,
    pub movie_duration: Option<i32>,
    pub tv_series_seasons: Option<i32>,
    pub categories: Option<Vec<String>>,
}

// ── Normalized ──────────────────────────────────────────────────────────────

/// The scalar projection of an [`EnrichedRecord`], one row per listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedListing {
    pub listing_id: String,
    pub platform: String,
    pub show_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub date_added: Option<NaiveDate>,
    pub added_year: Option<i32>,
    pub added_month: Option<u32>,
    pub added_day_of_month: Option<u32>,
    pub added_day_of_week: Option<u32>,
    pub release_year: Option<i32>,
    pub years_after_release: Option<i32>,
    pub rating: Option<String>,
    pub movie_duration: Option<i32>,
    pub tv_series_seasons: Option<i32>,
    pub description: String,
}

impl From<&EnrichedRecord> for NormalizedListing {
    fn from(r: &EnrichedRecord) -> Self {
        Self {
            listing_id: r.listing_id.clone(),
            platform: r.platform.clone(),
            show_id: r.show_id.clone(),
            kind: r.kind.clone(),
            title: r.title.clone(),
            date_added: r.date_added,
            added_year: r.added_year,
            added_month: r.added_month,
            added_day_of_month: r.added_day_of_month,
            added_day_of_week: r.added_day_of_week,
            release_year: r.release_year,
            years_after_release: r.years_after_release,
            rating: r.rating.clone(),
            movie_duration: r.movie_duration,
            tv_series_seasons: r.tv_series_seasons,
            description: r.description.clone(),
        }
    }
}

/// Join row linking a listing to one director.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDirector {
    pub listing_id: String,
    pub director: String,
}

/// Join row linking a listing to one cast member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingCast {
    pub listing_id: String,
    pub cast: String,
}

/// Join row linking a listing to one producer country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingProducerCountry {
    pub listing_id: String,
    pub producer_country: String,
}

/// Join row linking a listing to one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingCategory {
    pub listing_id: String,
    pub category: String,
}
