//! Relational projection of enriched records.
//!
//! Produces one flat listings table plus a join table per multi-valued
//! attribute. Within a listing, join values are de-duplicated; the first
//! occurrence decides the row's position so output is stable across runs.

use std::collections::HashSet;

use crate::types::{
    EnrichedRecord, ListingCast, ListingCategory, ListingDirector, ListingProducerCountry,
    NormalizedListing,
};

/// The five normalized tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTables {
    pub listings: Vec<NormalizedListing>,
    pub directors: Vec<ListingDirector>,
    pub casts: Vec<ListingCast>,
    pub producer_countries: Vec<ListingProducerCountry>,
    pub categories: Vec<ListingCategory>,
}

/// Distinct values of an optional list, in first-seen order. `None` is empty.
pub fn distinct_values(values: Option<&[String]>) -> Vec<&str> {
    let mut seen = HashSet::new();
    values
        .unwrap_or_default()
        .iter()
        .map(String::as_str)
        .filter(|v| seen.insert(*v))
        .collect()
}

/// Project enriched records into the normalized tables.
pub fn normalize(records: &[EnrichedRecord]) -> NormalizedTables {
    let mut tables = NormalizedTables {
        listings: records.iter().map(NormalizedListing::from).collect(),
        ..Default::default()
    };

    for r in records {
        let id = &r.listing_id;

        for director in distinct_values(r.directors.as_deref()) {
            tables.directors.push(ListingDirector {
                listing_id: id.clone(),
                director: director.to_string(),
            });
        }
        for cast in distinct_values(r.casts.as_deref()) {
            tables.casts.push(ListingCast {
                listing_id: id.clone(),
                cast: cast.to_string(),
            });
        }
        for country in distinct_values(r.producer_countries.as_deref()) {
            tables.producer_countries.push(ListingProducerCountry {
                listing_id: id.clone(),
                producer_country: country.to_string(),
            });
        }
        for category in distinct_values(r.categories.as_deref()) {
            tables.categories.push(ListingCategory {
                listing_id: id.clone(),
                category: category.to_string(),
            });
        }
    }

    tables
}
