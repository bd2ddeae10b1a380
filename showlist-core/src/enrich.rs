//! Per-record enrichment: typed fields derived from raw CSV strings.
//!
//! Every derived field follows the same presence rule: the source column is
//! trimmed, and an empty result yields `None` without attempting to parse.
//! A non-empty value that fails to parse is an error for the whole run.

use std::num::ParseIntError;

use chrono::{Datelike, Month, NaiveDate};

use crate::error::{DateError, EnrichError};
use crate::types::{DERIVED_FIELDS, EnrichedRecord, RawRecord};

/// `chrono` format for `date_added` values such as `"September 25, 2021"`.
pub const DATE_ADDED_FORMAT: &str = "%B %d, %Y";

/// Unit token of a `duration` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationUnit {
    /// Unit contains `"min"` (`"90 min"`)
    Minutes,
    /// Unit contains `"seasons"` (`"2 Seasons"`)
    Seasons,
    /// Anything else, lower-cased (`"1 season"` lands here)
    Unrecognized(String),
}

/// A parsed `duration` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duration {
    pub amount: i32,
    pub unit: DurationUnit,
}

impl Duration {
    pub fn movie_minutes(&self) -> Option<i32> {
        match self.unit {
            DurationUnit::Minutes => Some(self.amount),
            _ => None,
        }
    }

    pub fn seasons(&self) -> Option<i32> {
        match self.unit {
            DurationUnit::Seasons => Some(self.amount),
            _ => None,
        }
    }
}

/// Trim `value`, returning `None` when nothing is left.
pub fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Split a comma-separated list, trimming each element.
///
/// Empty elements (`"A,,B"`) are kept; de-duplication happens at
/// normalization time.
pub fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(|s| s.trim().to_string()).collect()
}

/// Parse a `"<FullMonthName> <Day>, <Year>"` date.
///
/// The month name must be spelled out (any case) and whitespace must follow
/// both the month and the comma. `chrono` alone would also take `"Sep"` and
/// `"September25,2021"`.
pub fn parse_date_added(value: &str) -> Result<NaiveDate, DateError> {
    let (month, rest) = value
        .split_once(char::is_whitespace)
        .ok_or(DateError::Layout)?;
    if !is_full_month_name(month) {
        return Err(DateError::MonthName(month.to_string()));
    }
    match rest.split_once(',') {
        Some((_, year)) if year.starts_with(char::is_whitespace) => {}
        _ => return Err(DateError::Layout),
    }

    Ok(NaiveDate::parse_from_str(value, DATE_ADDED_FORMAT)?)
}

fn is_full_month_name(token: &str) -> bool {
    (1..=12u8)
        .filter_map(|n| Month::try_from(n).ok())
        .any(|m| m.name().eq_ignore_ascii_case(token))
}

/// Parse a duration such as `"90 min"` or `"2 Seasons"`.
///
/// The value is split on the first space: the prefix must be a (possibly
/// signed) integer, the remainder (lower-cased) selects the unit. Without a space the whole value
/// doubles as the unit and is therefore unrecognized.
pub fn parse_duration(value: &str) -> Result<Duration, ParseIntError> {
    let (amount, unit) = match value.split_once(' ') {
        Some((amount, unit)) => (amount, unit),
        None => (value, value),
    };
    let amount: i32 = amount.trim().parse()?;
    let unit = unit.to_lowercase();

    let unit = if unit.contains("min") {
        DurationUnit::Minutes
    } else if unit.contains("seasons") {
        DurationUnit::Seasons
    } else {
        DurationUnit::Unrecognized(unit)
    };

    Ok(Duration { amount, unit })
}

/// Enrich one raw record.
pub fn enrich_record(raw: RawRecord) -> Result<EnrichedRecord, EnrichError> {
    let listing_id = raw.listing_id.as_str();

    let release_year = non_empty(&raw.release_year)
        .map(|v| {
            v.parse::<i32>().map_err(|source| EnrichError::InvalidNumber {
                listing_id: listing_id.to_string(),
                field: "release_year",
                value: v.to_string(),
                source,
            })
        })
        .transpose()?;

    let date_added = non_empty(&raw.date_added)
        .map(|v| {
            parse_date_added(v).map_err(|source| EnrichError::InvalidDate {
                listing_id: listing_id.to_string(),
                value: v.to_string(),
                source,
            })
        })
        .transpose()?;

    let duration = non_empty(&raw.duration)
        .map(|v| {
            parse_duration(v).map_err(|source| EnrichError::InvalidNumber {
                listing_id: listing_id.to_string(),
                field: "duration",
                value: v.to_string(),
                source,
            })
        })
        .transpose()?;

    let years_after_release = match (date_added, release_year) {
        (Some(date), Some(year)) => Some(date.year() - year),
        _ => None,
    };

    let rating = non_empty(&raw.rating).map(str::to_string);
    let directors = non_empty(&raw.director).map(split_list);
    let casts = non_empty(&raw.cast).map(split_list);
    let producer_countries = non_empty(&raw.country).map(split_list);
    let categories = non_empty(&raw.listed_in).map(split_list);

    let mut extra = raw.extra;
    extra.retain(|name, _| !DERIVED_FIELDS.contains(&name.as_str()));

    Ok(EnrichedRecord {
        listing_id: raw.listing_id,
        platform: raw.platform,
        show_id: raw.show_id,
        kind: raw.kind,
        title: raw.title,
        director: raw.director,
        cast: raw.cast,
        country: raw.country,
        date_added,
        release_year,
        rating,
        duration: raw.duration,
        listed_in: raw.listed_in,
        description: raw.description,
        extra,
        directors,
        casts,
        producer_countries,
        added_year: date_added.map(|d| d.year()),
        added_month: date_added.map(|d| d.month()),
        added_day_of_month: date_added.map(|d| d.day()),
        added_day_of_week: date_added.map(|d| d.weekday().number_from_monday()),
        years_after_release,
        movie_duration: duration.as_ref().and_then(Duration::movie_minutes),
        tv_series_seasons: duration.as_ref().and_then(Duration::seasons),
        categories,
    })
}

/// Enrich every record, preserving order. Stops at the first failure.
pub fn enrich_all(records: Vec<RawRecord>) -> Result<Vec<EnrichedRecord>, EnrichError> {
    records.into_iter().map(enrich_record).collect()
}

/// True when a record carried a duration whose unit was neither minutes nor
/// seasons, leaving both derived duration fields empty.
pub fn has_unrecognized_duration(record: &EnrichedRecord) -> bool {
    non_empty(&record.duration).is_some()
        && record.movie_duration.is_none()
        && record.tv_series_seasons.is_none()
}

#[cfg(test)]
#[path = "tests/enrich_tests.rs"]
mod tests;
