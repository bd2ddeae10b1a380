//! The processing pipeline: merge, enrich, write, normalize, write.

use showlist_core::{enrich_all, has_unrecognized_duration, normalize};

use crate::error::ImportError;
use crate::layout::DataLayout;
use crate::merge::{CsvSource, discover_sources, merge_sources};
use crate::progress::PipelineProgress;
use crate::writer::{write_enriched, write_normalized};

/// Row counts of the artifacts produced by one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    pub sources: usize,
    pub listings: usize,
    pub directors: usize,
    pub casts: usize,
    pub producer_countries: usize,
    pub categories: usize,
    /// Records whose duration unit was neither minutes nor seasons
    pub unrecognized_durations: usize,
}

/// Process every titles CSV in the layout's `extracted/` directory.
pub fn process(
    layout: &DataLayout,
    progress: &dyn PipelineProgress,
) -> Result<PipelineSummary, ImportError> {
    let sources = discover_sources(&layout.extracted_dir())?;
    if sources.is_empty() {
        log::warn!(
            "No CSV files found in {}",
            layout.extracted_dir().display()
        );
    }
    process_sources(&sources, layout, progress)
}

/// Process an explicit list of sources, writing every artifact under `layout`.
pub fn process_sources(
    sources: &[CsvSource],
    layout: &DataLayout,
    progress: &dyn PipelineProgress,
) -> Result<PipelineSummary, ImportError> {
    progress.on_phase(&format!("Merging {} titles CSV file(s)", sources.len()));
    let merged = merge_sources(sources, progress)?;

    progress.on_phase(&format!("Enriching {} records", merged.len()));
    let enriched = enrich_all(merged)?;

    let unrecognized_durations = enriched
        .iter()
        .filter(|r| has_unrecognized_duration(r))
        .count();
    if unrecognized_durations > 0 {
        log::warn!(
            "{unrecognized_durations} record(s) have a duration unit that is neither minutes nor seasons"
        );
    }

    progress.on_phase("Writing enriched records");
    write_enriched(layout, &enriched)?;

    progress.on_phase("Writing normalized tables");
    let tables = normalize(&enriched);
    write_normalized(layout, &tables)?;

    let summary = PipelineSummary {
        sources: sources.len(),
        listings: tables.listings.len(),
        directors: tables.directors.len(),
        casts: tables.casts.len(),
        producer_countries: tables.producer_countries.len(),
        categories: tables.categories.len(),
        unrecognized_durations,
    };
    progress.on_complete(&format!(
        "Processed {} listings from {} source(s)",
        summary.listings, summary.sources
    ));
    Ok(summary)
}
