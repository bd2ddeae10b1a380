use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use showlist_fetch::{Acquired, SOURCES, Source, acquire_all, find_source};
use showlist_import::layout::{
    LISTING_CASTS_FILE, LISTING_CATEGORIES_FILE, LISTING_DIRECTORS_FILE,
    LISTING_PRODUCER_COUNTRIES_FILE, LISTINGS_FILE,
};
use showlist_import::{
    CsvSource, DataLayout, LogProgress, PipelineProgress, PipelineSummary, process, process_sources,
};

use crate::error::CliError;
use crate::progress::SpinnerProgress;

/// Fetch every source, then build the artifacts from exactly what was fetched.
pub(crate) fn run_all(
    layout: &DataLayout,
    skip_fetch: bool,
    quiet: bool,
    verbose: bool,
) -> Result<(), CliError> {
    if skip_fetch {
        return run_process(layout, quiet, verbose);
    }

    let acquired = run_fetch(layout, None)?;
    let sources: Vec<CsvSource> = acquired
        .into_iter()
        .map(|a| CsvSource::new(a.platform, a.csv_path))
        .collect();

    let progress = make_progress(quiet, verbose);
    let summary = process_sources(&sources, layout, progress.as_ref())?;
    print_summary(layout, &summary);
    Ok(())
}

/// Download and extract every known source, or only `platform`.
pub(crate) fn run_fetch(
    layout: &DataLayout,
    platform: Option<&str>,
) -> Result<Vec<Acquired>, CliError> {
    let sources = select_sources(platform)?;
    layout.prepare()?;
    let acquired = acquire_all(&sources, &layout.downloaded_dir(), &layout.extracted_dir())?;
    log::info!(
        "{} Acquired {}/{} source(s)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        acquired.len(),
        sources.len(),
    );
    Ok(acquired)
}

fn select_sources(platform: Option<&str>) -> Result<Vec<Source>, CliError> {
    match platform {
        None => Ok(SOURCES.to_vec()),
        Some(name) => find_source(name)
            .map(|source| vec![*source])
            .ok_or_else(|| CliError::UnknownPlatform(name.to_string())),
    }
}

/// Build the artifacts from whatever CSV files are in `extracted/`.
pub(crate) fn run_process(layout: &DataLayout, quiet: bool, verbose: bool) -> Result<(), CliError> {
    layout.prepare()?;
    let progress = make_progress(quiet, verbose);
    let summary = process(layout, progress.as_ref())?;
    print_summary(layout, &summary);
    Ok(())
}

/// Verbose runs log every phase with timestamps, so skip the spinner there.
fn make_progress(quiet: bool, verbose: bool) -> Box<dyn PipelineProgress> {
    if verbose && !quiet {
        Box::new(LogProgress)
    } else {
        Box::new(SpinnerProgress::new(quiet))
    }
}

fn print_summary(layout: &DataLayout, summary: &PipelineSummary) {
    let artifacts = [
        (layout.enriched_file(), summary.listings),
        (layout.normalised_file(LISTINGS_FILE), summary.listings),
        (layout.normalised_file(LISTING_DIRECTORS_FILE), summary.directors),
        (layout.normalised_file(LISTING_CASTS_FILE), summary.casts),
        (
            layout.normalised_file(LISTING_PRODUCER_COUNTRIES_FILE),
            summary.producer_countries,
        ),
        (layout.normalised_file(LISTING_CATEGORIES_FILE), summary.categories),
    ];

    log::info!("");
    log::info!(
        "{}",
        "Artifacts written:".if_supports_color(Stdout, |t| t.bold()),
    );
    for (path, rows) in &artifacts {
        let path = path.display().to_string();
        log::info!(
            "  {:>8} rows  {}",
            rows,
            path.if_supports_color(Stdout, |t| t.cyan()),
        );
    }

    if summary.unrecognized_durations > 0 {
        log::info!(
            "  {} {} listing(s) with an unrecognized duration unit",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            summary.unrecognized_durations,
        );
    }
}
