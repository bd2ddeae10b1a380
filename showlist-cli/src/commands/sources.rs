use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use showlist_fetch::SOURCES;

/// List the known catalog sources.
pub(crate) fn run_sources() {
    log::info!(
        "{}",
        "Catalog sources:".if_supports_color(Stdout, |t| t.bold()),
    );
    for source in SOURCES {
        log::info!(
            "  {} [{}]",
            source.platform.if_supports_color(Stdout, |t| t.bold()),
            source.csv_name.if_supports_color(Stdout, |t| t.cyan()),
        );
        log::info!("    {}", source.url);
    }
}
