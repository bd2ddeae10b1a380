use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use showlist_import::settings;

use crate::error::CliError;

/// Show the settings file and the data directory it resolves to.
pub(crate) fn run_config_show(data_root: Option<PathBuf>) {
    let path = settings::settings_path();
    log::info!(
        "{} {}",
        "Settings file:".if_supports_color(Stdout, |t| t.bold()),
        path.display(),
    );
    match settings::load_settings_string() {
        Some(contents) => {
            for line in contents.lines() {
                log::info!("  {line}");
            }
        }
        None => log::info!(
            "  {}",
            "(not set)".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }
    log::info!(
        "{} {}",
        "Data directory:".if_supports_color(Stdout, |t| t.bold()),
        settings::resolve_data_root(data_root).display(),
    );
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings::settings_path().display());
}

/// Save or clear the default data directory.
pub(crate) fn run_config_set_data_root(path: Option<&Path>) -> Result<(), CliError> {
    settings::save_data_root(path)?;
    match path {
        Some(p) => log::info!(
            "{} Data directory set to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            p.display(),
        ),
        None => log::info!(
            "{} Saved data directory cleared",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        ),
    }
    Ok(())
}
