//! showlist CLI
//!
//! Fetches the streaming catalog datasets, merges and enriches their titles,
//! and writes enriched and normalized JSON artifacts.

mod cli_types;
mod commands;
mod error;
mod logging;
mod progress;

use clap::Parser;

use showlist_import::DataLayout;
use showlist_import::settings::resolve_data_root;

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_path, run_config_set_data_root, run_config_show};
use commands::pipeline::{run_all, run_fetch, run_process};
use commands::sources::run_sources;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Run { skip_fetch } => {
            let layout = DataLayout::new(resolve_data_root(cli.data_root));
            run_all(&layout, skip_fetch, cli.quiet, cli.verbose)
        }
        Commands::Fetch { platform } => {
            let layout = DataLayout::new(resolve_data_root(cli.data_root));
            run_fetch(&layout, platform.as_deref()).map(|_| ())
        }
        Commands::Process => {
            let layout = DataLayout::new(resolve_data_root(cli.data_root));
            run_process(&layout, cli.quiet, cli.verbose)
        }
        Commands::Sources => {
            run_sources();
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                run_config_show(cli.data_root);
                Ok(())
            }
            ConfigAction::Path => {
                run_config_path();
                Ok(())
            }
            ConfigAction::SetDataRoot { path } => run_config_set_data_root(Some(path.as_path())),
            ConfigAction::ClearDataRoot => run_config_set_data_root(None),
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
