use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Merge, enrichment, or artifact writing failed
    #[error("{0}")]
    Import(#[from] showlist_import::ImportError),

    /// Source acquisition failed
    #[error("Fetch error: {0}")]
    Fetch(#[from] showlist_fetch::FetchError),

    /// `--platform` named no known source
    #[error("Unknown platform {0:?} (run `showlist sources` for the list)")]
    UnknownPlatform(String),

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
