use std::path::PathBuf;

/// Errors that can occur while acquiring source archives.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("File {member} not found in {}", archive.display())]
    MissingMember { archive: PathBuf, member: String },

    #[error("Failed to acquire any of {0} source(s)")]
    NothingAcquired(usize),
}
