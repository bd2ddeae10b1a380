//! Download source archives and extract their titles CSV.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::FetchError;
use crate::sources::Source;

/// A titles CSV that is ready on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acquired {
    pub platform: String,
    pub csv_path: PathBuf,
}

/// Download `url` to `target`, replacing any existing file.
///
/// Returns the number of bytes written.
pub fn download(url: &str, target: &Path) -> Result<u64, FetchError> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    let response = reqwest::blocking::get(url)?;
    if !response.status().is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let bytes = response.bytes()?;
    fs::write(target, &bytes)?;
    Ok(bytes.len() as u64)
}

/// Extract the archive member named `member` into `out_dir/<member>`.
pub fn extract_member(zip_path: &Path, member: &str, out_dir: &Path) -> Result<PathBuf, FetchError> {
    let file = File::open(zip_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    let mut entry = match archive.by_name(member) {
        Ok(entry) => entry,
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(FetchError::MissingMember {
                archive: zip_path.to_path_buf(),
                member: member.to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let file_name = Path::new(member)
        .file_name()
        .ok_or_else(|| FetchError::MissingMember {
            archive: zip_path.to_path_buf(),
            member: member.to_string(),
        })?;

    fs::create_dir_all(out_dir)?;
    let out_path = out_dir.join(file_name);
    let mut out = File::create(&out_path)?;
    io::copy(&mut entry, &mut out)?;
    Ok(out_path)
}

/// Download one source's archive and extract its titles CSV.
pub fn acquire_source(
    source: &Source,
    downloaded_dir: &Path,
    extracted_dir: &Path,
) -> Result<Acquired, FetchError> {
    let zip_path = downloaded_dir.join(source.archive_name);
    let size = download(source.url, &zip_path)?;
    log::info!("File downloaded: {} ({size} bytes)", zip_path.display());

    let csv_path = extract_member(&zip_path, source.csv_name, extracted_dir)?;
    log::info!("Extracted CSV file to {}", csv_path.display());

    Ok(Acquired {
        platform: source.platform.to_string(),
        csv_path,
    })
}

/// Acquire every source, skipping the ones that fail.
///
/// Failures are warned but don't fail the entire operation; an error is
/// returned only when nothing at all could be acquired.
pub fn acquire_all(
    sources: &[Source],
    downloaded_dir: &Path,
    extracted_dir: &Path,
) -> Result<Vec<Acquired>, FetchError> {
    let mut acquired = Vec::new();

    for source in sources {
        log::info!("Fetching {} from {}", source.platform, source.url);
        match acquire_source(source, downloaded_dir, extracted_dir) {
            Ok(a) => acquired.push(a),
            Err(e) => log::warn!("Failed to acquire {}: {e}", source.platform),
        }
    }

    if acquired.is_empty() && !sources.is_empty() {
        return Err(FetchError::NothingAcquired(sources.len()));
    }
    Ok(acquired)
}
