//! Persistent settings (`~/.config/showlist/settings.toml`).
//!
//! Only one value lives here today: `paths.data_root`, the directory the
//! pipeline reads from and writes to.

use std::path::{Path, PathBuf};

use crate::error::ImportError;
use crate::layout::DEFAULT_DATA_ROOT;

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("showlist").join("settings.toml")
}

/// Resolve the data root using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `paths.data_root` in the settings file
/// 3. `./data`
pub fn resolve_data_root(cli_override: Option<PathBuf>) -> PathBuf {
    resolve_data_root_from(cli_override, &settings_path())
}

/// Same as [`resolve_data_root`] but reading an explicit settings file.
pub fn resolve_data_root_from(cli_override: Option<PathBuf>, settings: &Path) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_data_root(settings) {
        return p;
    }
    PathBuf::from(DEFAULT_DATA_ROOT)
}

const PATHS_TABLE: &str = "paths";
const DATA_ROOT_KEY: &str = "data_root";

fn load_data_root(settings: &Path) -> Option<PathBuf> {
    let doc = read_document(settings).ok()??;
    let root = doc.get(PATHS_TABLE)?.get(DATA_ROOT_KEY)?.as_str()?;
    (!root.is_empty()).then(|| PathBuf::from(root))
}

/// Parse the settings file. `Ok(None)` when the file does not exist.
fn read_document(settings: &Path) -> Result<Option<toml::Table>, ImportError> {
    let contents = match std::fs::read_to_string(settings) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ImportError::io(settings, e)),
    };
    contents
        .parse::<toml::Table>()
        .map(Some)
        .map_err(|e| ImportError::settings(format!("{}: {e}", settings.display())))
}

/// Save (or clear) the data root in the settings file.
pub fn save_data_root(path: Option<&Path>) -> Result<(), ImportError> {
    save_data_root_to(path, &settings_path())
}

/// Save (or clear) the data root in an explicit settings file.
///
/// Unrelated keys survive. A settings file that doesn't parse is left alone
/// and reported instead of being overwritten.
pub fn save_data_root_to(path: Option<&Path>, settings: &Path) -> Result<(), ImportError> {
    let mut doc = read_document(settings)?.unwrap_or_default();

    match path {
        Some(p) => {
            let root = toml::Value::String(p.to_string_lossy().into_owned());
            paths_table(&mut doc)?.insert(DATA_ROOT_KEY.to_string(), root);
        }
        None => {
            if let Some(paths) = doc.get_mut(PATHS_TABLE).and_then(toml::Value::as_table_mut) {
                paths.remove(DATA_ROOT_KEY);
            }
        }
    }

    let serialized =
        toml::to_string_pretty(&doc).map_err(|e| ImportError::settings(e.to_string()))?;
    replace_file(settings, serialized.as_bytes())
}

/// The `[paths]` table, created when absent.
fn paths_table(doc: &mut toml::Table) -> Result<&mut toml::Table, ImportError> {
    doc.entry(PATHS_TABLE)
        .or_insert_with(|| toml::Value::Table(toml::Table::new()))
        .as_table_mut()
        .ok_or_else(|| ImportError::settings(format!("[{PATHS_TABLE}] is not a table")))
}

/// Write `contents` next to `target` and rename it into place.
fn replace_file(target: &Path, contents: &[u8]) -> Result<(), ImportError> {
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ImportError::io(parent, e))?;
    }
    let tmp = target.with_extension("toml.tmp");
    std::fs::write(&tmp, contents).map_err(|e| ImportError::io(&tmp, e))?;
    std::fs::rename(&tmp, target).map_err(|e| ImportError::io(target, e))
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let doc = read_document(&settings_path()).ok()??;
    toml::to_string_pretty(&doc).ok()
}
