//! Settings document on disk.
//!
//! The document is a flat JSON object. Values written by this crate are
//! strings, but anything else already in the file is kept as is. Writes go
//! through an owner-only temporary file and a rename.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use super::error::SettingsError;

/// Directory name under the platform configuration directory.
pub const APP_DIR: &str = "sakari-cli";

/// File name of the settings document.
pub const FILE_NAME: &str = "config.json";

pub(crate) type Document = Map<String, Value>;

/// Returns the default settings path, e.g. `~/.config/sakari-cli/config.json` on Linux.
pub fn default_settings_path() -> Result<PathBuf, SettingsError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or(SettingsError::NoConfigDir)
}

/// Loads the document, treating a missing file as empty.
pub(crate) fn load_document(path: &Path) -> Result<Document, SettingsError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "settings file not found, using defaults");
            return Ok(Document::new());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_owned(),
                source,
            });
        }
    };

    if content.trim().is_empty() {
        return Ok(Document::new());
    }

    serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_owned(),
        source,
    })
}

/// Writes the document atomically.
pub(crate) fn save_document(path: &Path, document: &Document) -> Result<(), SettingsError> {
    let io_err = |source: std::io::Error| SettingsError::Io {
        path: path.to_owned(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    let json = serde_json::to_string_pretty(document).map_err(|source| SettingsError::Parse {
        path: path.to_owned(),
        source,
    })?;

    let temp_path = path.with_extension("json.tmp");
    let written = write_private(&temp_path, json.as_bytes())
        .and_then(|()| std::fs::rename(&temp_path, path));
    if let Err(source) = written {
        let _ = std::fs::remove_file(&temp_path);
        return Err(io_err(source));
    }

    debug!(path = %path.display(), keys = document.len(), "settings saved");
    Ok(())
}

/// Write `contents` to a freshly created file that only the owner can read.
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    match std::fs::remove_file(path) {
        Err(err) if err.kind() != ErrorKind::NotFound => return Err(err),
        _ => {}
    }
    let mut file = create_private(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(unix)]
fn create_private(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn create_private(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}
