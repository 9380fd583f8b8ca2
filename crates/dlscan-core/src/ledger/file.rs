//! On-disk form of the scan ledger: one pretty-printed JSON object mapping
//! license number to scan count.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::CoreError;

pub(super) type Counts = BTreeMap<String, u64>;

/// Read the ledger at `path`. A missing file or one holding only whitespace
/// is an empty ledger; anything else that cannot be read or decoded is an
/// error.
pub(super) fn read_counts(path: &Path) -> Result<Counts, CoreError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Counts::new()),
        Err(source) => {
            return Err(CoreError::LedgerRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if content.trim().is_empty() {
        return Ok(Counts::new());
    }

    serde_json::from_str(&content).map_err(|source| CoreError::LedgerDecode {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the ledger at `path` with `counts`.
///
/// The new content is written and synced to a sibling temp file first and
/// renamed over `path` only once complete, so a failed write leaves the
/// previous ledger intact.
pub(super) fn write_counts(path: &Path, counts: &Counts) -> Result<(), CoreError> {
    let mut content = serde_json::to_string_pretty(counts)?;
    content.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(path);
    let written = write_and_sync(&tmp, content.as_bytes()).and_then(|()| std::fs::rename(&tmp, path));
    if let Err(err) = written {
        // Best effort; the temp file may not exist.
        let _ = std::fs::remove_file(&tmp);
        return Err(CoreError::Io(err));
    }
    Ok(())
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// `<path>.tmp`, next to the ledger so the rename stays on one filesystem.
pub(super) fn temp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
