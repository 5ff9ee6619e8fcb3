//! Strategies for writing an edited [`Document`] back to disk.

use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use lineswap_config::WriteMode;
use tempfile::Builder;
use tracing::debug;

use crate::document::Document;

/// Writes `document` to `path` using the selected `mode`.
///
/// # Errors
///
/// Returns the underlying I/O error from opening, writing, syncing or
/// renaming the destination.
pub(crate) fn persist(document: &Document, path: &Path, mode: WriteMode) -> io::Result<()> {
    match mode {
        WriteMode::InPlace => write_in_place(document, path),
        WriteMode::Atomic => write_atomic(document, path),
    }
}

/// Truncates `path` and rewrites it through a single handle.
///
/// The handle is dropped on every return path, including after a failed
/// write, so no descriptor outlives the call.
fn write_in_place(document: &Document, path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().write(true).truncate(true).open(path)?;
    let mut writer = BufWriter::new(file);
    document.write_to(&mut writer)?;
    writer.flush()?;
    debug!(path = %path.display(), "rewrote file in place");
    Ok(())
}

/// Writes a sibling temporary file and renames it over `path`.
///
/// Symlinks are resolved first so the rename replaces the file they point
/// at and the link itself survives. The temporary file inherits the
/// destination's permissions before the rename and is removed automatically
/// if any step fails.
fn write_atomic(document: &Document, path: &Path) -> io::Result<()> {
    let target = fs::canonicalize(path)?;
    let directory = target.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(&target)?.permissions();

    let mut builder = Builder::new();
    builder.prefix(".lineswap-");
    let mut temp_file = builder.tempfile_in(directory)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file_mut());
        document.write_to(&mut writer)?;
        writer.flush()?;
    }
    temp_file.as_file().sync_all()?;
    temp_file.as_file().set_permissions(permissions)?;
    temp_file.persist(&target).map_err(|error| error.error)?;
    debug!(path = %path.display(), target = %target.display(), "replaced file atomically");
    Ok(())
}
