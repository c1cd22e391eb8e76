use std::fs;
use std::path::Path;
use tracing::info;

use crate::errors::{io_err, rename_err, Result};

/// Delete a single file.
pub fn delete_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(io_err("delete file", path))?;
    info!(path = %path.display(), "Deleted file");
    Ok(())
}

/// Rename `from` to `to` with the filesystem's atomic rename.
pub fn rename_file(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| rename_err("rename file", from, to, e))?;
    info!(src = %from.display(), dest = %to.display(), "Renamed file");
    Ok(())
}
