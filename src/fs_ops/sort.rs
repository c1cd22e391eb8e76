//! Size-sorted listing of the regular files in a directory.
//!
//! Only entries whose own type is a regular file are kept: directories,
//! symlinks (even to files) and special files are skipped. Entries whose
//! metadata cannot be read are logged with `warn!` and skipped rather than
//! failing the whole listing.
//!
//! Sorting is stable, so files of equal size keep their enumeration order in
//! both directions.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::errors::{io_err, Result};

/// Name and byte size of one regular file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub name: String,
    pub size: u64,
}

impl fmt::Display for FileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} bytes", self.name, self.size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest to largest
    Ascending,
    /// Largest to smallest
    Descending,
}

impl SortOrder {
    /// Parse the menu's numeric answer: `1` ascending, `2` descending.
    pub fn from_menu(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(SortOrder::Ascending),
            "2" => Some(SortOrder::Descending),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        })
    }
}

impl FromStr for SortOrder {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => SortOrder::from_menu(other).ok_or_else(|| format!("invalid sort order: '{s}'")),
        }
    }
}

/// Collect a [`FileRecord`] for every regular file directly inside `dir`.
pub fn collect_file_records(dir: &Path) -> Result<Vec<FileRecord>> {
    let entries = fs::read_dir(dir).map_err(io_err("open directory", dir))?;

    let mut records = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };
        let name = entry.file_name().to_string_lossy().into_owned();

        match entry.file_type() {
            Ok(ft) if ft.is_file() => {}
            Ok(_) => continue,
            Err(e) => {
                warn!(name = %name, error = %e, "Skipping entry: cannot determine file type");
                continue;
            }
        }

        match entry.metadata() {
            Ok(meta) => records.push(FileRecord { name, size: meta.len() }),
            Err(e) => warn!(name = %name, error = %e, "Skipping entry: cannot read size"),
        }
    }
    Ok(records)
}

/// Stable sort by size in the requested order.
pub fn sort_records(records: &mut [FileRecord], order: SortOrder) {
    match order {
        SortOrder::Ascending => records.sort_by(|a, b| a.size.cmp(&b.size)),
        SortOrder::Descending => records.sort_by(|a, b| b.size.cmp(&a.size)),
    }
}

/// Regular files of `dir`, sorted by size.
pub fn sort_by_size(dir: &Path, order: SortOrder) -> Result<Vec<FileRecord>> {
    let mut records = collect_file_records(dir)?;
    sort_records(&mut records, order);
    debug!(dir = %dir.display(), %order, count = records.len(), "Sorted files by size");
    Ok(records)
}
