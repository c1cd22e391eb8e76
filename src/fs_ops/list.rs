use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::{io_err, Result};

/// Entry names of `dir` in filesystem order, preceded by `.` and `..`.
pub fn list_dir(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(io_err("open directory", dir))?;

    let mut names = vec![".".to_string(), "..".to_string()];
    for entry in entries {
        let entry = entry.map_err(io_err("read directory", dir))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    debug!(dir = %dir.display(), count = names.len(), "Listed directory");
    Ok(names)
}
