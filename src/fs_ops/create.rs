//! Create a new file holding the greeting line.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::errors::{io_err, FileManagerError, Result};

/// Content written into every newly created file.
pub const GREETING: &str = "Hello, this is a new file.\n";

/// Create `path` and write [`GREETING`] into it.
///
/// Uses exclusive creation, so an existing entry (file, directory or dangling
/// symlink) is reported as `AlreadyExists` and left untouched.
pub fn create_file(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(FileManagerError::InvalidInput("file name must not be empty".into()));
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(io_err("create file", path))?;
    file.write_all(GREETING.as_bytes())
        .map_err(io_err("write file", path))?;

    info!(path = %path.display(), "Created file");
    Ok(())
}
