//! Config validation logic.
//! Verifies the working directory and the copy buffer bounds.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

use super::types::Config;
use super::MAX_COPY_BUFFER;

impl Config {
    /// Validate the working directory and copy buffer size.
    pub fn validate(&self) -> Result<()> {
        ensure_dir_exists_and_is_dir(&self.work_dir, "work_dir")?;
        ensure_readable(&self.work_dir, "work_dir")?;

        if self.copy_buffer_size == 0 || self.copy_buffer_size > MAX_COPY_BUFFER {
            bail!(
                "copy_buffer_size must be between 1 and {} bytes (got {})",
                MAX_COPY_BUFFER,
                self.copy_buffer_size
            );
        }

        info!(
            "Config validated: work_dir='{}' copy_buffer_size={} log_file='{}'",
            self.work_dir.display(),
            self.copy_buffer_size,
            self.log_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<none>".into())
        );
        Ok(())
    }
}

/// Ensure path exists and is a directory; emit clear errors with path context.
fn ensure_dir_exists_and_is_dir(path: &Path, name: &str) -> Result<()> {
    if !path.exists() {
        error!("{name} does not exist: {}", path.display());
        bail!("{name} does not exist: {}", path.display());
    }
    if !path.is_dir() {
        error!("{name} is not a directory: {}", path.display());
        bail!("{name} is not a directory: {}", path.display());
    }
    Ok(())
}

/// Ensure directory is readable by attempting to open its entries.
fn ensure_readable(path: &Path, name: &str) -> Result<()> {
    fs::read_dir(path).with_context(|| {
        format!("Cannot read {name} directory '{}'; check permissions", path.display())
    })?;
    debug!("{name} readable: {}", path.display());
    Ok(())
}
