//! Chunked file copy.
//!
//! - The destination is created or truncated; the source is never modified.
//! - Content moves through a single reusable buffer of `chunk_size` bytes.
//! - A stop check runs between chunks (the shutdown flag for `copy_file`); an interrupted copy leaves a
//!   partially written destination behind (no rollback).
//! - Both handles are scoped to the call and released on every exit path.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::errors::{io_err, FileManagerError, Result};
use crate::shutdown;

use super::util::same_file;

/// Default chunk size for copies, in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Result of a completed copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyReport {
    /// Total bytes copied from source to destination.
    pub bytes: u64,
    /// Size of the buffer used for copying.
    pub chunk_size: usize,
}

/// Copy `src` -> `dest` in chunks of `chunk_size` bytes, stopping early when a
/// shutdown has been requested.
pub fn copy_file(src: &Path, dest: &Path, chunk_size: usize) -> Result<CopyReport> {
    copy_file_until(src, dest, chunk_size, shutdown::is_requested)
}

/// Like [`copy_file`], but asks `stop` before each chunk.
pub(crate) fn copy_file_until(
    src: &Path,
    dest: &Path,
    chunk_size: usize,
    mut stop: impl FnMut() -> bool,
) -> Result<CopyReport> {
    if chunk_size == 0 {
        return Err(FileManagerError::InvalidInput(
            "copy chunk size must be at least one byte".into(),
        ));
    }
    // Opening the destination truncates it, which would wipe the source.
    if same_file(src, dest) {
        return Err(FileManagerError::InvalidInput(format!(
            "source and destination are the same file: {}",
            src.display()
        )));
    }

    let mut reader = File::open(src).map_err(io_err("open source file", src))?;
    let is_dir = reader
        .metadata()
        .map_err(io_err("inspect source file", src))?
        .is_dir();
    if is_dir {
        return Err(FileManagerError::InvalidInput(format!(
            "source is a directory: {}",
            src.display()
        )));
    }

    let mut writer = File::create(dest).map_err(io_err("open destination file", dest))?;

    let mut buf = vec![0u8; chunk_size];
    let mut bytes: u64 = 0;
    loop {
        if stop() {
            warn!(src = %src.display(), dest = %dest.display(), bytes, "Copy interrupted; destination left partial");
            return Err(FileManagerError::Interrupted);
        }
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(FileManagerError::from_io("read source file", src, e)),
        };
        writer
            .write_all(&buf[..n])
            .map_err(io_err("write destination file", dest))?;
        bytes += n as u64;
    }
    writer.flush().map_err(io_err("flush destination file", dest))?;

    debug!(chunk_size, "Copy loop finished");
    info!(src = %src.display(), dest = %dest.display(), bytes, "Copied file");
    Ok(CopyReport { bytes, chunk_size })
}
