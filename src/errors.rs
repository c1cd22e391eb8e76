//! Typed error definitions for file_manager.
//! Every filesystem failure is classified into a small set of well-known kinds
//! so the menu can report them and tests can match on them.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::fs_ops::describe_io_error;

#[derive(Debug, Error)]
pub enum FileManagerError {
    #[error("{detail}")]
    NotFound { path: PathBuf, detail: String },

    #[error("File already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("{detail}")]
    PermissionDenied { path: PathBuf, detail: String },

    #[error("{detail}")]
    Io {
        path: PathBuf,
        detail: String,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    InvalidInput(String),

    #[error("Copy verification failed for {}: expected {expected} bytes, found {actual} bytes", .dest.display())]
    VerificationFailed {
        dest: PathBuf,
        expected: u64,
        actual: u64,
    },

    #[error("Operation interrupted by user")]
    Interrupted,

    /// Writing to the caller's output stream failed; the input file is not at fault.
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl FileManagerError {
    /// Classify an `io::Error` raised while performing `op` on `path`.
    pub fn from_io(op: &str, path: &Path, e: io::Error) -> Self {
        let detail = describe_io_error(op, path, &e);
        let path = path.to_path_buf();
        match e.kind() {
            io::ErrorKind::NotFound => FileManagerError::NotFound { path, detail },
            io::ErrorKind::AlreadyExists => FileManagerError::AlreadyExists(path),
            io::ErrorKind::PermissionDenied => FileManagerError::PermissionDenied { path, detail },
            _ => FileManagerError::Io {
                path,
                detail,
                source: e,
            },
        }
    }

    /// Stable short identifier, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            FileManagerError::NotFound { .. } => "not_found",
            FileManagerError::AlreadyExists(_) => "already_exists",
            FileManagerError::PermissionDenied { .. } => "permission_denied",
            FileManagerError::Io { .. } => "io_error",
            FileManagerError::InvalidInput(_) => "invalid_input",
            FileManagerError::VerificationFailed { .. } => "verification_failed",
            FileManagerError::Interrupted => "interrupted",
            FileManagerError::Output(_) => "output_error",
        }
    }
}

/// Adapter for `.map_err(...)`: classify an io::Error for `op` on `path`.
pub fn io_err<'a>(op: &'a str, path: &'a Path) -> impl FnOnce(io::Error) -> FileManagerError + 'a {
    move |e| FileManagerError::from_io(op, path, e)
}

/// Classify a failed rename of `from` to `to`. A missing entry while `from`
/// is still present means the destination's directory is missing.
pub fn rename_err(op: &str, from: &Path, to: &Path, e: io::Error) -> FileManagerError {
    if e.kind() == io::ErrorKind::NotFound && from.symlink_metadata().is_ok() {
        let detail = describe_io_error(&format!("{op} to"), to, &e);
        return FileManagerError::Io {
            path: to.to_path_buf(),
            detail,
            source: e,
        };
    }
    FileManagerError::from_io(op, from, e)
}

pub type Result<T> = std::result::Result<T, FileManagerError>;
