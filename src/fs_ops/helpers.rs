//! I/O error description helpers.
//!
//! Turns a raw io::Error into a single human-friendly line naming the failed
//! operation, the path, the system-reported reason and a platform-aware hint.
//!
//! Usage:
//!   let msg = describe_io_error("open file", path, &e);

use std::io;
use std::path::Path;

#[cfg(unix)]
fn unix_hint(code: i32) -> Option<&'static str> {
    let hint = match code {
        libc::EACCES | libc::EPERM => "permission denied; check ownership and permissions",
        libc::EXDEV => "cross-filesystem; atomic rename not possible",
        libc::EBUSY => "resource busy; ensure no other process is using it",
        libc::ENOENT => "path not found; verify it exists",
        libc::EEXIST => "already exists; pick a unique name or remove the target",
        libc::EISDIR => "is a directory; only regular files are supported",
        libc::ENOTDIR => "a path component is not a directory",
        libc::ENOTEMPTY => "directory not empty",
        libc::ENOSPC => "insufficient space on device",
        libc::EROFS => "read-only filesystem; cannot write here",
        libc::ELOOP => "too many symbolic link levels (ELOOP); possible symlink cycle",
        libc::ENAMETOOLONG => "filename or path too long; shorten path segments",
        libc::EMFILE => "process file descriptor limit reached; close files or raise limits",
        libc::ENFILE => "system-wide file table overflow; reduce open files",
        _ => return None,
    };
    Some(hint)
}

#[cfg(windows)]
fn windows_hint(code: i32) -> Option<&'static str> {
    let hint = match code {
        5 => "access denied; check permissions",                     // ERROR_ACCESS_DENIED
        17 => "not same device; cross-filesystem move",              // ERROR_NOT_SAME_DEVICE
        32 => "sharing violation; file is in use",                   // ERROR_SHARING_VIOLATION
        2 | 3 => "path not found; verify it exists",                 // FILE/PATH NOT FOUND
        80 | 183 => "already exists; pick a unique name",            // ERROR_FILE_EXISTS / ALREADY_EXISTS
        112 => "insufficient disk space",                            // ERROR_DISK_FULL
        19 => "write protected / read-only media",                   // ERROR_WRITE_PROTECT
        206 => "filename or path too long (MAX_PATH exceeded)",      // ERROR_FILENAME_EXCED_RANGE
        4 => "too many open files; close handles or increase limit", // ERROR_TOO_MANY_OPEN_FILES
        _ => return None,
    };
    Some(hint)
}

fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and permissions"),
        io::ErrorKind::NotFound => Some("path not found; verify it exists"),
        io::ErrorKind::AlreadyExists => Some("already exists; remove or choose a unique name"),
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => {
            Some("busy/timed out; retry after the current write finishes")
        }
        _ => None,
    }
}

/// Format `op 'path': reason (hint) [os code: N]`.
pub fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("Failed to {} '{}': {}", op, path.display(), e);

    let hint = match e.raw_os_error() {
        #[cfg(unix)]
        Some(code) => unix_hint(code),
        #[cfg(windows)]
        Some(code) => windows_hint(code),
        #[cfg(not(any(unix, windows)))]
        Some(_) => kind_hint(e.kind()),
        None => kind_hint(e.kind()),
    };
    if let Some(hint) = hint {
        msg.push_str(" (");
        msg.push_str(hint);
        msg.push(')');
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {}]", code));
    }
    msg
}
