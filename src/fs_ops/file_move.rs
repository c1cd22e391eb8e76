//! File move implementation.
//! Attempts an atomic rename; across filesystems falls back to copy, verifies the
//! copy's size and only then removes the source.

use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::errors::{io_err, rename_err, FileManagerError, Result};

use super::copy::{copy_file, CopyReport};
use super::util::is_cross_device;

/// How a move was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStrategy {
    /// Same filesystem: a single atomic rename.
    Renamed,
    /// Different filesystems: copied, verified, then the source was removed.
    CopiedAndRemoved,
}

/// Move `src` to `dest`.
pub fn move_file(src: &Path, dest: &Path, chunk_size: usize) -> Result<MoveStrategy> {
    match fs::rename(src, dest) {
        Ok(()) => {
            info!(src = %src.display(), dest = %dest.display(), "Renamed file atomically");
            Ok(MoveStrategy::Renamed)
        }
        Err(e) if is_cross_device(&e) => {
            warn!(error = %e, "Atomic rename not possible across filesystems; copying instead");
            relocate_by_copy(src, dest, chunk_size)?;
            Ok(MoveStrategy::CopiedAndRemoved)
        }
        Err(e) => Err(rename_err("move file", src, dest, e)),
    }
}

/// Copy `src` -> `dest`, check the destination size against the source and
/// remove the source only when they match.
pub(crate) fn relocate_by_copy(src: &Path, dest: &Path, chunk_size: usize) -> Result<()> {
    relocate_with(src, dest, |s, d| copy_file(s, d, chunk_size))
}

fn relocate_with(
    src: &Path,
    dest: &Path,
    copy: impl FnOnce(&Path, &Path) -> Result<CopyReport>,
) -> Result<()> {
    let expected = fs::metadata(src)
        .map_err(io_err("inspect source file", src))?
        .len();

    let report = copy(src, dest)?;
    let actual = fs::metadata(dest)
        .map_err(io_err("inspect destination file", dest))?
        .len();
    if actual != expected || report.bytes != expected {
        return Err(FileManagerError::VerificationFailed {
            dest: dest.to_path_buf(),
            expected,
            actual,
        });
    }

    fs::remove_file(src).map_err(io_err("remove original file", src))?;
    info!(src = %src.display(), dest = %dest.display(), bytes = actual, "Copied file and removed source");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_ops::copy::copy_file_until;
    use crate::fs_ops::DEFAULT_CHUNK_SIZE;
    use tempfile::tempdir;

    #[test]
    fn same_filesystem_move_renames() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("a.bin");
        let dst = dir.path().join("b.bin");
        fs::write(&src, b"contents").unwrap();

        let how = move_file(&src, &dst, DEFAULT_CHUNK_SIZE).unwrap();
        assert_eq!(how, MoveStrategy::Renamed);
        assert!(!src.exists());
        assert_eq!(fs::read(&dst).unwrap(), b"contents");
    }

    #[test]
    fn copy_fallback_removes_source_after_verification() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("from.txt");
        let dst = dir.path().join("to.txt");
        let data = vec![7u8; 4096 + 3];
        fs::write(&src, &data).unwrap();

        relocate_by_copy(&src, &dst, 512).unwrap();
        assert!(!src.exists());
        assert_eq!(fs::read(&dst).unwrap(), data);
    }

    #[test]
    fn copy_fallback_keeps_source_when_copy_fails() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("from.txt");
        fs::write(&src, b"precious").unwrap();
        let dst = dir.path().join("missing_dir").join("to.txt");

        assert!(relocate_by_copy(&src, &dst, DEFAULT_CHUNK_SIZE).is_err());
        assert_eq!(fs::read(&src).unwrap(), b"precious");
    }

    #[test]
    fn missing_source_is_not_found() {
        let dir = tempdir().unwrap();
        let dst = dir.path().join("dst");
        let err = move_file(&dir.path().join("ghost"), &dst, DEFAULT_CHUNK_SIZE).unwrap_err();
        assert!(matches!(err, FileManagerError::NotFound { .. }));
        assert!(!dst.exists());
    }

    #[test]
    fn short_copy_fails_verification_and_keeps_source() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("from.txt");
        let dst = dir.path().join("to.txt");
        fs::write(&src, b"0123456789").unwrap();

        let err = relocate_with(&src, &dst, |_, d| {
            fs::write(d, b"01234").unwrap();
            Ok(CopyReport {
                bytes: 5,
                chunk_size: DEFAULT_CHUNK_SIZE,
            })
        })
        .unwrap_err();
        match err {
            FileManagerError::VerificationFailed { expected, actual, .. } => {
                assert_eq!((expected, actual), (10, 5));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(fs::read(&src).unwrap(), b"0123456789");
    }

    #[test]
    fn interrupted_copy_keeps_source() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("from.txt");
        let dst = dir.path().join("to.txt");
        fs::write(&src, vec![1u8; 64]).unwrap();

        let err = relocate_with(&src, &dst, |s, d| copy_file_until(s, d, 8, || true)).unwrap_err();
        assert!(matches!(err, FileManagerError::Interrupted));
        assert_eq!(fs::metadata(&src).unwrap().len(), 64);
    }

    #[test]
    fn move_into_missing_directory_blames_destination() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("a.bin");
        fs::write(&src, b"keep").unwrap();
        let dst = dir.path().join("nodir").join("b.bin");

        let err = move_file(&src, &dst, DEFAULT_CHUNK_SIZE).unwrap_err();
        assert_eq!(err.code(), "io_error");
        assert!(err.to_string().contains("nodir"), "msg: {err}");
        assert!(src.exists());
    }
}
