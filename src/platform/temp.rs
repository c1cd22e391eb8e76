//! Unique sibling filenames for atomic write operations.
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Hidden sibling temp name for `target`.
/// Pattern: .file_manager.tmp.<pid>.<nanos>.<seq>
pub(super) fn tmp_sibling_name(target: &Path) -> PathBuf {
    let pid = std::process::id();
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_nanos()).unwrap_or(0);
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    let name = format!(".file_manager.tmp.{pid}.{nanos}.{seq}");
    target.parent().unwrap_or_else(|| Path::new(".")).join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_names_differ_and_stay_in_parent() {
        let target = Path::new("/some/dir/config.xml");
        let a = tmp_sibling_name(target);
        let b = tmp_sibling_name(target);
        assert_ne!(a, b);
        assert_eq!(a.parent(), target.parent());
    }
}
