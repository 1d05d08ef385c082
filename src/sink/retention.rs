//! Deletion of the oldest dated log files beyond the retention count.
use std::fs;
use std::path::Path;

use crate::error::SinkError;

/// Naming scheme shared by all files of one sink.
#[derive(Debug, Clone, Copy)]
pub(super) struct Scheme<'a> {
    pub(super) prefix: &'a str,
    pub(super) extension: &'a str,
    /// Name of the file the sink has open. It is never deleted and always
    /// counts toward the kept files.
    pub(super) current: &'a str,
}

impl Scheme<'_> {
    /// Names of another length belong to some other scheme.
    fn matches(&self, name: &str) -> bool {
        name.len() == self.current.len()
            && name.starts_with(self.prefix)
            && name.ends_with(self.extension)
    }
}

/// Names to delete so that at most `keep` remain, oldest first.
///
/// Names embed a fixed-width `YYYY-MM-DD` date, so ascending order is
/// chronological order. `current` is never selected and takes one slot of
/// `keep`, even when newer-dated names exist.
fn select_expired(mut names: Vec<String>, current: &str, keep: usize) -> Vec<String> {
    names.retain(|name| name != current);
    let keep_others = keep.saturating_sub(1);
    if names.len() <= keep_others {
        return Vec::new();
    }
    names.sort_unstable();
    let excess = names.len() - keep_others;
    names.truncate(excess);
    names
}

/// Scan `dir` and delete the oldest files of `scheme` beyond `keep`.
///
/// Returns how many files were removed. A file that cannot be removed is
/// reported and skipped.
pub(super) fn prune(dir: &Path, scheme: Scheme<'_>, keep: usize) -> Result<usize, SinkError> {
    let scan_err = |source| SinkError::ScanDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(scan_err)? {
        let entry = entry.map_err(scan_err)?;
        if !entry.file_type().is_ok_and(|t| t.is_file()) {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string()
            && scheme.matches(&name)
        {
            names.push(name);
        }
    }

    let mut removed = 0;
    for name in select_expired(names, scheme.current, keep) {
        let path = dir.join(&name);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed expired log file");
                removed += 1;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot remove expired log file");
            }
        }
    }
    Ok(removed)
}
