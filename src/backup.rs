//! Timestamped workbook copies and their cleanup

use crate::error::{GridError, GridResult};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Copy `workbook` next to itself as `<prefix><YYYYmmdd_HHMMSS>_<file name>`
pub fn create_backup(workbook: &Path, prefix: &str) -> GridResult<PathBuf> {
    if !workbook.exists() {
        return Err(GridError::MissingFile(workbook.to_path_buf()));
    }
    let file_name = workbook
        .file_name()
        .ok_or_else(|| GridError::Backup(format!("'{}' is not a file", workbook.display())))?
        .to_string_lossy();

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let backup = workbook.with_file_name(format!("{}{}_{}", prefix, timestamp, file_name));

    fs::copy(workbook, &backup)?;
    debug!(backup = %backup.display(), "backup created");
    Ok(backup)
}

#[derive(Debug, Default)]
pub struct PurgeReport {
    pub deleted: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

/// Delete every file in `dir` matching the glob `pattern`
///
/// A file that cannot be removed is recorded and the purge carries on.
pub fn purge_backups(dir: &Path, pattern: &str) -> GridResult<PurgeReport> {
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    let full_pattern = format!(
        "{}/{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        pattern
    );

    let entries = glob::glob(&full_pattern)
        .map_err(|e| GridError::Backup(format!("Invalid backup pattern '{}': {}", pattern, e)))?;

    let mut report = PurgeReport::default();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                report.failed.push((e.path().to_path_buf(), e.to_string()));
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }
        match fs::remove_file(&path) {
            Ok(()) => report.deleted.push(path),
            Err(e) => report.failed.push((path, e.to_string())),
        }
    }
    Ok(report)
}
