//! Report file collection

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Read every regular file under `dir` into an archive map.
///
/// Files are renamed to `reports/<sequence><ext>` so the bundle never leaks
/// absolute paths; only the original extension is kept. The walk is sorted by
/// file name, so sequence numbers are stable across runs. Exceeding `limit`
/// aborts the walk with an error naming both counts.
///
/// A missing directory behaves like an empty one.
pub fn read_reports(dir: &Path, limit: usize) -> Result<BTreeMap<String, Vec<u8>>> {
    let mut files = BTreeMap::new();

    if !dir.is_dir() {
        return Ok(files);
    }

    let mut seq = 0usize;

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            Error::io(e.into(), path, "walk")
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let content = fs::read(path).map_err(|e| Error::io(e, path, "read"))?;

        seq += 1;
        let name = match path.extension() {
            Some(ext) => format!("reports/{seq}.{}", ext.to_string_lossy()),
            None => format!("reports/{seq}"),
        };

        debug!(file = %path.display(), name, size = content.len(), "collect report");
        files.insert(name, content);

        if files.len() > limit {
            // Avoid bundling a whole repository.
            return Err(Error::TooManyReports {
                found: files.len(),
                limit,
            });
        }
    }

    Ok(files)
}
