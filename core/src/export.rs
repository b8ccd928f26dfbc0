//! # Document Export
//!
//! Whole-file replacement of generated artifacts. Readers of the destination
//! either see the previous content or the new content, never a partial write.

use crate::error::{AppError, AppResult};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `contents` to `path` through a temporary file persisted over the target.
///
/// Missing parent directories are created.
pub fn write_document(path: &Path, contents: &str) -> AppResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .map_err(|e| AppError::General(format!("Failed to create output dir: {}", e)))?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| {
        AppError::General(format!("Failed to write {}: {}", path.display(), e.error))
    })?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Document written");
    Ok(())
}
