//! Atomic file replacement
//!
//! Readers of the target path observe either the previous complete content
//! or the new complete content, never a truncated file:
//! 1. Write to a temporary file in the target's directory (same filesystem)
//! 2. Fsync the temporary file
//! 3. Persist (rename over the target; Windows compatible via tempfile)
//! 4. Fsync the parent directory (Unix only)

use crate::error::{EventpageError, Result};
use log::debug;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace `path` with `content` atomically
///
/// On failure the original file is left untouched and the temporary file is
/// removed when it drops.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let write_error = |stage: &str, e: &dyn std::fmt::Display| EventpageError::Write {
        path: path.to_path_buf(),
        reason: format!("{}: {}", stage, e),
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file =
        NamedTempFile::new_in(parent).map_err(|e| write_error("failed to create temp file", &e))?;

    temp_file
        .write_all(content)
        .map_err(|e| write_error("failed to write temp file", &e))?;

    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| write_error("failed to sync temp file", &e))?;

    // Keep the original permissions; NamedTempFile is created 0600
    if let Ok(metadata) = std::fs::metadata(path) {
        temp_file
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| write_error("failed to copy permissions", &e))?;
    }

    temp_file
        .persist(path)
        .map_err(|e| write_error("failed to persist temp file", &e.error))?;

    #[cfg(unix)]
    {
        use std::fs::File;
        let parent_file =
            File::open(parent).map_err(|e| write_error("failed to open parent dir", &e))?;
        parent_file
            .sync_all()
            .map_err(|e| write_error("failed to sync parent dir", &e))?;
    }

    debug!("atomically wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
