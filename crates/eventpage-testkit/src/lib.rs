//! Test utilities for eventpage
//!
//! This crate provides shared testing utilities used across the eventpage workspace.

pub mod fixtures;

pub use fixtures::{
    STOCK_PAGE, api_world_config_json, sample_like_config_json, write_config, write_stock_site,
};

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This ensures all test temporary files are centralized in a single location
/// that is gitignored and easy to clean up manually if needed.
///
/// # Returns
///
/// A `TempDir` instance that automatically cleans up on drop.
/// The directory is created at `.tmp/<random-name>` relative to the project root.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use eventpage_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("index.html");
/// std::fs::write(&file_path, "<html></html>").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");

    // Ensure .tmp/ exists
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    // Create unique subdirectory within .tmp/
    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_in_workspace_is_under_tmp() {
        let temp = temp_dir_in_workspace();
        assert!(temp.path().exists());
        assert_eq!(
            temp.path().parent().and_then(|p| p.file_name()),
            Some(std::ffi::OsStr::new(".tmp"))
        );
    }

    #[test]
    fn test_temp_dirs_are_unique() {
        let a = temp_dir_in_workspace();
        let b = temp_dir_in_workspace();
        assert_ne!(a.path(), b.path());
    }
}
