//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::error::{Result, fs::io_error};

/// Resolve the repository root from optional argument
///
/// If a root is provided, use it. Otherwise, resolve to the current directory.
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| io_error(format!("Failed to get current directory: {e}"))),
    }
}

/// Anchor a relative command-line path at the repository root
pub fn under_root(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
