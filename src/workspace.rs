//! Workspace root detection for confgen.
//!
//! The workspace root is the top-level PQDAG project directory from which
//! template and output paths are resolved. When the caller does not supply
//! it, we walk upward from a starting directory until one contains all of
//! the marker entries as direct children.
//!
//! This is a best-effort heuristic, not a general project-root-detection
//! algorithm: the check is existence-only (type, contents, and permissions
//! are not verified) and it assumes the fixed PQDAG directory layout.

use crate::error::{ConfgenError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Entries that must all exist as direct children of the workspace root.
pub const ROOT_MARKERS: &[&str] = &["backend", "frontend", "storage", "README.md"];

/// Auto-detect the workspace root starting from the current working directory.
pub fn detect_workspace_root() -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(|e| {
        ConfgenError::Filesystem(format!("failed to get current working directory: {}", e))
    })?;

    detect_workspace_root_from(&cwd)
}

/// Auto-detect the workspace root starting from a specific directory.
///
/// Returns the nearest ancestor (the starting directory included) whose
/// direct children satisfy all of [`ROOT_MARKERS`]. The parentless
/// filesystem root is never examined; reaching it without a match fails
/// with no partial result.
pub fn detect_workspace_root_from<P: AsRef<Path>>(start: P) -> Result<PathBuf> {
    let start = std::path::absolute(start.as_ref()).map_err(|e| {
        ConfgenError::Filesystem(format!(
            "failed to resolve '{}' to an absolute path: {}",
            start.as_ref().display(),
            e
        ))
    })?;

    let mut current = start.clone();
    loop {
        let Some(parent) = current.parent() else {
            break;
        };
        if has_all_markers(&current) {
            return Ok(current);
        }
        current = parent.to_path_buf();
    }

    Err(ConfgenError::WorkspaceDetection(start))
}

/// Check whether every marker exists as a direct child of `dir`.
fn has_all_markers(dir: &Path) -> bool {
    ROOT_MARKERS.iter().all(|marker| dir.join(marker).exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_markers(dir: &Path) {
        for marker in &["backend", "frontend", "storage"] {
            fs::create_dir_all(dir.join(marker)).unwrap();
        }
        fs::write(dir.join("README.md"), "# PQDAG\n").unwrap();
    }

    #[test]
    fn detects_starting_directory_itself() {
        let temp = TempDir::new().unwrap();
        create_markers(temp.path());

        let root = detect_workspace_root_from(temp.path()).unwrap();
        assert_eq!(root, std::path::absolute(temp.path()).unwrap());
    }

    #[test]
    fn detects_ancestor_from_nested_directory() {
        let temp = TempDir::new().unwrap();
        create_markers(temp.path());
        let nested = temp.path().join("backend/allocation/deep");
        fs::create_dir_all(&nested).unwrap();

        let root = detect_workspace_root_from(&nested).unwrap();
        assert_eq!(root, std::path::absolute(temp.path()).unwrap());
    }

    #[test]
    fn returns_nearest_qualifying_ancestor() {
        // An inner workspace nested inside an outer one wins when the walk
        // starts below the inner one.
        let temp = TempDir::new().unwrap();
        create_markers(temp.path());
        let inner = temp.path().join("storage/checkout");
        fs::create_dir_all(&inner).unwrap();
        create_markers(&inner);
        let start = inner.join("backend");

        let root = detect_workspace_root_from(&start).unwrap();
        assert_eq!(root, std::path::absolute(&inner).unwrap());
    }

    #[test]
    fn fails_when_no_ancestor_qualifies() {
        let temp = TempDir::new().unwrap();

        let result = detect_workspace_root_from(temp.path());
        assert!(matches!(
            result,
            Err(ConfgenError::WorkspaceDetection(_))
        ));
    }

    #[test]
    fn all_four_markers_are_required() {
        let temp = TempDir::new().unwrap();
        // Three of four markers: must not qualify.
        fs::create_dir_all(temp.path().join("backend")).unwrap();
        fs::create_dir_all(temp.path().join("frontend")).unwrap();
        fs::create_dir_all(temp.path().join("storage")).unwrap();

        let result = detect_workspace_root_from(temp.path());
        assert!(result.is_err());
    }

    #[test]
    fn marker_check_is_existence_only() {
        // Markers may be files or directories; only existence matters.
        let temp = TempDir::new().unwrap();
        for marker in ROOT_MARKERS {
            fs::write(temp.path().join(marker), "").unwrap();
        }

        let root = detect_workspace_root_from(temp.path()).unwrap();
        assert_eq!(root, std::path::absolute(temp.path()).unwrap());
    }
}
