use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not
        // thread-safe. Lock it so tests don't race even if a #[serial]
        // annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Create a temporary PQDAG workspace: all four root markers plus a
/// config template containing both placeholder tokens.
pub(crate) fn create_test_workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    for dir in &["backend/allocation", "frontend", "storage"] {
        std::fs::create_dir_all(path.join(dir)).unwrap();
    }
    std::fs::write(path.join("README.md"), "# PQDAG\n").unwrap();

    std::fs::write(
        path.join("backend/allocation/config.yaml"),
        "fragment_files_dir: ${WORKSPACE_ROOT}/data\n\
         dataset: ${DATASET_NAME}\n\
         affectation_file: ${WORKSPACE_ROOT}/aff.txt\n\
         temp_dir: /tmp/${DATASET_NAME}\n",
    )
    .unwrap();

    temp_dir
}
