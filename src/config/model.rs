//! RuntimeConfig struct definition.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parsed contents of a rendered `config_runtime.yaml`.
///
/// Three fields are required because the CLI reports them after generation;
/// every other key in the document is retained in `extra` so the struct
/// faithfully represents the whole mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Directory holding the dataset's fragment files.
    pub fragment_files_dir: String,

    /// Path to the fragment-to-machine affectation file.
    pub affectation_file: String,

    /// Scratch directory used by the allocation system.
    pub temp_dir: String,

    /// All remaining keys of the document, preserved as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}
