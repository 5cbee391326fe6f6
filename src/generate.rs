//! Config generation for the PQDAG allocation system.
//!
//! Reads the static template, substitutes the placeholder tokens, writes the
//! runtime config, and parses the rendered text so the derived fields can be
//! reported. Each call is a one-shot transformation: one read, one write, no
//! shared state across invocations.

use crate::config::RuntimeConfig;
use crate::error::{ConfgenError, Result};
use crate::template;
use std::fs;
use std::path::{Path, PathBuf};

/// Template location relative to the workspace root.
pub const TEMPLATE_RELATIVE_PATH: &str = "backend/allocation/config.yaml";

/// Default output location relative to the workspace root.
pub const RUNTIME_RELATIVE_PATH: &str = "backend/allocation/config_runtime.yaml";

/// Generate the runtime config by replacing template variables.
///
/// Reads `<workspace_root>/backend/allocation/config.yaml`, substitutes
/// `${WORKSPACE_ROOT}` and `${DATASET_NAME}`, and writes the result to
/// `output_path` (default `<workspace_root>/backend/allocation/config_runtime.yaml`).
/// The write is a plain full overwrite; concurrent invocations targeting the
/// same output path race, last writer wins.
///
/// The template-missing check happens before any write, so a failed call
/// never creates or modifies the output file.
pub fn generate_config(
    workspace_root: &Path,
    dataset_name: &str,
    output_path: Option<&Path>,
) -> Result<RuntimeConfig> {
    let template_path = workspace_root.join(TEMPLATE_RELATIVE_PATH);
    if !template_path.exists() {
        return Err(ConfgenError::TemplateMissing(template_path));
    }

    let template_text = fs::read_to_string(&template_path).map_err(|e| {
        ConfgenError::Filesystem(format!(
            "failed to read template '{}': {}",
            template_path.display(),
            e
        ))
    })?;

    let rendered = template::substitute(
        &template_text,
        &workspace_root.display().to_string(),
        dataset_name,
    );

    let output_path = match output_path {
        Some(path) => path.to_path_buf(),
        None => workspace_root.join(RUNTIME_RELATIVE_PATH),
    };

    fs::write(&output_path, &rendered).map_err(|e| {
        ConfgenError::Filesystem(format!(
            "failed to write config '{}': {}",
            output_path.display(),
            e
        ))
    })?;

    println!("Config generated: {}", output_path.display());
    println!("  Workspace: {}", workspace_root.display());
    println!("  Dataset:   {}", dataset_name);

    RuntimeConfig::from_yaml(&rendered)
}

/// Resolve the default output path for a workspace root.
#[allow(dead_code)]
pub fn default_output_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(RUNTIME_RELATIVE_PATH)
}
