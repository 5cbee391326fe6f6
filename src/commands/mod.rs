//! Command implementation for confgen.
//!
//! There is a single command: resolve the workspace root (auto-detecting it
//! when the caller did not supply one), run the generator, and print the
//! derived fields from the parsed result.

use crate::cli::Cli;
use crate::error::{ConfgenError, Result};
use crate::generate;
use crate::workspace;
use std::path::PathBuf;

/// Execute the generator with the parsed CLI arguments.
pub fn run(cli: Cli) -> Result<()> {
    let workspace_root = resolve_workspace_root(cli.workspace_root)?;

    let config = generate::generate_config(&workspace_root, &cli.dataset_name, None)?;

    println!();
    println!("Generated configuration:");
    println!("  Fragment dir: {}", config.fragment_files_dir);
    println!("  Affectation:  {}", config.affectation_file);
    println!("  Temp dir:     {}", config.temp_dir);

    Ok(())
}

/// Normalize an explicit workspace root to absolute, or auto-detect one
/// from the current working directory.
fn resolve_workspace_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => std::path::absolute(&path).map_err(|e| {
            ConfgenError::Filesystem(format!(
                "failed to resolve '{}' to an absolute path: {}",
                path.display(),
                e
            ))
        }),
        None => {
            let root = workspace::detect_workspace_root()?;
            println!("Auto-detected workspace: {}", root.display());
            Ok(root)
        }
    }
}
