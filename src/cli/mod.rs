//! CLI argument parsing for confgen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The command implementation lives in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

/// Confgen: generate a runtime config for the PQDAG allocation system.
///
/// Reads the template at `<workspace_root>/backend/allocation/config.yaml`,
/// substitutes `${WORKSPACE_ROOT}` and `${DATASET_NAME}`, and writes the
/// result next to the template as `config_runtime.yaml`.
#[derive(Parser, Debug)]
#[command(name = "confgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the dataset being processed (e.g. watdiv100k).
    pub dataset_name: String,

    /// Workspace root path. Auto-detected from the current directory
    /// when omitted.
    pub workspace_root: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    ///
    /// Returns the clap error instead of exiting so `main` can map missing
    /// arguments to exit code 1 rather than clap's default 2.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Cli::try_parse()
    }
}
