//! Parsed runtime configuration for the PQDAG allocation system.
//!
//! The generator renders the YAML template, writes it, then parses the
//! rendered text into [`RuntimeConfig`] so the derived paths can be
//! reported back to the caller.

mod model;
mod operations;


pub use model::RuntimeConfig;
