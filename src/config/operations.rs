//! RuntimeConfig parsing operations.

use super::model::RuntimeConfig;
use crate::error::{ConfgenError, Result};

impl RuntimeConfig {
    /// Parse a runtime config from a YAML string.
    ///
    /// Malformed YAML and missing required fields both surface as a parse
    /// error. No escaping policy is applied to substituted values; a value
    /// that breaks the key-value format fails here rather than silently
    /// producing a malformed result.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| ConfgenError::Parse(e.to_string()))
    }
}
