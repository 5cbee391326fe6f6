//! Placeholder substitution for config templates.
//!
//! The template contains two literal placeholder tokens that are replaced by
//! plain substring replacement. This is intentionally not a templating-engine
//! pass: no escaping, nesting, or conditional logic is supported, and any
//! accidental literal occurrence of a token elsewhere in the template is also
//! replaced.

/// Literal token substituted with the workspace root path.
pub const WORKSPACE_ROOT_TOKEN: &str = "${WORKSPACE_ROOT}";

/// Literal token substituted with the dataset name.
pub const DATASET_NAME_TOKEN: &str = "${DATASET_NAME}";

/// Replace every occurrence of both placeholder tokens.
///
/// The two tokens are distinct and non-overlapping, so the substitution
/// order does not affect the result.
pub fn substitute(template: &str, workspace_root: &str, dataset_name: &str) -> String {
    template
        .replace(WORKSPACE_ROOT_TOKEN, workspace_root)
        .replace(DATASET_NAME_TOKEN, dataset_name)
}
