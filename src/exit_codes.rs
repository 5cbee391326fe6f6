//! Exit code constants for the confgen CLI.
//!
//! The CLI has exactly two outcomes:
//! - 0: Success
//! - 1: Any failure (bad args, missing template, detection failure, I/O, parse)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, missing template, workspace detection
/// failure, filesystem error, or parse error.
pub const FAILURE: i32 = 1;
