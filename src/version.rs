//! testgen version information.
//!
//! Exposed as a single constant so the CLI and any generated output agree on the same value.

/// The testgen version string (for example, `0.1.0`).
pub const TESTGEN_VERSION: &str = env!("CARGO_PKG_VERSION");
