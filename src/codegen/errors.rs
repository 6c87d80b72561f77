//! Define error types for test-file rendering.
//!
//! These are synthesis failures: the spec entry or the solution's shape cannot be expressed as a
//! Rust test. They never abort a run; the orchestrator reports them and moves on.

use thiserror::Error;

/// Error while rendering a test file.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("value `{0}` has no Rust literal form for its target type")]
    UnsupportedValue(String),

    #[error("no input given for parameter `{0}`")]
    MissingArgument(String),

    #[error("input `{0}` does not match any parameter")]
    UnexpectedArgument(String),

    #[error("`{0}` is not a valid Rust path")]
    InvalidPath(String),

    #[error("syn parse error: {0}")]
    SynParse(String),

    #[error("case {index}: {source}")]
    Case {
        index: usize,
        #[source]
        source: Box<RenderError>,
    },
}

impl RenderError {
    pub(crate) fn in_case(self, index: usize) -> Self {
        RenderError::Case {
            index,
            source: Box::new(self),
        }
    }
}
