//! Write policy for generated test files
//!
//! Existing files are left alone unless the run is forced. Whether the target existed and the
//! write itself are separate steps; a run assumes nothing else touches the tests root.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fs;
use std::io;
use std::path::Path;

/// What the write policy did with a target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist and was created
    Written,
    /// The file existed and was overwritten because the run is forced
    Regenerated,
    /// The file existed and was left untouched
    Skipped,
}

/// Write `contents` to `target` unless it exists and `force` is off.
///
/// Missing parent directories are created.
pub fn write_if_needed(target: &Path, contents: &str, force: bool) -> io::Result<WriteOutcome> {
    let existed = target.exists();
    if existed && !force {
        return Ok(WriteOutcome::Skipped);
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, contents)?;
    tracing::debug!(path = %target.display(), existed, "wrote test file");

    Ok(if existed {
        WriteOutcome::Regenerated
    } else {
        WriteOutcome::Written
    })
}
