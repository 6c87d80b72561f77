//! Orphaned test cleanup
//!
//! A generated test whose solution is gone would fail to compile, so it is deleted before any
//! new tests are written.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::discovery::{self, SolutionId};
use crate::report::GenerationReporter;

/// Delete generated tests whose identifier is not in `known`; return the identifiers removed.
#[tracing::instrument(skip_all, fields(known = known.len()))]
pub fn sweep<V>(
    known: &BTreeMap<SolutionId, V>,
    config: &GeneratorConfig,
    reporter: &mut dyn GenerationReporter,
) -> BTreeSet<SolutionId> {
    let tests = discovery::discover_tests(&config.tests_root, &config.test_prefix, &config.extension);
    let mut removed = BTreeSet::new();

    for (id, path) in tests {
        if !known.contains_key(&id) && remove_orphan(&id, &path, reporter) {
            removed.insert(id);
        }
    }

    removed
}

/// Delete one orphaned test file; `true` only when this call removed it.
///
/// A file that vanished since discovery is reported as already removed, not as an error.
fn remove_orphan(id: &SolutionId, path: &Path, reporter: &mut dyn GenerationReporter) -> bool {
    match fs::remove_file(path) {
        Ok(()) => {
            reporter.on_orphan_removed(id, path);
            true
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            reporter.on_orphan_already_removed(id, path);
            false
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot remove orphaned test");
            reporter.on_orphan_error(id, path, &e);
            false
        }
    }
}
