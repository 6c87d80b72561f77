//! Solution and test-file discovery
//!
//! Both passes walk a root recursively and turn each matching file into a [`SolutionId`]: the
//! path relative to the root, `/`-separated, extension stripped. The solutions pass excludes
//! module marker files; the tests pass only keeps files carrying the test prefix and strips it.
//! Identifiers from the two passes are directly comparable.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// File names that declare modules rather than hold a solution.
pub const MARKER_FILES: &[&str] = &["mod.rs", "lib.rs", "main.rs"];

/// Canonical name of a solution: `arrays/has_duplicate`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolutionId(String);

impl SolutionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// All `/`-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Directory segments (every segment but the last).
    pub fn dir_segments(&self) -> impl Iterator<Item = &str> {
        let stem_start = self.0.rfind('/').map(|i| i + 1).unwrap_or(0);
        self.0[..stem_start].split('/').filter(|s| !s.is_empty())
    }

    /// Last segment.
    pub fn file_stem(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for SolutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SolutionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Module path of a solution relative to its crate root (e.g. `["arrays", "has_duplicate"]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePath {
    pub segments: Vec<String>,
}

impl ModulePath {
    pub fn from_id(id: &SolutionId) -> Self {
        Self {
            segments: id.segments().map(str::to_string).collect(),
        }
    }

    /// `::`-joined path rooted at `crate_name`.
    pub fn qualified(&self, crate_name: &str) -> String {
        let mut path = crate_name.to_string();
        for segment in &self.segments {
            path.push_str("::");
            path.push_str(segment);
        }
        path
    }
}

/// A discovered solution source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionUnit {
    pub id: SolutionId,
    /// Path to the source file on disk
    pub source_path: PathBuf,
    /// Where generated tests import the solution from
    pub module_path: ModulePath,
}

impl SolutionUnit {
    pub fn new(id: SolutionId, source_path: PathBuf) -> Self {
        let module_path = ModulePath::from_id(&id);
        Self {
            id,
            source_path,
            module_path,
        }
    }
}

/// Discover solution units under `root`.
///
/// Keeps files ending in `.{extension}` except [`MARKER_FILES`]. A missing root yields an empty map.
#[tracing::instrument(skip_all, fields(root = %root.display()))]
pub fn discover_solutions(root: &Path, extension: &str) -> BTreeMap<SolutionId, SolutionUnit> {
    let suffix = format!(".{extension}");
    let mut units = BTreeMap::new();
    for path in walk_files(root) {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(&suffix) || MARKER_FILES.contains(&name) {
            continue;
        }
        if let Some(id) = relative_id(root, &path, &suffix, "") {
            units.insert(id.clone(), SolutionUnit::new(id, path));
        }
    }
    tracing::debug!(count = units.len(), "discovered solutions");
    units
}

/// Discover generated test files under `root`, keyed by the solution they belong to.
///
/// Keeps files named `{prefix}*.{extension}`; the prefix is stripped from the file name only.
#[tracing::instrument(skip_all, fields(root = %root.display()))]
pub fn discover_tests(root: &Path, prefix: &str, extension: &str) -> BTreeMap<SolutionId, PathBuf> {
    let suffix = format!(".{extension}");
    let mut tests = BTreeMap::new();
    for path in walk_files(root) {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.starts_with(prefix) || !name.ends_with(&suffix) || name.len() == prefix.len() + suffix.len() {
            continue;
        }
        if let Some(id) = relative_id(root, &path, &suffix, prefix) {
            tests.insert(id, path);
        }
    }
    tracing::debug!(count = tests.len(), "discovered generated tests");
    tests
}

/// Recursively list files under `root`, sorted per directory.
///
/// Symlinked directories are listed but never entered, so link cycles cannot loop the walk.
fn walk_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.path().is_file())
        .map(DirEntry::into_path)
        .collect()
}

/// Hidden directories and build output are not part of the tree.
fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.') || name == "target")
}

/// Build the identifier for `path`: strip `root`, the `prefix` from the file name and `suffix`.
fn relative_id(root: &Path, path: &Path, suffix: &str, prefix: &str) -> Option<SolutionId> {
    let relative = path.strip_prefix(root).ok()?;
    let mut segments = Vec::new();
    for component in relative.components() {
        match component.as_os_str().to_str() {
            Some(s) => segments.push(s.to_string()),
            None => {
                tracing::warn!(path = %path.display(), "skipping non UTF-8 path");
                return None;
            }
        }
    }
    let last = segments.pop()?;
    let stem = last.strip_prefix(prefix)?.strip_suffix(suffix)?;
    segments.push(stem.to_string());
    Some(SolutionId::new(segments.join("/")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn ids<V>(map: &BTreeMap<SolutionId, V>) -> Vec<&str> {
        map.keys().map(SolutionId::as_str).collect()
    }

    #[test]
    fn test_solution_id_segments() {
        let id = SolutionId::new("graphs/trees/invert_tree");
        assert_eq!(id.segments().collect::<Vec<_>>(), ["graphs", "trees", "invert_tree"]);
        assert_eq!(id.dir_segments().collect::<Vec<_>>(), ["graphs", "trees"]);
        assert_eq!(id.file_stem(), "invert_tree");

        let flat = SolutionId::new("two_sum");
        assert_eq!(flat.dir_segments().count(), 0);
        assert_eq!(flat.file_stem(), "two_sum");
    }

    #[test]
    fn test_module_path_qualified() {
        let unit = SolutionUnit::new(SolutionId::new("arrays/has_duplicate"), PathBuf::from("x.rs"));
        assert_eq!(unit.module_path.qualified("solutions"), "solutions::arrays::has_duplicate");
    }

    #[test]
    fn test_discover_solutions_skips_markers_and_other_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "lib.rs");
        touch(dir.path(), "arrays/mod.rs");
        touch(dir.path(), "arrays/has_duplicate.rs");
        touch(dir.path(), "arrays/notes.md");
        touch(dir.path(), "two_sum.rs");
        touch(dir.path(), "bin/main.rs");

        let units = discover_solutions(dir.path(), "rs");
        assert_eq!(ids(&units), ["arrays/has_duplicate", "two_sum"]);

        let unit = &units[&SolutionId::new("arrays/has_duplicate")];
        assert_eq!(unit.source_path, dir.path().join("arrays/has_duplicate.rs"));
        assert_eq!(unit.module_path.segments, ["arrays", "has_duplicate"]);
    }

    #[test]
    fn test_discover_solutions_skips_hidden_and_target_dirs() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), ".cache/stale.rs");
        touch(dir.path(), "target/debug/build.rs");
        touch(dir.path(), "kept.rs");

        assert_eq!(ids(&discover_solutions(dir.path(), "rs")), ["kept"]);
    }

    #[test]
    fn test_discover_missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(discover_solutions(&missing, "rs").is_empty());
        assert!(discover_tests(&missing, "test_", "rs").is_empty());
    }

    #[test]
    fn test_discover_tests_strips_prefix_from_file_name_only() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "arrays/test_has_duplicate.rs");
        touch(dir.path(), "test_utils/test_test_helpers.rs");
        touch(dir.path(), "arrays/helpers.rs");
        touch(dir.path(), "test_.rs");

        let tests = discover_tests(dir.path(), "test_", "rs");
        assert_eq!(ids(&tests), ["arrays/has_duplicate", "test_utils/test_helpers"]);
        assert_eq!(
            tests[&SolutionId::new("arrays/has_duplicate")],
            dir.path().join("arrays/test_has_duplicate.rs")
        );
    }

    #[test]
    fn test_identifiers_match_across_passes() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let tests = dir.path().join("tests");
        touch(&src, "arrays/has_duplicate.rs");
        touch(&tests, "arrays/test_has_duplicate.rs");

        let solutions = discover_solutions(&src, "rs");
        let generated = discover_tests(&tests, "test_", "rs");
        assert!(generated.keys().all(|id| solutions.contains_key(id)));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_cycle_is_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "arrays/has_duplicate.rs");
        std::os::unix::fs::symlink(dir.path(), dir.path().join("arrays/loop")).unwrap();

        let units = discover_solutions(dir.path(), "rs");
        assert_eq!(ids(&units), ["arrays/has_duplicate"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_solution_file_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "shared/two_sum.rs");
        fs::create_dir_all(dir.path().join("arrays")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("shared/two_sum.rs"), dir.path().join("arrays/two_sum.rs")).unwrap();

        let units = discover_solutions(dir.path(), "rs");
        assert_eq!(ids(&units), ["arrays/two_sum", "shared/two_sum"]);
    }
}
