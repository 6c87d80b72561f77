//! Generator configuration
//!
//! Describes where solutions live, where generated tests go, and how names map between the two.
//! The default layout matches this workspace: solutions in `solutions/src`, generated tests in
//! `solutions/tests`, imported through the `solutions` crate.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::path::{Path, PathBuf};

use crate::discovery::SolutionId;

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Root directory holding solution source files
    pub solutions_root: PathBuf,
    /// Root directory receiving generated test files
    pub tests_root: PathBuf,
    /// Crate name generated tests import solutions from
    pub crate_name: String,
    /// File-name prefix marking a generated test file
    pub test_prefix: String,
    /// Source file extension (without the dot)
    pub extension: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::for_project(".")
    }
}

impl GeneratorConfig {
    /// Create a config with the default layout resolved against the current directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with the default layout resolved against `root`
    pub fn for_project(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            solutions_root: root.join("solutions").join("src"),
            tests_root: root.join("solutions").join("tests"),
            crate_name: "solutions".to_string(),
            test_prefix: "test_".to_string(),
            extension: "rs".to_string(),
        }
    }

    /// Set the solutions root
    pub fn with_solutions_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.solutions_root = root.into();
        self
    }

    /// Set the tests root
    pub fn with_tests_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.tests_root = root.into();
        self
    }

    /// Set the crate name used in generated `use` lines
    pub fn with_crate_name(mut self, name: impl Into<String>) -> Self {
        self.crate_name = name.into();
        self
    }

    /// Location of the generated test file for `id`.
    ///
    /// Mirrors the solution's directory under the tests root and prepends the test prefix to the
    /// file name: `arrays/has_duplicate` → `<tests_root>/arrays/test_has_duplicate.rs`.
    pub fn test_file_path(&self, id: &SolutionId) -> PathBuf {
        let mut path = self.tests_root.clone();
        path.extend(id.dir_segments());
        path.push(format!("{}{}.{}", self.test_prefix, id.file_stem(), self.extension));
        path
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = GeneratorConfig::default();
        assert_eq!(config.solutions_root, Path::new("./solutions/src"));
        assert_eq!(config.tests_root, Path::new("./solutions/tests"));
        assert_eq!(config.crate_name, "solutions");
        assert_eq!(config.test_prefix, "test_");
        assert_eq!(config.extension, "rs");
    }

    #[test]
    fn test_builder_overrides() {
        let config = GeneratorConfig::new()
            .with_solutions_root("src")
            .with_tests_root("tests")
            .with_crate_name("neetcode");
        assert_eq!(config.solutions_root, Path::new("src"));
        assert_eq!(config.tests_root, Path::new("tests"));
        assert_eq!(config.crate_name, "neetcode");
    }

    #[test]
    fn test_test_file_path_mirrors_directories() {
        let config = GeneratorConfig::new().with_tests_root("tests");
        let id = SolutionId::new("arrays/has_duplicate");
        assert_eq!(config.test_file_path(&id), Path::new("tests/arrays/test_has_duplicate.rs"));

        let top = SolutionId::new("two_sum");
        assert_eq!(config.test_file_path(&top), Path::new("tests/test_two_sum.rs"));
    }
}
