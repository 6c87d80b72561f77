//! Spec table: which solutions get tests, and with which cases
//!
//! The table is plain data. The default one is `specs/test_specs.json`, compiled into the binary;
//! `--specs <FILE>` loads another file with the same shape. It is read once at startup and only
//! ever queried by identifier afterwards.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Spec table compiled into the binary.
const BUILTIN_SPECS: &str = include_str!("../specs/test_specs.json");

/// Errors loading a spec table
#[derive(Debug, Error)]
pub enum SpecTableError {
    #[error("cannot read spec table '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid spec table: {0}")]
    Json(#[from] serde_json::Error),
}

/// One input/expected-output pair.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestCase {
    /// Named arguments, keyed by parameter name
    pub input: BTreeMap<String, Value>,
    /// Expected return value
    pub output: Value,
}

/// How to test one solution.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestSpecification {
    /// Entry point the generated tests call
    pub function_name: String,
    /// Cases, in the order the generated test functions are numbered
    pub test_cases: Vec<TestCase>,
}

/// Mapping from solution identifier to its [`TestSpecification`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SpecTable {
    entries: BTreeMap<String, TestSpecification>,
}

impl SpecTable {
    /// The table shipped with the binary.
    pub fn builtin() -> Result<Self, SpecTableError> {
        Self::from_json(BUILTIN_SPECS)
    }

    pub fn from_json(json: &str) -> Result<Self, SpecTableError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SpecTableError> {
        let json = fs::read_to_string(path).map_err(|source| SpecTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn get(&self, id: &str) -> Option<&TestSpecification> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
