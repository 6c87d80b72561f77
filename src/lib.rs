#![forbid(unsafe_code)]
//! testgen: generate Rust test files for solved problems
//!
//! testgen walks a tree of solution modules, looks each one up in a declarative spec table,
//! checks that the named entry point really exists in the source, and writes one integration
//! test file per solution with an `assert_eq!` per spec case. Test files whose solution has
//! disappeared are swept away on the next run.
//!
//! ## Pipeline
//!
//! 1. [`discovery`] - enumerate solution units and existing generated tests
//! 2. [`sweep`] - delete orphaned test files
//! 3. [`validate`] - parse the solution with `syn` and locate the entry point
//! 4. [`codegen`] - render the test file (`quote!` → `syn` → `prettyplease`)
//! 5. [`writer`] - idempotent / forced write policy
//!
//! [`pipeline::Generator`] composes the stages; [`cli`] is the command-line surface.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. Library modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **Per-item failures** never abort a run; they are reported through [`report::GenerationReporter`].

pub mod cli;
pub mod codegen;
pub mod config;
pub mod discovery;
pub mod pipeline;
pub mod report;
pub mod specs;
pub mod sweep;
pub mod validate;
pub mod version;
pub mod writer;

pub use config::GeneratorConfig;
pub use discovery::{ModulePath, SolutionId, SolutionUnit};
pub use pipeline::{Generator, RunOptions, RunSummary};
pub use specs::{SpecTable, TestCase, TestSpecification};
pub use writer::WriteOutcome;
