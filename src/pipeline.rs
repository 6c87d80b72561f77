//! Generation pipeline
//!
//! [`Generator::run`] is a straight line: discover solutions, sweep orphans, then for every
//! solution with a spec entry validate → render → write. Failures are per solution: they are
//! reported and the run moves on to the next one. A run as a whole cannot fail.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use crate::codegen;
use crate::config::GeneratorConfig;
use crate::discovery::{self, SolutionUnit};
use crate::report::GenerationReporter;
use crate::specs::{SpecTable, TestSpecification};
use crate::sweep;
use crate::validate;
use crate::writer::{self, WriteOutcome};

/// Per-run options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Overwrite existing generated tests
    pub force: bool,
}

/// Counts for a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub discovered: usize,
    pub removed: usize,
    pub written: usize,
    pub regenerated: usize,
    pub skipped: usize,
    pub unspecified: usize,
    pub failed: usize,
}

/// Generates test files for a solutions tree.
pub struct Generator {
    config: GeneratorConfig,
    specs: SpecTable,
}

impl Generator {
    pub fn new(config: GeneratorConfig, specs: SpecTable) -> Self {
        Self { config, specs }
    }

    /// Run the whole pipeline once.
    #[tracing::instrument(skip_all, fields(force = options.force))]
    pub fn run(&self, options: RunOptions, reporter: &mut dyn GenerationReporter) -> RunSummary {
        let mut summary = RunSummary::default();

        let solutions = discovery::discover_solutions(&self.config.solutions_root, &self.config.extension);
        summary.discovered = solutions.len();
        let ids: Vec<_> = solutions.keys().collect();
        reporter.on_solutions_discovered(&ids);

        summary.removed = sweep::sweep(&solutions, &self.config, reporter).len();

        for unit in solutions.values() {
            match self.specs.get(unit.id.as_str()) {
                Some(spec) => self.generate_one(unit, spec, options, reporter, &mut summary),
                None => {
                    summary.unspecified += 1;
                    reporter.on_no_spec(&unit.id, &unit.source_path);
                }
            }
        }

        tracing::debug!(?summary, "run complete");
        reporter.on_run_complete(&summary);
        summary
    }

    fn generate_one(
        &self,
        unit: &SolutionUnit,
        spec: &TestSpecification,
        options: RunOptions,
        reporter: &mut dyn GenerationReporter,
        summary: &mut RunSummary,
    ) {
        let entry = match validate::inspect(unit, &spec.function_name) {
            Ok(entry) => entry,
            Err(e) => {
                summary.failed += 1;
                reporter.on_validation_failed(&unit.id, &spec.function_name, &unit.source_path, &e);
                return;
            }
        };

        let rendered = match codegen::render_test_file(unit, &entry, &spec.test_cases, &self.config.crate_name) {
            Ok(rendered) => rendered,
            Err(e) => {
                summary.failed += 1;
                reporter.on_render_failed(&unit.id, &e);
                return;
            }
        };

        let target = self.config.test_file_path(&unit.id);
        match writer::write_if_needed(&target, &rendered, options.force) {
            Ok(outcome) => {
                match outcome {
                    WriteOutcome::Written => summary.written += 1,
                    WriteOutcome::Regenerated => summary.regenerated += 1,
                    WriteOutcome::Skipped => summary.skipped += 1,
                }
                reporter.on_write(&unit.id, &target, outcome);
            }
            Err(e) => {
                summary.failed += 1;
                reporter.on_write_failed(&unit.id, &target, &e);
            }
        }
    }
}
