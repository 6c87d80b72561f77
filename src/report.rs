//! Operator-facing reporting
//!
//! The pipeline never prints directly. Every event goes through a [`GenerationReporter`], so the
//! console output format can be swapped (or captured in tests) without touching the pipeline.
//! [`ConsoleReporter`] is the default and honours `--verbose`.

use std::path::Path;

use crate::codegen::RenderError;
use crate::discovery::SolutionId;
use crate::pipeline::RunSummary;
use crate::validate::ValidationError;
use crate::writer::WriteOutcome;

/// Receives pipeline events.
///
/// Implement this trait to customize how a run is reported.
pub trait GenerationReporter {
    /// Called once solutions have been discovered
    fn on_solutions_discovered(&mut self, _ids: &[&SolutionId]) {}

    /// Called after an orphaned test file was deleted
    fn on_orphan_removed(&mut self, id: &SolutionId, path: &Path);

    /// Called when an orphaned test file vanished before it could be deleted
    fn on_orphan_already_removed(&mut self, _id: &SolutionId, _path: &Path) {}

    /// Called when an orphaned test file could not be deleted
    fn on_orphan_error(&mut self, id: &SolutionId, path: &Path, error: &std::io::Error);

    /// Called for a solution with no spec table entry
    fn on_no_spec(&mut self, _id: &SolutionId, _source: &Path) {}

    /// Called when the entry point could not be validated
    fn on_validation_failed(&mut self, id: &SolutionId, entry_point: &str, source: &Path, error: &ValidationError);

    /// Called when a test file could not be rendered
    fn on_render_failed(&mut self, id: &SolutionId, error: &RenderError);

    /// Called after the write policy ran for a test file
    fn on_write(&mut self, id: &SolutionId, path: &Path, outcome: WriteOutcome);

    /// Called when a test file could not be written
    fn on_write_failed(&mut self, id: &SolutionId, path: &Path, error: &std::io::Error);

    /// Called when the run is complete
    fn on_run_complete(&mut self, _summary: &RunSummary) {}
}

/// Default console reporter
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    pub verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl GenerationReporter for ConsoleReporter {
    fn on_solutions_discovered(&mut self, ids: &[&SolutionId]) {
        if self.verbose {
            let names: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
            println!("Found source files: {:?}", names);
        }
    }

    fn on_orphan_removed(&mut self, _id: &SolutionId, path: &Path) {
        println!("Removed orphaned test file: {}", path.display());
    }

    fn on_orphan_already_removed(&mut self, _id: &SolutionId, path: &Path) {
        if self.verbose {
            println!("Test file {} already removed", path.display());
        }
    }

    fn on_orphan_error(&mut self, _id: &SolutionId, path: &Path, error: &std::io::Error) {
        eprintln!("Error: cannot remove {}: {}", path.display(), error);
    }

    fn on_no_spec(&mut self, _id: &SolutionId, source: &Path) {
        if self.verbose {
            println!("No test specs found for {}", source.display());
        }
    }

    fn on_validation_failed(&mut self, _id: &SolutionId, entry_point: &str, source: &Path, error: &ValidationError) {
        eprintln!("Error: {} not found in {}, skipping", entry_point, source.display());
        if self.verbose {
            eprintln!("  cause: {}", error);
        }
    }

    fn on_render_failed(&mut self, id: &SolutionId, error: &RenderError) {
        eprintln!("Error: cannot render tests for {}: {}", id, error);
    }

    fn on_write(&mut self, _id: &SolutionId, path: &Path, outcome: WriteOutcome) {
        match outcome {
            WriteOutcome::Written => println!("Generated {}", path.display()),
            WriteOutcome::Regenerated => println!("Regenerated {}", path.display()),
            WriteOutcome::Skipped => {
                if self.verbose {
                    println!("Skipping {} (already exists)", path.display());
                }
            }
        }
    }

    fn on_write_failed(&mut self, _id: &SolutionId, path: &Path, error: &std::io::Error) {
        eprintln!("Error: cannot write {}: {}", path.display(), error);
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        if !self.verbose {
            return;
        }
        let mut parts = Vec::new();
        if summary.written > 0 {
            parts.push(format!("{} generated", summary.written));
        }
        if summary.regenerated > 0 {
            parts.push(format!("{} regenerated", summary.regenerated));
        }
        if summary.skipped > 0 {
            parts.push(format!("{} skipped", summary.skipped));
        }
        if summary.removed > 0 {
            parts.push(format!("{} removed", summary.removed));
        }
        if summary.failed > 0 {
            parts.push(format!("{} failed", summary.failed));
        }
        if parts.is_empty() {
            parts.push("nothing to do".to_string());
        }
        println!(
            "====== {} solution(s): {} ======",
            summary.discovered,
            parts.join(", ")
        );
    }
}

/// A reported event, as captured by [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationEvent {
    Discovered(Vec<SolutionId>),
    OrphanRemoved(SolutionId),
    OrphanAlreadyRemoved(SolutionId),
    OrphanError(SolutionId),
    NoSpec(SolutionId),
    ValidationFailed(SolutionId, String),
    RenderFailed(SolutionId),
    Write(SolutionId, WriteOutcome),
    WriteFailed(SolutionId),
    Complete,
}

/// Reporter that records events instead of printing them.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<GenerationEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GenerationReporter for RecordingReporter {
    fn on_solutions_discovered(&mut self, ids: &[&SolutionId]) {
        let ids = ids.iter().map(|id| (*id).clone()).collect();
        self.events.push(GenerationEvent::Discovered(ids));
    }

    fn on_orphan_removed(&mut self, id: &SolutionId, _path: &Path) {
        self.events.push(GenerationEvent::OrphanRemoved(id.clone()));
    }

    fn on_orphan_already_removed(&mut self, id: &SolutionId, _path: &Path) {
        self.events.push(GenerationEvent::OrphanAlreadyRemoved(id.clone()));
    }

    fn on_orphan_error(&mut self, id: &SolutionId, _path: &Path, _error: &std::io::Error) {
        self.events.push(GenerationEvent::OrphanError(id.clone()));
    }

    fn on_no_spec(&mut self, id: &SolutionId, _source: &Path) {
        self.events.push(GenerationEvent::NoSpec(id.clone()));
    }

    fn on_validation_failed(&mut self, id: &SolutionId, entry_point: &str, _source: &Path, _error: &ValidationError) {
        self.events
            .push(GenerationEvent::ValidationFailed(id.clone(), entry_point.to_string()));
    }

    fn on_render_failed(&mut self, id: &SolutionId, _error: &RenderError) {
        self.events.push(GenerationEvent::RenderFailed(id.clone()));
    }

    fn on_write(&mut self, id: &SolutionId, _path: &Path, outcome: WriteOutcome) {
        self.events.push(GenerationEvent::Write(id.clone(), outcome));
    }

    fn on_write_failed(&mut self, id: &SolutionId, _path: &Path, _error: &std::io::Error) {
        self.events.push(GenerationEvent::WriteFailed(id.clone()));
    }

    fn on_run_complete(&mut self, _summary: &RunSummary) {
        self.events.push(GenerationEvent::Complete);
    }
}
