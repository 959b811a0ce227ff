//! The fix run: enumerate once, then rewrite and report each file in turn.
//!
//! There is no partial-failure handling. The first error stops the run;
//! files rewritten before it stay rewritten.

use crate::discover::{display_path, matching_files};
use crate::edit::{rewrite_file, RewriteResult, WriteMode};
use crate::error::PatchError;
use crate::rule::FixRule;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

/// One processed file, as handed to the reporter.
#[derive(Debug)]
pub struct FileOutcome {
    /// Path relative to the run root, for display
    pub display: PathBuf,
    pub result: RewriteResult,
}

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[must_use = "RunReport should be reported"]
pub struct RunReport {
    /// Files read (and rewritten, unless dry-running)
    pub files: usize,
    /// Files whose content actually changed
    pub changed: usize,
    /// Total occurrences replaced across all files
    pub replacements: usize,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files processed, {} changed, {} replacements",
            self.files, self.changed, self.replacements
        )
    }
}

/// Applies a [`FixRule`] to every matching file beneath a root directory.
#[derive(Debug, Clone)]
pub struct Patcher {
    root: PathBuf,
    rule: FixRule,
    mode: WriteMode,
}

impl Patcher {
    /// Patcher for the built-in `fetch` call fix, writing in place.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            rule: FixRule::FETCH_CALL,
            mode: WriteMode::InPlace,
        }
    }

    pub fn with_rule(mut self, rule: FixRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run the fix, calling `report` after each file is processed.
    ///
    /// Matches are enumerated once up front. Each file is read, patched and
    /// written before the next is opened, and its outcome is dropped once
    /// `report` returns. An error from `report` aborts the run like any
    /// I/O failure.
    pub fn run<F>(&self, mut report: F) -> Result<RunReport, PatchError>
    where
        F: FnMut(&FileOutcome) -> std::io::Result<()>,
    {
        let files = matching_files(&self.root, self.rule.pattern)?;
        info!(
            root = %self.root.display(),
            pattern = self.rule.pattern,
            matched = files.len(),
            "starting fix run"
        );

        let mut summary = RunReport::default();

        for path in files {
            let result = rewrite_file(&path, &self.rule, self.mode)?;

            summary.files += 1;
            summary.replacements += result.replacements;
            if result.changed() {
                summary.changed += 1;
            }

            let outcome = FileOutcome {
                display: display_path(&self.root, &path),
                result,
            };
            report(&outcome).map_err(|source| PatchError::Report {
                path: outcome.display.clone(),
                source,
            })?;
        }

        info!(%summary, "fix run complete");
        Ok(summary)
    }
}
