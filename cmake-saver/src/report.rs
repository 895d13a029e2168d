//! Run report types.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::Mode;
use crate::inspect::Outcome;

/// Result of a run over a directory tree.
#[derive(Debug, Clone, Default, Serialize)]
#[non_exhaustive]
pub struct RunReport {
    /// Mode the run was executed in.
    pub mode: Mode,
    /// Number of target files inspected.
    pub inspected_files: usize,
    /// Sum of per-file [`Outcome::signal`] values; the run result.
    pub nonconforming_total: usize,
    /// Files with trailing whitespace that were left untouched (report mode).
    pub nonconforming: Vec<PathBuf>,
    /// Files rewritten without trailing whitespace (fix mode).
    pub fixed: Vec<PathBuf>,
}

impl RunReport {
    /// Empty report for a run in `mode`.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Record the outcome of one inspected file.
    pub fn record(&mut self, path: PathBuf, outcome: Outcome) {
        self.inspected_files += 1;
        self.nonconforming_total += outcome.signal();
        match outcome {
            Outcome::Clean => {}
            Outcome::Fixed => self.fixed.push(path),
            Outcome::Nonconforming => self.nonconforming.push(path),
        }
    }

    /// Number of non-conforming files: the value a run signals to its caller.
    /// Always 0 in fix mode.
    #[must_use]
    pub fn nonconforming_count(&self) -> usize {
        self.nonconforming_total
    }
}
