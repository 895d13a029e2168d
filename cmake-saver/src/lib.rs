//! # cmake-saver
//!
//! Find CMake list files (`CMakeLists.txt` and `*.cmake`) and detect or
//! strip trailing whitespace on every line.
//!
//! The crate is split into a **discoverer** ([`iter_target_files`]) that
//! lazily walks a directory tree and an **inspector** ([`inspect_file`]) that
//! checks or fixes one file. [`run`] drives both for a [`RunConfig`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cmake_saver::{Mode, RunConfig, run};
//!
//! let config = RunConfig::new("my_project").recursive(true).mode(Mode::Report);
//!
//! let mut stdout = std::io::stdout();
//! let report = run(&config, &mut stdout).unwrap();
//! println!("Files inspected: {}", report.inspected_files);
//! println!("Non-conforming:  {}", report.nonconforming_count());
//! ```

mod config;
mod discover;
mod error;
mod inspect;
mod normalize;
pub mod output;
mod report;

pub use config::{Mode, RunConfig};
pub use discover::{
    EXCLUDE_DIRS, TARGET_FILE_NAME, TARGET_SUFFIX, TargetFiles, is_target_file_name,
    iter_target_files,
};
pub use error::{Error, Result};
pub use inspect::{Outcome, inspect_file, strip_trailing_whitespace};
pub use normalize::normalize_path;
pub use report::RunReport;

use std::io::Write;

/// Inspect every target file under `config.directory`.
///
/// In report mode each non-conforming path is written to `out` as soon as it
/// is found, one per line. In fix mode non-conforming files are rewritten and
/// nothing is written to `out`. The returned report's
/// [`RunReport::nonconforming_count`] is the run result.
///
/// A missing root directory, an empty one, or one without target files
/// produces an empty report. Unreadable directories are skipped with a
/// warning.
///
/// # Errors
///
/// Stops at the first read, write or output failure. Files fixed
/// before the failure stay fixed; later files are not touched.
pub fn run(config: &RunConfig, out: &mut dyn Write) -> Result<RunReport> {
    let mut report = RunReport::new(config.mode);

    for path in iter_target_files(&config.directory, config.recursive) {
        let outcome = inspect_file(&path, config.mode)?;
        if outcome == Outcome::Nonconforming {
            output::write_path(&path, out)?;
        }
        report.record(path, outcome);
    }

    tracing::info!(
        directory = %config.directory.display(),
        inspected = report.inspected_files,
        nonconforming = report.nonconforming_count(),
        fixed = report.fixed.len(),
        "scan complete"
    );
    Ok(report)
}
