//! Error types for target file inspection.
//!
//! Every variant is fatal for a run: the driver stops at the first one and
//! files processed before it keep whatever changes were already written.
//! Directory traversal problems are not errors; the discoverer logs and
//! skips them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or rewriting a target file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A target file could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A target file could not be rewritten.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The file that could not be written.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the report stream failed.
    #[error("failed to write report output: {0}")]
    Output(#[from] io::Error),
}

/// Crate result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
