//! Run configuration.
//!
//! A `RunConfig` is built once per invocation (usually from CLI arguments)
//! and never changes while files are being processed.

use std::path::PathBuf;

use serde::Serialize;

/// What to do with a file that has trailing whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Leave the file untouched and report its path (default).
    #[default]
    Report,
    /// Rewrite the file in place with trailing whitespace removed.
    Fix,
}

impl Mode {
    /// Map a `--fix` style flag onto a mode.
    #[must_use]
    pub fn from_fix_flag(fix: bool) -> Self {
        if fix { Self::Fix } else { Self::Report }
    }
}

/// Options for a single run over a directory tree.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct RunConfig {
    /// Root directory to search (default: current directory).
    pub directory: PathBuf,
    /// Descend into subdirectories, pruning excluded directory names.
    /// When off, only the root's own files are considered.
    pub recursive: bool,
    /// Report or fix.
    pub mode: Mode,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            recursive: false,
            mode: Mode::Report,
        }
    }
}

impl RunConfig {
    /// Create a configuration rooted at `directory` with default flags.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// Set the recursion flag.
    #[must_use]
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set the mode.
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.directory, PathBuf::from("."));
        assert!(!config.recursive);
        assert_eq!(config.mode, Mode::Report);
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = RunConfig::new("proj").recursive(true).mode(Mode::Fix);
        assert_eq!(config.directory, PathBuf::from("proj"));
        assert!(config.recursive);
        assert_eq!(config.mode, Mode::Fix);
    }

    #[test]
    fn test_mode_from_fix_flag() {
        assert_eq!(Mode::from_fix_flag(true), Mode::Fix);
        assert_eq!(Mode::from_fix_flag(false), Mode::Report);
    }
}
