//! Trailing whitespace inspection and in-place fixing.

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::Mode;
use crate::error::{Error, Result};

/// Spaces/tabs before a line terminator or end of text.
///
/// CRLF mode makes `$` match before `\r\n`, so the `\r` survives and line
/// endings are preserved as-is.
static TRAILING_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(?mR)[ \t]+$") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid trailing whitespace regex: {err}"),
    });

/// Result of inspecting one target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No trailing whitespace found.
    Clean,
    /// Trailing whitespace was found and the file was rewritten.
    Fixed,
    /// Trailing whitespace was found and the file was left as-is.
    Nonconforming,
}

impl Outcome {
    /// Per-file contribution to the run result: 1 for a non-conforming file, 0 otherwise.
    #[must_use]
    pub fn signal(self) -> usize {
        usize::from(self == Self::Nonconforming)
    }
}

/// Remove trailing spaces and tabs from every line of `text`.
///
/// Returns `Cow::Borrowed` when nothing changed.
#[must_use]
pub fn strip_trailing_whitespace(text: &str) -> Cow<'_, str> {
    TRAILING_WHITESPACE.replace_all(text, "")
}

/// Inspect a target file and, in [`Mode::Fix`], rewrite it without trailing whitespace.
///
/// The file is only written when its content changes. Printing the path of a
/// non-conforming file is left to the caller.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file cannot be read as UTF-8 text and
/// [`Error::Write`] if the fixed content cannot be written back.
pub fn inspect_file(path: &Path, mode: Mode) -> Result<Outcome> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let Cow::Owned(fixed) = strip_trailing_whitespace(&text) else {
        return Ok(Outcome::Clean);
    };

    match mode {
        Mode::Fix => {
            fs::write(path, fixed).map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(file = %path.display(), "removed trailing whitespace");
            Ok(Outcome::Fixed)
        }
        Mode::Report => Ok(Outcome::Nonconforming),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_strip_spaces_and_tabs() {
        let text = "project(foo)  \nadd_executable(foo foo.cpp)\t \n\nset(X 1)\n";
        assert_eq!(
            strip_trailing_whitespace(text),
            "project(foo)\nadd_executable(foo foo.cpp)\n\nset(X 1)\n"
        );
    }

    #[test]
    fn test_strip_last_line_without_newline() {
        assert_eq!(strip_trailing_whitespace("set(X 1)   "), "set(X 1)");
    }

    #[test]
    fn test_strip_whitespace_only_lines() {
        assert_eq!(strip_trailing_whitespace("a\n   \n\t\nb\n"), "a\n\n\nb\n");
    }

    #[test]
    fn test_strip_preserves_crlf() {
        assert_eq!(
            strip_trailing_whitespace("a  \r\nb\t\r\nc\r\n"),
            "a\r\nb\r\nc\r\n"
        );
    }

    #[test]
    fn test_leading_and_inner_whitespace_untouched() {
        let text = "if(X)\n  set(A  B)\nendif()\n";
        assert!(matches!(strip_trailing_whitespace(text), Cow::Borrowed(_)));
    }

    #[test]
    fn test_other_unicode_whitespace_untouched() {
        let text = "set(A B)\u{a0}\n";
        assert_eq!(strip_trailing_whitespace(text), text);
    }

    #[test]
    fn test_outcome_signal() {
        assert_eq!(Outcome::Clean.signal(), 0);
        assert_eq!(Outcome::Fixed.signal(), 0);
        assert_eq!(Outcome::Nonconforming.signal(), 1);
    }

    #[test]
    fn test_inspect_report_leaves_file_untouched() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("CMakeLists.txt");
        fs::write(&path, "add_executable(foo foo.cpp)   \n").unwrap();

        assert_eq!(inspect_file(&path, Mode::Report).unwrap(), Outcome::Nonconforming);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "add_executable(foo foo.cpp)   \n"
        );
    }

    #[test]
    fn test_inspect_fix_rewrites_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("CMakeLists.txt");
        fs::write(&path, "add_executable(foo foo.cpp)   \n").unwrap();

        assert_eq!(inspect_file(&path, Mode::Fix).unwrap(), Outcome::Fixed);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "add_executable(foo foo.cpp)\n"
        );
        assert_eq!(inspect_file(&path, Mode::Fix).unwrap(), Outcome::Clean);
    }

    #[test]
    fn test_inspect_clean_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tools.cmake");
        fs::write(&path, "function(f)\nendfunction()\n").unwrap();

        assert_eq!(inspect_file(&path, Mode::Report).unwrap(), Outcome::Clean);
        assert_eq!(inspect_file(&path, Mode::Fix).unwrap(), Outcome::Clean);
    }

    #[test]
    fn test_inspect_missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = inspect_file(&tmp.path().join("CMakeLists.txt"), Mode::Report).unwrap_err();
        assert!(matches!(err, Error::Read { .. }), "got: {err:?}");
    }

    #[test]
    fn test_inspect_non_utf8_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("CMakeLists.txt");
        fs::write(&path, [0xff, 0xfe, b' ', b'\n']).unwrap();
        let err = inspect_file(&path, Mode::Fix).unwrap_err();
        assert!(matches!(err, Error::Read { .. }), "got: {err:?}");
        assert_eq!(fs::read(&path).unwrap(), vec![0xff, 0xfe, b' ', b'\n']);
    }

    #[cfg(unix)]
    #[test]
    fn test_fix_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("run.cmake");
        fs::write(&path, "message(hi) \n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o750)).unwrap();

        inspect_file(&path, Mode::Fix).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o750);
    }
}
