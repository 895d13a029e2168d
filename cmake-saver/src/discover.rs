//! Target file discovery.
//!
//! Walks a root directory and yields CMake list files. Two traversal
//! policies exist and stay separate:
//! - non-recursive: the root's own files only, no descent at all
//! - recursive: every subdirectory except [`EXCLUDE_DIRS`], which are
//!   pruned before descent so their contents are never visited

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, FilterEntry, WalkDir};

use crate::normalize::normalize_path;

/// Exact file name of a CMake list file.
pub const TARGET_FILE_NAME: &str = "CMakeLists.txt";

/// File name suffix of a CMake module/script.
pub const TARGET_SUFFIX: &str = ".cmake";

/// Directories never descended into during a recursive walk.
pub const EXCLUDE_DIRS: &[&str] = &[".git", ".svn", ".pytest_cache", "__pycache__"];

type PruneFn = fn(&DirEntry) -> bool;

/// Check whether a file name identifies a target file.
///
/// Suffix matching is a plain string test, so a file named `.cmake` matches.
#[must_use]
pub fn is_target_file_name(name: &str) -> bool {
    name == TARGET_FILE_NAME || name.ends_with(TARGET_SUFFIX)
}

/// Non-recursive policy: keep the root and plain files, drop every subdirectory.
fn top_level_only(entry: &DirEntry) -> bool {
    entry.depth() == 0 || !entry.file_type().is_dir()
}

/// Recursive policy: drop excluded directory names. The root is never pruned.
fn is_not_excluded_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    let keep = entry
        .file_name()
        .to_str()
        .is_none_or(|name| !EXCLUDE_DIRS.contains(&name));
    if !keep {
        tracing::debug!(dir = %entry.path().display(), "pruning excluded directory");
    }
    keep
}

/// Lazy sequence of target file paths under a root directory.
///
/// Directories that cannot be read (including the root) are logged and
/// skipped. The sequence is empty when the root does not exist, is not a
/// directory, or cannot be listed.
pub struct TargetFiles {
    inner: Option<FilterEntry<walkdir::IntoIter, PruneFn>>,
}

impl Iterator for TargetFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        let walker = self.inner.as_mut()?;
        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(walk_err) => {
                    // Unreadable directories are skipped and the walk carries on
                    let path = walk_err
                        .path()
                        .map_or_else(PathBuf::new, Path::to_path_buf);
                    tracing::warn!(
                        path = %path.display(),
                        error = %walk_err,
                        "skipping entry that could not be walked"
                    );
                    continue;
                }
            };

            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if !is_target_file_name(name) {
                continue;
            }

            // Symlinks to regular files count; directories, pipes and dangling links don't
            if !entry.path().is_file() {
                continue;
            }

            let path = normalize_path(entry.path());
            tracing::debug!(file = %path.display(), "discovered target file");
            return Some(path);
        }
        None
    }
}

/// Enumerate target files under `root`.
///
/// With `recursive` off only the root's immediate files are considered.
/// With it on, all subdirectories are walked except those named in
/// [`EXCLUDE_DIRS`]. Entries are visited in file-name order within each
/// directory; callers should not rely on any particular order.
#[must_use]
pub fn iter_target_files(root: &Path, recursive: bool) -> TargetFiles {
    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "root is not a directory, nothing to scan");
        return TargetFiles { inner: None };
    }

    let prune: PruneFn = if recursive {
        is_not_excluded_dir
    } else {
        top_level_only
    };

    let walker = WalkDir::new(normalize_path(root))
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(prune);

    TargetFiles {
        inner: Some(walker),
    }
}
