//! Lexical path normalization.
//!
//! Paths are cleaned without touching the filesystem, so symlinks are not
//! resolved and `a/link/..` folds to `a`.

use std::path::{Component, Path, PathBuf};

/// Normalize a path lexically.
///
/// - `.` components and redundant separators are dropped
/// - `name/..` pairs are folded
/// - leading `..` components are kept (and `..` directly under a root is dropped)
/// - an empty result becomes `.`
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
