//! The deny-list that decides whether a path may ever be deleted.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// System directories whose whole subtree is off limits.
const SYSTEM_SUBTREES: &[&str] = &[
    "/bin", "/sbin", "/usr", "/etc", "/lib", "/lib32", "/lib64", "/boot", "/proc", "/sys",
    "/dev",
];

/// How much of the filesystem a deny-list entry covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Protection {
    /// The path and every directory above it. Its descendants may still be
    /// cleaned.
    Lineage,
    /// The path and every path that has it as a string prefix.
    Subtree,
}

/// A single deny-list entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtectedPath {
    path: PathBuf,
    protection: Protection,
}

impl ProtectedPath {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn protection(&self) -> Protection {
        self.protection
    }

    fn covers(&self, candidate: &Path) -> bool {
        // Removing an ancestor removes the entry with it.
        if self.path.starts_with(candidate) {
            return true;
        }
        match self.protection {
            Protection::Lineage => false,
            // Raw prefix match: `/lib` also covers `/lib64` and `/libexec`.
            Protection::Subtree => candidate
                .as_os_str()
                .as_encoded_bytes()
                .starts_with(self.path.as_os_str().as_encoded_bytes()),
        }
    }
}

/// Approves or rejects deletion candidates.
///
/// A path is approved only when neither its lexically normalized form nor,
/// if it exists, its canonical form is covered by a deny-list entry. Top-level
/// directories such as `/var` or `/home` are never approved. Any failure to
/// resolve the path rejects it.
#[derive(Clone, Debug)]
pub struct SafetyGuard {
    protected: Vec<ProtectedPath>,
}

impl SafetyGuard {
    /// The default deny-list: `/` and `home` with their ancestors, plus the
    /// system directory subtrees.
    pub fn for_home(home: impl AsRef<Path>) -> Self {
        let guard = Self::empty()
            .protect_lineage("/")
            .protect_lineage(home.as_ref());
        SYSTEM_SUBTREES
            .iter()
            .fold(guard, |guard, dir| guard.protect_subtree(dir))
    }

    /// A guard with no entries. Still rejects top-level directories.
    pub fn empty() -> Self {
        Self {
            protected: Vec::new(),
        }
    }

    pub fn protect_lineage(self, path: impl AsRef<Path>) -> Self {
        self.protect(path.as_ref(), Protection::Lineage)
    }

    pub fn protect_subtree(self, path: impl AsRef<Path>) -> Self {
        self.protect(path.as_ref(), Protection::Subtree)
    }

    fn protect(mut self, path: &Path, protection: Protection) -> Self {
        let path = normalize_path(path).unwrap_or_else(|| path.to_path_buf());
        self.protected.push(ProtectedPath { path, protection });
        self
    }

    pub fn protected(&self) -> &[ProtectedPath] {
        &self.protected
    }

    /// Returns true when `path` may be deleted.
    pub fn approve(&self, path: &Path) -> bool {
        let Some(lexical) = normalize_path(path) else {
            return false;
        };
        if self.denies(&lexical) {
            return false;
        }

        match fs::canonicalize(&lexical) {
            Ok(canonical) => !self.denies(&canonical),
            Err(err) if err.kind() == io::ErrorKind::NotFound => true,
            Err(_) => false,
        }
    }

    fn denies(&self, path: &Path) -> bool {
        is_top_level(path) || self.protected.iter().any(|entry| entry.covers(path))
    }
}

/// `/` itself or a direct child of it.
fn is_top_level(path: &Path) -> bool {
    path.components()
        .filter(|component| matches!(component, Component::Normal(_)))
        .count()
        <= 1
}

/// Normalize a path to be absolute and clean, without requiring it to exist.
///
/// This function:
/// - Converts relative paths to absolute using the current directory
/// - Removes `.` and `..` components (`..` never climbs above the root)
/// - Does NOT resolve symlinks
///
/// Returns `None` when a relative path is given and the current directory
/// cannot be determined.
pub(crate) fn normalize_path(path: impl AsRef<Path>) -> Option<PathBuf> {
    let path = path.as_ref();

    let absolute = if path.is_relative() {
        std::env::current_dir().ok()?.join(path)
    } else {
        path.to_path_buf()
    };

    let mut components = Vec::new();
    for component in absolute.components() {
        match component {
            Component::ParentDir => {
                if let Some(Component::Normal(_)) = components.last() {
                    components.pop();
                }
            }
            Component::CurDir => continue,
            _ => components.push(component),
        }
    }

    Some(components.iter().collect())
}
