//! Rules that decide which entries of a junk root are candidates.
//!
//! Each rule looks only at the immediate children of its root. Children are
//! returned sorted by path so listings are stable between runs.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::guard::SafetyGuard;
use super::measure::{Measurement, measure};
use crate::logging::Logger;

/// The login record that aggressive log cleaning must leave alone.
pub const PROTECTED_LOG: &str = "lastlog";

static ROTATED_LOG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(?:[0-9]+|old|gz|xz|bz2|zst|zip)$").expect("rotated log pattern is valid")
});

/// Which bucket of a [`CleanReport`](super::CleanReport) a candidate
/// belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Regular file without an extension directly under a standard root
    Extensionless,
    /// Any other child of a standard root, or a single explicit target
    Generic,
    /// Rotated, compressed or (aggressively) active log file
    Log,
    /// Package-leftover directory
    Leftover,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Extensionless => "no-extension",
            Category::Generic => "standard",
            Category::Log => "logs",
            Category::Leftover => "package leftovers",
        }
    }
}

/// A file or directory selected for deletion, already measured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub is_dir: bool,
    pub category: Category,
    pub measurement: Measurement,
}

impl Candidate {
    pub(crate) fn measured(path: PathBuf, is_dir: bool, category: Category) -> Self {
        let measurement = measure(&path);
        Self {
            path,
            is_dir,
            category,
            measurement,
        }
    }
}

/// Standard rule for cache, temp, trash and thumbnail roots.
///
/// Extensionless regular files land in [`Category::Extensionless`]; every
/// other child lands in [`Category::Generic`]. No child is in both.
pub fn classify_standard(root: &Path, guard: &SafetyGuard, log: &Logger) -> Vec<Candidate> {
    children(root, log)
        .into_iter()
        .filter(|child| approved(guard, &child.path, log))
        .map(|child| {
            let category = if child.is_file && has_no_extension(&child.path) {
                Category::Extensionless
            } else {
                Category::Generic
            };
            Candidate::measured(child.path, child.is_dir, category)
        })
        .collect()
}

/// Log rule: rotated or archived log files, or in aggressive mode every
/// regular file except [`PROTECTED_LOG`].
pub fn classify_logs(
    root: &Path,
    guard: &SafetyGuard,
    aggressive: bool,
    log: &Logger,
) -> Vec<Candidate> {
    children(root, log)
        .into_iter()
        .filter(|child| child.is_file && log_qualifies(&child.name, aggressive))
        .filter(|child| approved(guard, &child.path, log))
        .map(|child| Candidate::measured(child.path, false, Category::Log))
        .collect()
}

/// Package-leftover rule: empty subdirectories, or every subdirectory in
/// aggressive mode.
pub fn classify_leftovers(
    root: &Path,
    guard: &SafetyGuard,
    aggressive: bool,
    log: &Logger,
) -> Vec<Candidate> {
    children(root, log)
        .into_iter()
        .filter(|child| child.is_dir && (aggressive || is_empty_dir(&child.path)))
        .filter(|child| approved(guard, &child.path, log))
        .map(|child| Candidate::measured(child.path, true, Category::Leftover))
        .collect()
}

/// True for names such as `syslog.1`, `kern.log.2.gz` or `dpkg.log.old`.
pub fn is_rotated_log(name: &str) -> bool {
    ROTATED_LOG.is_match(name)
}

fn log_qualifies(name: &str, aggressive: bool) -> bool {
    is_rotated_log(name) || (aggressive && name != PROTECTED_LOG)
}

fn has_no_extension(path: &Path) -> bool {
    path.extension().is_none_or(|ext| ext.is_empty())
}

/// An unreadable directory is treated as non-empty.
fn is_empty_dir(path: &Path) -> bool {
    fs::read_dir(path)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}

fn approved(guard: &SafetyGuard, path: &Path, log: &Logger) -> bool {
    let approved = guard.approve(path);
    if !approved {
        log.verbose(1, format!("Skipping protected path: {}", path.display()));
    }
    approved
}

struct Child {
    path: PathBuf,
    name: String,
    is_file: bool,
    is_dir: bool,
}

/// Immediate children of `root` with their (non-followed) file types.
fn children(root: &Path, log: &Logger) -> Vec<Child> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(err) => {
            log.verbose(1, format!("Cannot read {}: {err}", root.display()));
            return Vec::new();
        }
    };

    let mut children: Vec<Child> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let file_type = entry.file_type().ok()?;
            Some(Child {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.path(),
                is_file: file_type.is_file(),
                is_dir: file_type.is_dir(),
            })
        })
        .collect();

    children.sort_by(|a, b| a.path.cmp(&b.path));
    children
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn quiet_log() -> Logger {
        Logger::new(0, true)
    }

    fn names(candidates: &[Candidate]) -> Vec<String> {
        candidates
            .iter()
            .map(|c| c.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_is_rotated_log() {
        for name in [
            "syslog.1",
            "syslog.1.gz",
            "kern.log.12",
            "dpkg.log.old",
            "auth.log.2.xz",
            "journal.tar.zst",
            "Xorg.0.log.old",
            "archive.zip",
            "messages.bz2",
        ] {
            assert!(is_rotated_log(name), "{name} should be rotated");
        }
        for name in ["syslog", "kern.log", "lastlog", "wtmp", "dmesg", "gzip", "old"] {
            assert!(!is_rotated_log(name), "{name} should be active");
        }
    }

    #[test]
    fn test_log_qualifies() {
        assert!(log_qualifies("syslog.1.gz", false));
        assert!(!log_qualifies("syslog", false));
        assert!(log_qualifies("syslog", true));
        assert!(!log_qualifies(PROTECTED_LOG, true));
        assert!(!log_qualifies(PROTECTED_LOG, false));
    }

    #[test]
    fn test_has_no_extension() {
        assert!(has_no_extension(Path::new("/tmp/b")));
        assert!(has_no_extension(Path::new("/tmp/.X0-lock")));
        assert!(has_no_extension(Path::new("/tmp/trailing.")));
        assert!(!has_no_extension(Path::new("/tmp/a.tmp")));
        assert!(!has_no_extension(Path::new("/tmp/archive.tar.gz")));
    }

    #[test]
    fn test_classify_standard_splits_extensionless_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.tmp"), vec![0u8; 2048]).unwrap();
        fs::write(root.join("b"), vec![0u8; 10]).unwrap();
        fs::create_dir(root.join("c")).unwrap();
        // A directory without a dot is not an extensionless *file*
        fs::create_dir(root.join("d")).unwrap();
        fs::write(root.join("d/inner"), vec![0u8; 5]).unwrap();

        let candidates = classify_standard(root, &SafetyGuard::empty(), &quiet_log());
        assert_eq!(names(&candidates), ["a.tmp", "b", "c", "d"]);

        let categories: Vec<_> = candidates.iter().map(|c| c.category).collect();
        assert_eq!(
            categories,
            [
                Category::Generic,
                Category::Extensionless,
                Category::Generic,
                Category::Generic
            ]
        );
        assert_eq!(candidates[1].measurement.bytes, 10);
        assert!(candidates[2].is_dir);
        assert_eq!(candidates[3].measurement.entries, 1);
    }

    #[test]
    fn test_classify_standard_respects_guard() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("keep.me"), "x").unwrap();
        fs::write(root.join("drop.me"), "x").unwrap();

        let guard = SafetyGuard::empty().protect_lineage(root.join("keep.me"));
        let candidates = classify_standard(root, &guard, &quiet_log());
        assert_eq!(names(&candidates), ["drop.me"]);
    }

    #[test]
    fn test_classify_standard_skips_unresolvable_entries() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let looped = root.join("loop");
        std::os::unix::fs::symlink(&looped, &looped).unwrap();
        fs::write(root.join("junk.tmp"), "x").unwrap();

        let candidates = classify_standard(root, &SafetyGuard::empty(), &quiet_log());

        assert_eq!(names(&candidates), ["junk.tmp"]);
        assert!(fs::symlink_metadata(&looped).is_ok());
    }

    #[test]
    fn test_classify_logs() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("syslog"), "active").unwrap();
        fs::write(root.join("syslog.1.gz"), "rotated").unwrap();
        fs::write(root.join(PROTECTED_LOG), "logins").unwrap();
        fs::create_dir(root.join("apt.1")).unwrap();

        let guard = SafetyGuard::empty();
        let gentle = classify_logs(root, &guard, false, &quiet_log());
        assert_eq!(names(&gentle), ["syslog.1.gz"]);

        let aggressive = classify_logs(root, &guard, true, &quiet_log());
        assert_eq!(names(&aggressive), ["syslog", "syslog.1.gz"]);
        assert!(aggressive.iter().all(|c| c.category == Category::Log));
    }

    #[test]
    fn test_classify_leftovers() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("app1")).unwrap();
        fs::create_dir(root.join("app2")).unwrap();
        fs::write(root.join("app2/file"), vec![0u8; 64]).unwrap();
        fs::write(root.join("stray-file"), "x").unwrap();

        let guard = SafetyGuard::empty();
        let gentle = classify_leftovers(root, &guard, false, &quiet_log());
        assert_eq!(names(&gentle), ["app1"]);

        let aggressive = classify_leftovers(root, &guard, true, &quiet_log());
        assert_eq!(names(&aggressive), ["app1", "app2"]);
        assert_eq!(aggressive[1].measurement.bytes, 64);
        assert_eq!(aggressive[1].measurement.entries, 1);
    }

    #[test]
    fn test_missing_root_has_no_candidates() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        let guard = SafetyGuard::empty();
        assert!(classify_standard(&missing, &guard, &quiet_log()).is_empty());
        assert!(classify_logs(&missing, &guard, true, &quiet_log()).is_empty());
        assert!(classify_leftovers(&missing, &guard, true, &quiet_log()).is_empty());
    }
}
