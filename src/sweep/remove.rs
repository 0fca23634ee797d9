use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use super::classify::Candidate;
use crate::logging::Logger;

/// What happened when a candidate was handed to [`remove`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Dry-run: nothing was touched
    Simulated,
    /// The entry is gone. For a directory, `failures` counts entries deep
    /// in the tree that could not be removed.
    Removed { failures: usize },
    /// The entry disappeared before we got to it
    Vanished,
    /// The entry could not be removed at all
    Failed(io::ErrorKind),
}

impl RemoveOutcome {
    /// Whether the candidate counts as cleaned in the report.
    ///
    /// Partial directory removals count as success.
    pub fn is_success(self) -> bool {
        !matches!(self, RemoveOutcome::Failed(_))
    }
}

/// Delete (or, in dry-run, pretend to delete) a single candidate.
///
/// Never returns an error: every failure is folded into the outcome.
pub fn remove(candidate: &Candidate, dry_run: bool, log: &Logger) -> RemoveOutcome {
    let path = candidate.path.as_path();

    if dry_run {
        log.verbose(1, format!("[DRY-RUN] Would remove: {}", path.display()));
        return RemoveOutcome::Simulated;
    }

    let outcome = if candidate.is_dir {
        remove_tree(path)
    } else {
        remove_single(path)
    };

    let kind = if candidate.is_dir { "directory" } else { "file" };
    match outcome {
        RemoveOutcome::Removed { failures: 0 } => {
            log.verbose(1, format!("Removed {kind}: {}", path.display()));
        }
        RemoveOutcome::Removed { failures } => log.verbose(
            1,
            format!(
                "Removed {kind}: {} ({failures} entries could not be removed)",
                path.display()
            ),
        ),
        RemoveOutcome::Vanished => {
            log.verbose(2, format!("Already gone: {}", path.display()));
        }
        RemoveOutcome::Failed(err) => {
            log.verbose(1, format!("Failed to remove {}: {err}", path.display()));
        }
        RemoveOutcome::Simulated => {}
    }

    outcome
}

fn remove_single(path: &Path) -> RemoveOutcome {
    match fs::remove_file(path) {
        Ok(()) => RemoveOutcome::Removed { failures: 0 },
        Err(err) if err.kind() == io::ErrorKind::NotFound => RemoveOutcome::Vanished,
        Err(err) => RemoveOutcome::Failed(err.kind()),
    }
}

fn remove_tree(path: &Path) -> RemoveOutcome {
    match fs::remove_dir_all(path) {
        Ok(()) => RemoveOutcome::Removed { failures: 0 },
        Err(err) if err.kind() == io::ErrorKind::NotFound => RemoveOutcome::Vanished,
        Err(_) => RemoveOutcome::Removed {
            failures: remove_remaining(path),
        },
    }
}

/// Second pass after `remove_dir_all` gave up: delete whatever still can be
/// deleted, deepest entries first, and count what cannot.
fn remove_remaining(path: &Path) -> usize {
    let mut failures = 0;
    for entry in WalkDir::new(path).follow_links(false).contents_first(true) {
        let Ok(entry) = entry else {
            failures += 1;
            continue;
        };
        let result = if entry.file_type().is_dir() {
            fs::remove_dir(entry.path())
        } else {
            fs::remove_file(entry.path())
        };
        if let Err(err) = result
            && err.kind() != io::ErrorKind::NotFound
        {
            failures += 1;
        }
    }
    failures
}
