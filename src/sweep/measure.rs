use std::fs;
use std::ops::AddAssign;
use std::path::Path;

use walkdir::WalkDir;

/// Size and entry count of a file or directory tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Measurement {
    /// Total bytes of every non-directory entry
    pub bytes: u64,
    /// Number of non-directory entries (1 for a plain file)
    pub entries: u64,
    /// Entries that could not be read and contributed nothing
    pub skipped: u64,
}

impl AddAssign for Measurement {
    fn add_assign(&mut self, other: Self) {
        self.bytes += other.bytes;
        self.entries += other.entries;
        self.skipped += other.skipped;
    }
}

/// Measure `path` without modifying anything.
///
/// A missing path measures as zero. Symlinks are never followed: a link
/// counts as one entry of its own size. Inside a directory, unreadable
/// entries and subdirectories are skipped rather than aborting the walk.
pub fn measure(path: &Path) -> Measurement {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Measurement::default(),
        Err(_) => {
            return Measurement {
                skipped: 1,
                ..Measurement::default()
            };
        }
    };

    if !metadata.is_dir() {
        return Measurement {
            bytes: metadata.len(),
            entries: 1,
            skipped: 0,
        };
    }

    let mut total = Measurement::default();
    for entry in WalkDir::new(path).follow_links(false).min_depth(1) {
        let Ok(entry) = entry else {
            total.skipped += 1;
            continue;
        };
        if entry.file_type().is_dir() {
            continue;
        }
        match entry.metadata() {
            Ok(metadata) => {
                total.bytes += metadata.len();
                total.entries += 1;
            }
            Err(_) => total.skipped += 1,
        }
    }

    total
}
