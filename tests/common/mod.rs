#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_fs::TempDir;
use bilge_pump::sweep::{JunkRoots, SafetyGuard, Sweep, SweepOptions};
use walkdir::WalkDir;

/// A throwaway machine: a fake home plus stand-ins for the system roots.
///
/// Nothing outside the temporary directory is ever configured as a root.
pub struct Hull {
    temp_dir: TempDir,
    pub home: PathBuf,
    pub cache: PathBuf,
    pub var_cache: PathBuf,
    pub tmp: PathBuf,
    pub trash: PathBuf,
    pub thumbnails: PathBuf,
    pub logs: PathBuf,
    pub snap: PathBuf,
}

impl Hull {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().to_path_buf();
        let home = base.join("home/sailor");

        let hull = Self {
            cache: home.join(".cache"),
            var_cache: base.join("var/cache"),
            tmp: base.join("tmp"),
            trash: home.join(".local/share/Trash"),
            thumbnails: home.join(".cache/thumbnails"),
            logs: base.join("var/log"),
            snap: home.join("snap"),
            home,
            temp_dir,
        };
        for dir in hull.root_dirs() {
            fs::create_dir_all(dir).unwrap();
        }
        hull
    }

    pub fn root_dirs(&self) -> [&Path; 7] {
        [
            &self.cache,
            &self.var_cache,
            &self.tmp,
            &self.trash,
            &self.thumbnails,
            &self.logs,
            &self.snap,
        ]
    }

    /// The same layout as [`JunkRoots::for_home`], relocated into the hull.
    pub fn roots(&self) -> JunkRoots {
        JunkRoots::builder()
            .standard(&self.cache)
            .standard(&self.var_cache)
            .standard(&self.tmp)
            .standard(&self.trash)
            .standard(&self.thumbnails)
            .log(&self.logs)
            .leftover(&self.snap)
            .build()
    }

    pub fn sweep(&self, options: SweepOptions) -> Sweep {
        Sweep::builder()
            .roots(self.roots())
            .guard(SafetyGuard::for_home(&self.home))
            .options(options)
            .build()
            .unwrap()
    }

    pub fn base(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Digest of every path, file type and file content under the hull.
    pub fn fingerprint(&self) -> blake3::Hash {
        fingerprint(self.base())
    }
}

pub fn write_bytes(path: impl AsRef<Path>, len: usize) {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, vec![b'~'; len]).unwrap();
}

pub fn fingerprint(root: &Path) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.unwrap();
        let relative = entry.path().strip_prefix(root).unwrap();
        hasher.update(relative.as_os_str().as_encoded_bytes());
        hasher.update(&[0]);
        if entry.file_type().is_file() {
            hasher.update(b"f");
            hasher.update(&fs::read(entry.path()).unwrap());
        } else if entry.file_type().is_dir() {
            hasher.update(b"d");
        } else {
            hasher.update(b"l");
        }
        hasher.update(&[0]);
    }
    hasher.finalize()
}

pub fn quiet() -> bilge_pump::sweep::SweepOptionsBuilder {
    SweepOptions::builder().quiet(true)
}
