use std::path::{Path, PathBuf};

/// Which rule set applies to a junk root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootKind {
    /// Cache, temp, trash and thumbnail directories
    Standard,
    /// The system log directory
    Log,
    /// Parent directory of per-package folders
    Leftover,
}

/// A directory designated as a cleaning target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JunkRoot {
    path: PathBuf,
    kind: RootKind,
}

impl JunkRoot {
    pub fn new(path: impl Into<PathBuf>, kind: RootKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> RootKind {
        self.kind
    }
}

/// The fixed set of junk roots for a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JunkRoots {
    roots: Vec<JunkRoot>,
}

impl JunkRoots {
    /// The well-known junk locations of a Linux desktop for the user whose
    /// home directory is `home`.
    pub fn for_home(home: impl AsRef<Path>) -> Self {
        let home = home.as_ref();
        Self::builder()
            .standard(home.join(".cache"))
            .standard("/var/cache")
            .standard("/tmp")
            .standard(home.join(".local/share/Trash"))
            .standard(home.join(".cache/thumbnails"))
            .log("/var/log")
            .leftover(home.join("snap"))
            .build()
    }

    /// Creates a new builder for [`JunkRoots`]
    pub fn builder() -> JunkRootsBuilder {
        JunkRootsBuilder::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &JunkRoot> {
        self.roots.iter()
    }

    /// Roots of one kind, in configuration order.
    pub fn of_kind(&self, kind: RootKind) -> impl Iterator<Item = &JunkRoot> {
        self.roots.iter().filter(move |root| root.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Builder for [`JunkRoots`]
#[derive(Debug, Default)]
pub struct JunkRootsBuilder {
    roots: Vec<JunkRoot>,
}

impl JunkRootsBuilder {
    /// Add a cache, temp, trash or thumbnail directory
    pub fn standard(self, path: impl Into<PathBuf>) -> Self {
        self.root(JunkRoot::new(path, RootKind::Standard))
    }

    /// Add a log directory
    pub fn log(self, path: impl Into<PathBuf>) -> Self {
        self.root(JunkRoot::new(path, RootKind::Log))
    }

    /// Add a package-leftover parent directory
    pub fn leftover(self, path: impl Into<PathBuf>) -> Self {
        self.root(JunkRoot::new(path, RootKind::Leftover))
    }

    pub fn root(mut self, root: JunkRoot) -> Self {
        self.roots.push(root);
        self
    }

    /// Build the [`JunkRoots`]
    pub fn build(self) -> JunkRoots {
        JunkRoots { roots: self.roots }
    }
}
