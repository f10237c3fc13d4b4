use crate::launcher::FileNavigator;
use anyhow::Context;
use std::path::PathBuf;

/// Opens pinned paths relative to the vault folder with the system handler.
pub struct VaultNavigator {
    root: PathBuf,
}

impl VaultNavigator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a pinned path onto the file system. A path that names no file
    /// refers to the markdown note of the same name when one exists, even if
    /// the note name itself contains a dot.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let direct = self.root.join(path);
        if direct.is_file() {
            return direct;
        }
        let note = self.root.join(format!("{path}.md"));
        if note.is_file() {
            return note;
        }
        direct
    }
}

impl FileNavigator for VaultNavigator {
    fn open(&self, path: &str) -> anyhow::Result<()> {
        let target = self.resolve(path);
        tracing::info!(path = %target.display(), "opening pinned note");
        open::that(&target).with_context(|| format!("open {}", target.display()))
    }
}
