use crate::note::PinnedNote;
use anyhow::Result;
use std::rc::Rc;

/// Host service that brings a note into view.
pub trait FileNavigator {
    fn open(&self, path: &str) -> Result<()>;
}

/// Click action bound to a launcher: open one path through the navigator.
#[derive(Clone)]
pub struct Activation {
    path: String,
    navigator: Rc<dyn FileNavigator>,
}

impl Activation {
    pub fn new(path: impl Into<String>, navigator: Rc<dyn FileNavigator>) -> Self {
        Self {
            path: path.into(),
            navigator,
        }
    }

    pub fn fire(&self) {
        if let Err(e) = self.navigator.open(&self.path) {
            tracing::error!(path = %self.path, error = %e, "failed to open pinned note");
        }
    }
}

impl std::fmt::Debug for Activation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Activation").field("path", &self.path).finish()
    }
}

/// A visible launcher created by a [`LauncherHost`].
pub trait LauncherHandle {
    /// Take the launcher off screen. Consumes the handle.
    fn remove(self);
}

/// UI surface that can show clickable launcher icons.
pub trait LauncherHost {
    type Handle: LauncherHandle;

    fn create(&mut self, icon: &str, label: &str, on_activate: Activation)
        -> Result<Self::Handle>;
}

/// Keeps one launcher per pinned note, in collection order.
pub struct LauncherSync<H: LauncherHost> {
    host: H,
    navigator: Rc<dyn FileNavigator>,
    handles: Vec<H::Handle>,
}

impl<H: LauncherHost> LauncherSync<H> {
    pub fn new(host: H, navigator: Rc<dyn FileNavigator>) -> Self {
        Self {
            host,
            navigator,
            handles: Vec::new(),
        }
    }

    /// Drop every existing launcher and create a fresh one per note.
    ///
    /// A note whose launcher cannot be created is skipped; the rest are
    /// still created.
    pub fn rebuild(&mut self, notes: &[PinnedNote]) {
        self.clear();
        for note in notes {
            let activation = Activation::new(note.path.clone(), Rc::clone(&self.navigator));
            match self.host.create(note.icon.resolved(), &note.title, activation) {
                Ok(handle) => self.handles.push(handle),
                Err(e) => {
                    tracing::warn!(id = %note.id, title = %note.title, error = %e, "failed to create launcher");
                }
            }
        }
        tracing::debug!(count = self.handles.len(), "rebuilt launchers");
    }

    /// Remove every launcher created so far.
    pub fn clear(&mut self) {
        for handle in self.handles.drain(..) {
            handle.remove();
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
