use crate::launcher::{LauncherHost, LauncherSync};
use crate::note::PinnedNote;
use crate::store::{Document, NoteStore};
use anyhow::Result;
use uuid::Uuid;

/// Owns the pinned notes for a session and keeps the launchers in step
/// with what was last persisted.
pub struct Registry<S: NoteStore, H: LauncherHost> {
    store: S,
    doc: Document,
    launchers: LauncherSync<H>,
}

impl<S: NoteStore, H: LauncherHost> Registry<S, H> {
    /// Construct the registry and load the persisted notes.
    pub fn init(store: S, launchers: LauncherSync<H>) -> Result<Self> {
        let mut registry = Self {
            store,
            doc: Document::default(),
            launchers,
        };
        registry.load()?;
        Ok(registry)
    }

    /// Remove every launcher. The persisted notes are left untouched.
    pub fn teardown(&mut self) {
        self.launchers.clear();
        tracing::debug!("pinned note launchers released");
    }

    pub fn notes(&self) -> &[PinnedNote] {
        &self.doc.pinned_notes
    }

    pub fn get(&self, id: Uuid) -> Option<&PinnedNote> {
        self.doc.pinned_notes.iter().find(|n| n.id == id)
    }

    /// Mutable access for in-place edits. Follow with [`commit`](Self::commit).
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut PinnedNote> {
        self.doc.pinned_notes.iter_mut().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.doc.pinned_notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc.pinned_notes.is_empty()
    }

    pub fn launcher_count(&self) -> usize {
        self.launchers.len()
    }

    pub fn add_note(&mut self, note: PinnedNote) -> Result<()> {
        tracing::info!(id = %note.id, title = %note.title, path = %note.path, "pinning note");
        self.doc.pinned_notes.push(note);
        self.commit()
    }

    /// Remove the note with `id`. Unknown ids are ignored.
    pub fn remove_note(&mut self, id: Uuid) -> Result<()> {
        match self.doc.pinned_notes.iter().position(|n| n.id == id) {
            Some(pos) => {
                let removed = self.doc.pinned_notes.remove(pos);
                tracing::info!(id = %id, title = %removed.title, "unpinned note");
            }
            None => tracing::debug!(id = %id, "remove requested for unknown note"),
        }
        self.commit()
    }

    /// Save the in-memory document and resync from the store.
    ///
    /// When the save fails the last persisted document is reloaded, so an
    /// unsaved mutation never lingers in memory or on the ribbon.
    pub fn commit(&mut self) -> Result<()> {
        if let Err(e) = self.save() {
            tracing::error!(error = %e, "failed to save pinned notes; restoring last saved state");
            if let Err(reload) = self.load() {
                tracing::error!(error = %reload, "failed to reload pinned notes");
            }
            return Err(e);
        }
        self.refresh()
    }

    /// Read the persisted document, replace the in-memory copy and rebuild
    /// the launchers from it.
    pub fn load(&mut self) -> Result<()> {
        let blob = self.store.read()?;
        self.doc = Document::merged_over_default(blob)?;
        self.launchers.rebuild(&self.doc.pinned_notes);
        tracing::debug!(count = self.doc.pinned_notes.len(), "loaded pinned notes");
        Ok(())
    }

    /// Persist the in-memory document as is.
    pub fn save(&self) -> Result<()> {
        self.store.write(&self.doc)
    }

    /// Resync after a mutation: the launchers always reflect what round
    /// trips through the store.
    pub fn refresh(&mut self) -> Result<()> {
        self.load()
    }
}
