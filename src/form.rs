use crate::launcher::LauncherHost;
use crate::note::PinnedNote;
use crate::registry::Registry;
use crate::store::NoteStore;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

pub const ADD_NOTE_NAME: &str = "Add pinned note";
pub const ADD_NOTE_DESC: &str = "Provide: 1) the name shown when hovering the icon \
2) the path to the file, e.g. Folder1/File1 \
3) an icon name; if no icon is given the default \"file\" icon is used. \
Restart the application after changing icons.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Path,
    Icon,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Path => "path",
            Field::Icon => "icon",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Provide {0}")]
    MissingRequiredField(Field),

    #[error("Nothing to apply: change a field first")]
    NoChangeProvided,

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Values typed into the "add" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub path: String,
    pub icon: String,
}

impl NoteDraft {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Path => &self.path,
            Field::Icon => &self.icon,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.title = value,
            Field::Path => self.path = value,
            Field::Icon => self.icon = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddFlow {
    Idle,
    Composing(NoteDraft),
}

/// Pending changes for one existing note. `None` means untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    pub title: Option<String>,
    pub path: Option<String>,
    pub icon: Option<String>,
}

impl EditBuffer {
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            Field::Title => self.title = value,
            Field::Path => self.path = value,
            Field::Icon => self.icon = value,
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => self.title.as_deref(),
            Field::Path => self.path.as_deref(),
            Field::Icon => self.icon.as_deref(),
        }
    }

    /// True when no buffer holds a value different from the note's.
    pub fn is_noop_for(&self, note: &PinnedNote) -> bool {
        let same = |pending: &Option<String>, current: &str| {
            pending.as_deref().map_or(true, |v| v == current)
        };
        same(&self.title, &note.title)
            && same(&self.path, &note.path)
            && same(&self.icon, note.icon.as_str())
    }
}

/// One rendered row of the settings list.
#[derive(Debug, Clone)]
pub struct FormRow {
    pub label: String,
    pub note: PinnedNote,
    pub buffer: EditBuffer,
}

impl FormRow {
    /// Text to show in a field: the pending value if any, else the stored one.
    pub fn display(&self, field: Field) -> &str {
        self.buffer.get(field).unwrap_or(match field {
            Field::Title => self.note.title.as_str(),
            Field::Path => self.note.path.as_str(),
            Field::Icon => self.note.icon.as_str(),
        })
    }
}

/// Fields accepted and rejected by one edit submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditOutcome {
    pub applied: Vec<Field>,
    pub rejected: Vec<Field>,
}

/// Editable view over a [`Registry`].
pub struct SettingsForm {
    add: AddFlow,
    rows: Vec<FormRow>,
    notices: Vec<String>,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            add: AddFlow::Idle,
            rows: Vec::new(),
            notices: Vec::new(),
        }
    }
}

impl SettingsForm {
    pub fn new<S: NoteStore, H: LauncherHost>(registry: &Registry<S, H>) -> Self {
        let mut form = Self::default();
        form.redraw(registry);
        form
    }

    pub fn add_flow(&self) -> &AddFlow {
        &self.add
    }

    pub fn can_add(&self) -> bool {
        matches!(self.add, AddFlow::Idle)
    }

    pub fn rows(&self) -> &[FormRow] {
        &self.rows
    }

    /// Drain notices waiting to be shown to the user.
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    fn notify(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::info!(notice = %msg, "settings notice");
        self.notices.push(msg);
    }

    /// Rebuild every row from the registry, discarding pending edits.
    pub fn redraw<S: NoteStore, H: LauncherHost>(&mut self, registry: &Registry<S, H>) {
        self.rows = registry
            .notes()
            .iter()
            .enumerate()
            .map(|(i, note)| FormRow {
                label: format!("File {}", i + 1),
                note: note.clone(),
                buffer: EditBuffer::default(),
            })
            .collect();
    }

    pub fn begin_add(&mut self) {
        if self.can_add() {
            self.add = AddFlow::Composing(NoteDraft::default());
        }
    }

    pub fn cancel_add(&mut self) {
        self.add = AddFlow::Idle;
    }

    pub fn set_draft_field(&mut self, field: Field, value: impl Into<String>) {
        if let AddFlow::Composing(draft) = &mut self.add {
            draft.set(field, value);
        }
    }

    /// Validate the draft and pin it. On a validation error the form stays
    /// in the composing state.
    pub fn submit_add<S: NoteStore, H: LauncherHost>(
        &mut self,
        registry: &mut Registry<S, H>,
    ) -> Result<(), FormError> {
        let AddFlow::Composing(draft) = self.add.clone() else {
            return Ok(());
        };
        let missing = if draft.title.is_empty() {
            Some(Field::Title)
        } else if draft.path.is_empty() {
            Some(Field::Path)
        } else {
            None
        };
        if let Some(field) = missing {
            self.notify("Provide title and path");
            return Err(FormError::MissingRequiredField(field));
        }
        let note = PinnedNote::new(draft.title, draft.path, draft.icon);
        registry.add_note(note)?;
        self.add = AddFlow::Idle;
        self.redraw(registry);
        Ok(())
    }

    pub fn edit_field(&mut self, row: usize, field: Field, value: impl Into<String>) {
        if let Some(row) = self.rows.get_mut(row) {
            row.buffer.set(field, value);
        }
    }

    /// Apply the pending changes of one row.
    ///
    /// Empty title or path values are rejected while the other changes of
    /// the same submission still apply. The redraw that follows drops every
    /// pending value, so a rejected field has to be typed again.
    pub fn submit_edit<S: NoteStore, H: LauncherHost>(
        &mut self,
        row: usize,
        registry: &mut Registry<S, H>,
    ) -> Result<EditOutcome, FormError> {
        let Some(form_row) = self.rows.get(row) else {
            return Ok(EditOutcome::default());
        };
        let id = form_row.note.id;
        let mut buffer = form_row.buffer.clone();

        let Some(note) = registry.get(id) else {
            tracing::debug!(id = %id, "edit submitted for a note that is gone");
            self.redraw(registry);
            return Ok(EditOutcome::default());
        };
        if buffer.is_noop_for(note) {
            self.notify(FormError::NoChangeProvided.to_string());
            return Err(FormError::NoChangeProvided);
        }

        let mut outcome = EditOutcome::default();
        if let Some(note) = registry.get_mut(id) {
            if let Some(title) = buffer.title.take() {
                if title.is_empty() {
                    outcome.rejected.push(Field::Title);
                } else {
                    note.title = title;
                    outcome.applied.push(Field::Title);
                }
            }
            if let Some(path) = buffer.path.take() {
                if path.is_empty() {
                    outcome.rejected.push(Field::Path);
                } else {
                    note.path = path;
                    outcome.applied.push(Field::Path);
                }
            }
            if let Some(icon) = buffer.icon.take() {
                note.icon = icon.into();
                outcome.applied.push(Field::Icon);
            }
        }
        for field in outcome.rejected.clone() {
            self.notify(FormError::MissingRequiredField(field).to_string());
        }

        tracing::info!(id = %id, applied = ?outcome.applied, rejected = ?outcome.rejected, "edited pinned note");
        let committed = registry.commit();
        self.redraw(registry);
        committed?;
        Ok(outcome)
    }

    pub fn remove<S: NoteStore, H: LauncherHost>(
        &mut self,
        row: usize,
        registry: &mut Registry<S, H>,
    ) -> Result<(), FormError> {
        if let Some(form_row) = self.rows.get(row) {
            let id: Uuid = form_row.note.id;
            registry.remove_note(id)?;
        }
        self.redraw(registry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note() -> PinnedNote {
        PinnedNote::new("A", "p", "i")
    }

    #[test]
    fn untouched_buffer_is_noop() {
        assert!(EditBuffer::default().is_noop_for(&note()));
    }

    #[test]
    fn buffer_equal_to_current_is_noop() {
        let mut buffer = EditBuffer::default();
        buffer.set(Field::Title, "A");
        buffer.set(Field::Icon, "i");
        assert!(buffer.is_noop_for(&note()));
    }

    #[test]
    fn changed_field_is_not_noop() {
        let mut buffer = EditBuffer::default();
        buffer.set(Field::Path, "q");
        assert!(!buffer.is_noop_for(&note()));
    }

    #[test]
    fn clearing_icon_counts_as_change() {
        let mut buffer = EditBuffer::default();
        buffer.set(Field::Icon, "");
        assert!(!buffer.is_noop_for(&note()));
    }

    #[test]
    fn row_display_prefers_pending_value() {
        let mut row = FormRow {
            label: "File 1".into(),
            note: note(),
            buffer: EditBuffer::default(),
        };
        assert_eq!(row.display(Field::Title), "A");
        row.buffer.set(Field::Title, "B");
        assert_eq!(row.display(Field::Title), "B");
        assert_eq!(row.display(Field::Icon), "i");
    }

    #[test]
    fn draft_fields_only_change_while_composing() {
        let mut form = SettingsForm::default();
        form.set_draft_field(Field::Title, "ignored");
        assert_eq!(form.add_flow(), &AddFlow::Idle);

        form.begin_add();
        assert!(!form.can_add());
        form.set_draft_field(Field::Title, "T");
        match form.add_flow() {
            AddFlow::Composing(draft) => assert_eq!(draft.field(Field::Title), "T"),
            AddFlow::Idle => panic!("expected composing"),
        }

        form.cancel_add();
        assert!(form.can_add());
    }
}
