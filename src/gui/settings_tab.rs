use crate::form::{AddFlow, Field, FormError, SettingsForm, ADD_NOTE_DESC, ADD_NOTE_NAME};
use crate::launcher::LauncherHost;
use crate::registry::Registry;
use crate::store::NoteStore;
use crate::suggest::{FileSuggest, Suggestion};
use eframe::egui;

const MAX_SUGGESTIONS: usize = 8;
const FIELD_WIDTH: f32 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathTarget {
    Draft,
    Row(usize),
}

enum Intent {
    BeginAdd,
    CancelAdd,
    SubmitAdd,
    SubmitEdit(usize),
    Remove(usize),
    Draft(Field, String),
    Edit(usize, Field, String),
}

/// egui rendering of [`SettingsForm`] with path completion.
pub struct SettingsTab {
    pub form: SettingsForm,
    suggest: FileSuggest,
    target: Option<PathTarget>,
    hits: Vec<Suggestion>,
}

impl SettingsTab {
    pub fn new(form: SettingsForm, suggest: FileSuggest) -> Self {
        Self {
            form,
            suggest,
            target: None,
            hits: Vec::new(),
        }
    }

    fn refresh_hits(&mut self, target: PathTarget, input: &str) {
        self.target = Some(target);
        self.hits = if input.is_empty() {
            Vec::new()
        } else {
            let mut hits = self.suggest.suggestions(input);
            hits.truncate(MAX_SUGGESTIONS);
            hits
        };
    }

    fn suggestion_list(&self, ui: &mut egui::Ui, target: PathTarget) -> Option<String> {
        if self.target != Some(target) || self.hits.is_empty() {
            return None;
        }
        let mut picked = None;
        egui::Frame::popup(ui.style()).show(ui, |ui| {
            for hit in &self.hits {
                ui.horizontal(|ui| {
                    if ui.selectable_label(false, hit.display()).clicked() {
                        picked = Some(hit.insert_text().to_string());
                    }
                    if let Some(tag) = hit.tag() {
                        ui.small(tag);
                    }
                });
            }
        });
        picked
    }

    fn text_field(ui: &mut egui::Ui, value: &str, hint: &str) -> Option<String> {
        let mut text = value.to_string();
        let resp = ui.add(
            egui::TextEdit::singleline(&mut text)
                .hint_text(hint)
                .desired_width(FIELD_WIDTH),
        );
        resp.changed().then_some(text)
    }

    /// Draw the tab and apply whatever the user did this frame.
    pub fn ui<S: NoteStore, H: LauncherHost>(
        &mut self,
        ui: &mut egui::Ui,
        registry: &mut Registry<S, H>,
    ) -> Result<(), FormError> {
        let mut intents = Vec::new();

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.strong(ADD_NOTE_NAME);
                ui.label(ADD_NOTE_DESC);
            });
            if ui
                .add_enabled(self.form.can_add(), egui::Button::new("➕"))
                .on_hover_text("Add pinned note")
                .clicked()
            {
                intents.push(Intent::BeginAdd);
            }
        });

        if let AddFlow::Composing(draft) = self.form.add_flow().clone() {
            ui.separator();
            ui.horizontal(|ui| {
                ui.label("File");
                if let Some(v) = Self::text_field(ui, &draft.title, "Title") {
                    intents.push(Intent::Draft(Field::Title, v));
                }
                if let Some(v) = Self::text_field(ui, &draft.path, "Path") {
                    self.refresh_hits(PathTarget::Draft, &v);
                    intents.push(Intent::Draft(Field::Path, v));
                }
                if let Some(v) = Self::text_field(ui, &draft.icon, "Icon (optional)") {
                    intents.push(Intent::Draft(Field::Icon, v));
                }
                if ui.button("💾").on_hover_text("Save").clicked() {
                    intents.push(Intent::SubmitAdd);
                }
                if ui.button("Cancel").clicked() {
                    intents.push(Intent::CancelAdd);
                }
            });
            if let Some(path) = self.suggestion_list(ui, PathTarget::Draft) {
                self.hits.clear();
                intents.push(Intent::Draft(Field::Path, path));
            }
        }

        ui.separator();
        egui::ScrollArea::vertical().show(ui, |ui| {
            for (idx, row) in self.form.rows().to_vec().iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(row.label.as_str());
                    if let Some(v) = Self::text_field(ui, row.display(Field::Title), "Title") {
                        intents.push(Intent::Edit(idx, Field::Title, v));
                    }
                    if let Some(v) = Self::text_field(ui, row.display(Field::Path), "Path") {
                        self.refresh_hits(PathTarget::Row(idx), &v);
                        intents.push(Intent::Edit(idx, Field::Path, v));
                    }
                    if let Some(v) = Self::text_field(ui, row.display(Field::Icon), "Icon (optional)") {
                        intents.push(Intent::Edit(idx, Field::Icon, v));
                    }
                    if ui.button("💾").on_hover_text("Save").clicked() {
                        intents.push(Intent::SubmitEdit(idx));
                    }
                    let delete = egui::Button::new(
                        egui::RichText::new("🗑").color(ui.visuals().warn_fg_color),
                    );
                    if ui.add(delete).on_hover_text("Remove").clicked() {
                        intents.push(Intent::Remove(idx));
                    }
                });
                if let Some(path) = self.suggestion_list(ui, PathTarget::Row(idx)) {
                    self.hits.clear();
                    intents.push(Intent::Edit(idx, Field::Path, path));
                }
            }
        });

        self.apply(intents, registry)
    }

    fn apply<S: NoteStore, H: LauncherHost>(
        &mut self,
        intents: Vec<Intent>,
        registry: &mut Registry<S, H>,
    ) -> Result<(), FormError> {
        for intent in intents {
            let result = match intent {
                Intent::BeginAdd => {
                    self.form.begin_add();
                    Ok(())
                }
                Intent::CancelAdd => {
                    self.form.cancel_add();
                    Ok(())
                }
                Intent::Draft(field, value) => {
                    self.form.set_draft_field(field, value);
                    Ok(())
                }
                Intent::Edit(row, field, value) => {
                    self.form.edit_field(row, field, value);
                    Ok(())
                }
                Intent::SubmitAdd => self.form.submit_add(registry),
                Intent::SubmitEdit(row) => self.form.submit_edit(row, registry).map(|_| ()),
                Intent::Remove(row) => {
                    self.target = None;
                    self.hits.clear();
                    self.form.remove(row, registry)
                }
            };
            match result {
                Ok(()) => {}
                // validation failures were already queued as notices
                Err(FormError::MissingRequiredField(_)) | Err(FormError::NoChangeProvided) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
