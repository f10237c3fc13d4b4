use pinned_notes::form::{AddFlow, EditOutcome, Field, FormError, SettingsForm};
use pinned_notes::gui::Ribbon;
use pinned_notes::launcher::{FileNavigator, LauncherSync};
use pinned_notes::note::{PinnedNote, DEFAULT_ICON};
use pinned_notes::registry::Registry;
use pinned_notes::store::{Document, MemoryStore, NoteStore};
use serde_json::Value;
use std::cell::Cell;
use std::rc::Rc;

struct NoNav;

impl FileNavigator for NoNav {
    fn open(&self, _path: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

fn setup() -> (Registry<MemoryStore, Ribbon>, Ribbon, MemoryStore) {
    let store = MemoryStore::new();
    let ribbon = Ribbon::default();
    let registry = Registry::init(
        store.clone(),
        LauncherSync::new(ribbon.clone(), Rc::new(NoNav)),
    )
    .expect("init registry");
    (registry, ribbon, store)
}

/// Memory store whose next write can be made to fail.
#[derive(Clone, Default)]
struct FlakyStore {
    inner: MemoryStore,
    fail_next: Rc<Cell<bool>>,
}

impl NoteStore for FlakyStore {
    fn read(&self) -> anyhow::Result<Option<Value>> {
        self.inner.read()
    }

    fn write(&self, doc: &Document) -> anyhow::Result<()> {
        if self.fail_next.replace(false) {
            anyhow::bail!("disk full");
        }
        self.inner.write(doc)
    }
}

fn setup_flaky() -> (Registry<FlakyStore, Ribbon>, Ribbon, FlakyStore) {
    let store = FlakyStore::default();
    let ribbon = Ribbon::default();
    let registry = Registry::init(
        store.clone(),
        LauncherSync::new(ribbon.clone(), Rc::new(NoNav)),
    )
    .expect("init registry");
    (registry, ribbon, store)
}

fn compose(form: &mut SettingsForm, title: &str, path: &str, icon: &str) {
    form.begin_add();
    form.set_draft_field(Field::Title, title);
    form.set_draft_field(Field::Path, path);
    form.set_draft_field(Field::Icon, icon);
}

#[test]
fn add_rejects_missing_title_or_path() {
    let (mut registry, _, store) = setup();
    let mut form = SettingsForm::new(&registry);

    for (title, path) in [("", "/x"), ("x", ""), ("", "")] {
        compose(&mut form, title, path, "");
        let err = form.submit_add(&mut registry).unwrap_err();
        assert!(matches!(err, FormError::MissingRequiredField(_)));
        assert!(matches!(form.add_flow(), AddFlow::Composing(_)));
        form.cancel_add();
    }

    assert!(registry.is_empty());
    assert_eq!(store.writes(), 0);
    assert_eq!(form.take_notices().len(), 3);
}

#[test]
fn add_accepts_empty_icon_and_renders_default() {
    let (mut registry, ribbon, _) = setup();
    let mut form = SettingsForm::new(&registry);
    compose(&mut form, "Daily", "Journal/2024-01-01", "");
    form.submit_add(&mut registry).unwrap();

    assert_eq!(form.add_flow(), &AddFlow::Idle);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.notes()[0].icon.as_str(), "");
    assert_eq!(ribbon.icons()[0].icon, DEFAULT_ICON);
    assert_eq!(form.rows().len(), 1);
    assert_eq!(form.rows()[0].label, "File 1");
}

fn seeded() -> (Registry<MemoryStore, Ribbon>, Ribbon, MemoryStore, SettingsForm) {
    let (mut registry, ribbon, store) = setup();
    registry.add_note(PinnedNote::new("A", "p", "i")).unwrap();
    let form = SettingsForm::new(&registry);
    (registry, ribbon, store, form)
}

#[test]
fn edit_applies_only_the_changed_field() {
    let (mut registry, _, _, mut form) = seeded();
    form.edit_field(0, Field::Path, "q");
    let outcome = form.submit_edit(0, &mut registry).unwrap();

    assert_eq!(outcome.applied, vec![Field::Path]);
    let note = &registry.notes()[0];
    assert_eq!((note.title.as_str(), note.path.as_str(), note.icon.as_str()), ("A", "q", "i"));
}

#[test]
fn edit_without_changes_is_rejected_without_persisting() {
    let (mut registry, _, store, mut form) = seeded();
    let writes = store.writes();

    let err = form.submit_edit(0, &mut registry).unwrap_err();
    assert!(matches!(err, FormError::NoChangeProvided));

    form.edit_field(0, Field::Title, "A");
    let err = form.submit_edit(0, &mut registry).unwrap_err();
    assert!(matches!(err, FormError::NoChangeProvided));

    assert_eq!(store.writes(), writes);
    assert_eq!(form.take_notices().len(), 2);
}

#[test]
fn emptied_required_field_is_rejected_with_notice() {
    let (mut registry, _, _, mut form) = seeded();
    form.edit_field(0, Field::Title, "");
    form.edit_field(0, Field::Icon, "star");
    let outcome = form.submit_edit(0, &mut registry).unwrap();

    assert_eq!(
        outcome,
        EditOutcome {
            applied: vec![Field::Icon],
            rejected: vec![Field::Title],
        }
    );
    assert_eq!(registry.notes()[0].title, "A");
    assert_eq!(registry.notes()[0].icon.as_str(), "star");
    assert_eq!(form.rows()[0].display(Field::Title), "A");
    assert_eq!(form.take_notices(), vec!["Provide title".to_string()]);
}

#[test]
fn clearing_icon_falls_back_to_default_launcher() {
    let (mut registry, ribbon, _, mut form) = seeded();
    form.edit_field(0, Field::Icon, "");
    form.submit_edit(0, &mut registry).unwrap();
    assert_eq!(registry.notes()[0].icon.as_str(), "");
    assert_eq!(ribbon.icons()[0].icon, DEFAULT_ICON);
}

#[test]
fn redraw_discards_pending_edits() {
    let (registry, _, _, mut form) = seeded();
    form.edit_field(0, Field::Title, "changed");
    form.redraw(&registry);
    assert_eq!(form.rows()[0].buffer.title, None);
    assert_eq!(form.rows()[0].display(Field::Title), "A");
}

#[test]
fn remove_row_unpins_and_redraws() {
    let (mut registry, ribbon, _, mut form) = seeded();
    form.remove(0, &mut registry).unwrap();
    assert!(registry.is_empty());
    assert!(ribbon.is_empty());
    assert!(form.rows().is_empty());
}

#[test]
fn failed_save_on_add_leaves_nothing_behind_and_retry_adds_once() {
    let (mut registry, ribbon, store) = setup_flaky();
    let mut form = SettingsForm::new(&registry);
    compose(&mut form, "Daily", "Journal/today", "");

    store.fail_next.set(true);
    let err = form.submit_add(&mut registry).unwrap_err();
    assert!(matches!(err, FormError::Store(_)));
    assert!(registry.is_empty());
    assert!(ribbon.is_empty());
    assert!(matches!(form.add_flow(), AddFlow::Composing(_)));

    form.submit_add(&mut registry).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(ribbon.icons().len(), 1);
    let blob = store.inner.blob().expect("saved blob");
    assert_eq!(blob["pinnedNotes"].as_array().map(Vec::len), Some(1));
}

#[test]
fn failed_save_on_remove_keeps_the_note() {
    let (mut registry, ribbon, store) = setup_flaky();
    registry.add_note(PinnedNote::new("A", "p", "")).unwrap();
    let mut form = SettingsForm::new(&registry);

    store.fail_next.set(true);
    assert!(form.remove(0, &mut registry).is_err());
    assert_eq!(registry.len(), 1);
    assert_eq!(ribbon.icons().len(), 1);
    assert_eq!(form.rows().len(), 1);
}

#[test]
fn failed_save_on_edit_restores_the_saved_values() {
    let (mut registry, ribbon, store) = setup_flaky();
    registry.add_note(PinnedNote::new("A", "p", "i")).unwrap();
    let mut form = SettingsForm::new(&registry);
    form.edit_field(0, Field::Title, "B");

    store.fail_next.set(true);
    assert!(matches!(form.submit_edit(0, &mut registry), Err(FormError::Store(_))));
    assert_eq!(registry.notes()[0].title, "A");
    assert_eq!(ribbon.icons()[0].label, "A");
    assert_eq!(form.rows()[0].display(Field::Title), "A");
}
