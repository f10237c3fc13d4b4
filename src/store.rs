use crate::note::PinnedNote;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub const PINNED_NOTES_FILE: &str = "pinned_notes.json";

/// The whole persisted state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "pinnedNotes", default)]
    pub pinned_notes: Vec<PinnedNote>,
}

impl Document {
    /// Shallow-merge a raw blob over the default document.
    ///
    /// Missing keys fall back to their defaults and unknown keys are
    /// ignored. An absent or `null` blob yields the default document.
    pub fn merged_over_default(blob: Option<Value>) -> Result<Self> {
        match blob {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(value @ Value::Object(_)) => {
                serde_json::from_value(value).context("deserialize pinned notes document")
            }
            Some(other) => {
                tracing::warn!(kind = %value_kind(&other), "ignoring non-object settings blob");
                Ok(Self::default())
            }
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Durable storage for the settings document.
pub trait NoteStore {
    /// Return the last written blob, or `None` if nothing was ever saved.
    fn read(&self) -> Result<Option<Value>>;
    /// Replace the stored blob with `doc`.
    fn write(&self, doc: &Document) -> Result<()>;
}

/// Stores the document as pretty printed JSON on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| PINNED_NOTES_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl NoteStore for JsonFileStore {
    fn read(&self) -> Result<Option<Value>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("read pinned notes file {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        let value = serde_json::from_str(&content)
            .with_context(|| format!("parse pinned notes file {}", self.path.display()))?;
        Ok(Some(value))
    }

    fn write(&self, doc: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("create pinned notes parent folder {}", parent.display())
                })?;
            }
        }
        let json = serde_json::to_string_pretty(doc).context("serialize pinned notes")?;
        let tmp = self.temp_path();
        std::fs::write(&tmp, json)
            .with_context(|| format!("write pinned notes temp file {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("replace pinned notes file {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), count = doc.pinned_notes.len(), "saved pinned notes");
        Ok(())
    }
}

#[derive(Default)]
struct MemoryInner {
    blob: Option<Value>,
    writes: usize,
}

/// In-process store. Clones share the same underlying blob.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: Value) -> Self {
        let store = Self::default();
        if let Ok(mut inner) = store.inner.lock() {
            inner.blob = Some(blob);
        }
        store
    }

    pub fn blob(&self) -> Option<Value> {
        self.inner.lock().ok().and_then(|inner| inner.blob.clone())
    }

    /// Number of completed writes.
    pub fn writes(&self) -> usize {
        self.inner.lock().map(|inner| inner.writes).unwrap_or(0)
    }
}

impl NoteStore for MemoryStore {
    fn read(&self) -> Result<Option<Value>> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?;
        Ok(inner.blob.clone())
    }

    fn write(&self, doc: &Document) -> Result<()> {
        let value = serde_json::to_value(doc).context("serialize pinned notes")?;
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?;
        inner.blob = Some(value);
        inner.writes += 1;
        Ok(())
    }
}
