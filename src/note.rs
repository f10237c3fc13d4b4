use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Icon shown on the ribbon when a note has no icon of its own.
pub const DEFAULT_ICON: &str = "file";

/// Free-form icon identifier resolved against the host's icon catalog.
///
/// The stored value is kept verbatim. An empty name is a valid "use the
/// default" signal and is only substituted when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconName(String);

impl IconName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Name to hand to the icon catalog.
    pub fn resolved(&self) -> &str {
        if self.0.is_empty() {
            DEFAULT_ICON
        } else {
            &self.0
        }
    }
}

impl From<&str> for IconName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for IconName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedNote {
    pub id: Uuid,
    #[serde(default)]
    pub icon: IconName,
    pub path: String,
    pub title: String,
}

impl PinnedNote {
    /// Create a note with a freshly minted id.
    ///
    /// Fields are stored as given. Callers validate that `title` and `path`
    /// are non-empty before calling this.
    pub fn new(title: impl Into<String>, path: impl Into<String>, icon: impl Into<IconName>) -> Self {
        Self {
            id: Uuid::new_v4(),
            icon: icon.into(),
            path: path.into(),
            title: title.into(),
        }
    }
}
