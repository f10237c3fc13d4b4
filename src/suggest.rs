use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::path::PathBuf;
use walkdir::WalkDir;

/// File extensions offered as pin targets.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["md", "canvas"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Vault relative path with forward slashes.
    pub path: String,
    pub extension: String,
}

impl Suggestion {
    /// Text shown in the suggestion list.
    pub fn display(&self) -> &str {
        match self.extension.as_str() {
            "md" => strip_ext(&self.path, ".md"),
            "canvas" => strip_ext(&self.path, ".canvas"),
            _ => &self.path,
        }
    }

    /// Small tag rendered next to the text, if any.
    pub fn tag(&self) -> Option<&str> {
        (self.extension == "canvas").then_some("canvas")
    }

    /// Value written into the path field when picked. Markdown notes drop
    /// their extension, everything else keeps the full path.
    pub fn insert_text(&self) -> &str {
        if self.extension == "md" {
            strip_ext(&self.path, ".md")
        } else {
            &self.path
        }
    }
}

fn strip_ext<'a>(path: &'a str, ext: &str) -> &'a str {
    path.strip_suffix(ext).unwrap_or(path)
}

/// Advisory path completion over the files of a vault folder.
pub struct FileSuggest {
    root: PathBuf,
    matcher: SkimMatcherV2,
}

impl FileSuggest {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            matcher: SkimMatcherV2::default(),
        }
    }

    fn files(&self) -> Vec<Suggestion> {
        let mut out = Vec::new();
        for entry in WalkDir::new(&self.root).into_iter() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!(root = %self.root.display(), error = %e, "skipping unreadable vault entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(ext) = entry.path().extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if !ACCEPTED_EXTENSIONS.contains(&ext) {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let path = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            out.push(Suggestion {
                path,
                extension: ext.to_string(),
            });
        }
        out
    }

    /// Candidates whose path contains `input`, case insensitive, best
    /// fuzzy matches first.
    pub fn suggestions(&self, input: &str) -> Vec<Suggestion> {
        let needle = input.to_lowercase();
        let mut scored: Vec<(i64, Suggestion)> = self
            .files()
            .into_iter()
            .filter(|s| s.path.to_lowercase().contains(&needle))
            .map(|s| {
                let score = self.matcher.fuzzy_match(&s.path, input).unwrap_or(0);
                (score, s)
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.path.cmp(&b.1.path)));
        scored.into_iter().map(|(_, s)| s).collect()
    }
}
