//! Content type definitions.

use serde::{Deserialize, Serialize};

use super::types::ContentCategory;

/// One content folder kind, e.g. `Tables` or `Wheel Images`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeConfig {
    pub name: String,
    pub category: ContentCategory,
    /// Extensions of the content files themselves, in order of preference.
    pub extensions: Vec<String>,
    /// Extensions of files that legitimately sit next to the content
    /// (scripts, read-me files). They are never canonical: a kindred file
    /// matching a game is recorded as a duplicate.
    #[serde(default)]
    pub kindred_extensions: Vec<String>,
}

impl ContentTypeConfig {
    pub fn new(name: &str, category: ContentCategory, extensions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            category,
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
            kindred_extensions: Vec::new(),
        }
    }

    pub fn with_kindred(mut self, extensions: &[&str]) -> Self {
        self.kindred_extensions = extensions.iter().map(|e| e.to_string()).collect();
        self
    }

    /// Whether files with this extension take part in reconciliation.
    ///
    /// Accepts `vpx`, `.vpx` and `*.vpx` spellings on either side.
    pub fn supports(&self, extension: Option<&str>) -> bool {
        self.preference(extension).is_some() || self.is_kindred(extension)
    }

    /// Position of the extension in `extensions`, lower is preferred.
    pub fn preference(&self, extension: Option<&str>) -> Option<usize> {
        let extension = normalize_extension(extension?);
        self.extensions
            .iter()
            .position(|e| normalize_extension(e) == extension)
    }

    /// Listed in `kindred_extensions` and not a content extension.
    pub fn is_kindred(&self, extension: Option<&str>) -> bool {
        let Some(extension) = extension else {
            return false;
        };
        if self.preference(Some(extension)).is_some() {
            return false;
        }
        let extension = normalize_extension(extension);
        self.kindred_extensions
            .iter()
            .any(|e| normalize_extension(e) == extension)
    }

    /// Processing order of a file: content extensions by preference, then
    /// kindred files, then everything else.
    pub fn file_order(&self, extension: Option<&str>) -> usize {
        match self.preference(extension) {
            Some(idx) => idx,
            None if self.is_kindred(extension) => self.extensions.len(),
            None => usize::MAX,
        }
    }
}

/// Lowercase extension without glob star or leading dot.
pub fn normalize_extension(extension: &str) -> String {
    extension
        .trim()
        .trim_start_matches('*')
        .trim_start_matches('.')
        .to_lowercase()
}

pub fn default_content_types() -> Vec<ContentTypeConfig> {
    use ContentCategory::{Media, Table};

    vec![
        ContentTypeConfig::new("Tables", Table, &["vpx", "vpt"]).with_kindred(&["vbs", "txt", "pdf"]),
        ContentTypeConfig::new("Backglasses", Table, &["directb2s"]),
        ContentTypeConfig::new("Point of Views", Table, &["pov"]),
        ContentTypeConfig::new("Table Audio", Media, &["mp3", "wav"]),
        ContentTypeConfig::new("Launch Audio", Media, &["mp3", "wav"]),
        ContentTypeConfig::new("Table Videos", Media, &["f4v", "mp4", "mkv"]),
        ContentTypeConfig::new("Backglass Videos", Media, &["f4v", "mp4", "mkv"]),
        ContentTypeConfig::new("Wheel Images", Media, &["png", "apng", "jpg"]),
        ContentTypeConfig::new("Topper Videos", Media, &["f4v", "mp4"]),
        ContentTypeConfig::new("Instruction Cards", Media, &["png", "jpg", "swf"]),
        ContentTypeConfig::new("Flyer Images", Media, &["png", "jpg"]),
        ContentTypeConfig::new("DMD Videos", Media, &["f4v", "mp4"]),
    ]
}
