//! Types for the canonical game catalogue.

use serde::{Deserialize, Serialize};

use crate::reconcile::ContentCategory;

/// A canonical catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Canonical name, also the file stem of its table files.
    pub name: String,
    /// Display description, e.g. `Medieval Madness (Williams 1997)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
}

impl Game {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            manufacturer: None,
            year: None,
        }
    }

    /// Name that content files of the given category are expected to carry.
    ///
    /// Media is named after the description, tables after the name.
    pub fn content_name(&self, category: ContentCategory) -> &str {
        match category {
            ContentCategory::Table => &self.name,
            ContentCategory::Media => self.description.as_deref().unwrap_or(&self.name),
        }
    }
}

/// Catalogue-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Manufacturer prefixes identifying original (non-manufactured) tables.
    #[serde(default = "default_original_manufacturers")]
    pub original_manufacturers: Vec<String>,
    /// Game names that are originals regardless of manufacturer.
    #[serde(default = "default_original_names")]
    pub original_names: Vec<String>,
}

fn default_original_manufacturers() -> Vec<String> {
    [
        "Original",
        "OrbitalPin",
        "HorsePin",
        "Zen Studios",
        "Professional Pinball",
        "Dream Pinball 3D",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_original_names() -> Vec<String> {
    [
        "Jurassic park - Limited Edition",
        "Kiss Live",
        "Dream Pinball 3D",
        "Sharpshooter",
        "Silver Line",
        "Space Cadet",
        "Yamanobori",
        "Siggi's Spider-Man Classic",
        "Mad Scientist",
        "Midnight Magic",
        "Pro Pinball The Web",
        "Octopus",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            original_manufacturers: default_original_manufacturers(),
            original_names: default_original_names(),
        }
    }
}
