use serde::{Deserialize, Serialize};

use crate::catalog::CatalogConfig;
use crate::fuzzy::MatchConfig;
use crate::reconcile::{default_content_types, ContentTypeConfig};

/// Root configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub matching: MatchConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default = "default_content_types")]
    pub content_types: Vec<ContentTypeConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            matching: MatchConfig::default(),
            catalog: CatalogConfig::default(),
            content_types: default_content_types(),
        }
    }
}

impl Config {
    /// Content type by name, ignoring case.
    pub fn content_type(&self, name: &str) -> Option<&ContentTypeConfig> {
        self.content_types
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }
}
