//! JSON input and output documents of the driver.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use pinrecon_core::{
    CandidateFile, FeedMatchReport, FeedMatchStatistics, Game, ReconcileOutput, Statistics,
};

/// Games and the files found in their content folders.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Inventory {
    pub games: Vec<Game>,
    #[serde(default)]
    pub files: Vec<CandidateFile>,
}

impl Inventory {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read inventory {:?}", path))?;
        serde_json::from_str(&text).with_context(|| format!("Failed to parse inventory {:?}", path))
    }
}

pub fn load_feed(path: &Path) -> Result<Vec<Game>> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read feed {:?}", path))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse feed {:?}", path))
}

#[derive(Debug, Serialize)]
pub struct ScanReport<'a> {
    pub statistics: &'a Statistics,
    pub content: &'a [ReconcileOutput],
}

#[derive(Debug, Serialize)]
pub struct ImportReport<'a> {
    pub matches: Vec<ImportMatch<'a>>,
    pub statistics: &'a FeedMatchStatistics,
}

#[derive(Debug, Serialize)]
pub struct ImportMatch<'a> {
    pub feed: &'a str,
    pub local: &'a str,
    pub score: i32,
}

impl<'a> ImportReport<'a> {
    pub fn new(report: &'a FeedMatchReport, local: &'a [Game], feed: &'a [Game]) -> Self {
        let matches = report
            .matches
            .iter()
            .map(|m| ImportMatch {
                feed: &feed[m.feed_index].name,
                local: &local[m.local_index].name,
                score: m.score,
            })
            .collect();
        Self {
            matches,
            statistics: &report.statistics,
        }
    }
}
