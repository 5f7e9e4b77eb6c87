//! Types for content reconciliation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Game;
use crate::fuzzy::{file_name, split_extension};

/// Whether content is a table (named after the game) or media (named after
/// the description).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    Table,
    Media,
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentCategory::Table => write!(f, "table"),
            ContentCategory::Media => write!(f, "media"),
        }
    }
}

/// A file found in a content folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFile {
    /// Full path as found on disk.
    pub path: String,
    /// Name of the content type whose folder the file lives in.
    pub content_type: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
}

impl CandidateFile {
    pub fn new(path: impl Into<String>, content_type: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            content_type: content_type.into(),
            size,
        }
    }

    /// File name including the extension.
    pub fn file_name(&self) -> &str {
        file_name(&self.path)
    }

    /// File name without the extension.
    pub fn stem(&self) -> &str {
        split_extension(self.file_name()).0
    }

    /// Lowercase extension without the dot.
    pub fn extension(&self) -> Option<String> {
        split_extension(self.file_name()).1.map(str::to_lowercase)
    }
}

/// Classification of a file against a game slot.
///
/// Variants are ordered from most to least desirable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HitKind {
    /// File stem equals the expected name exactly.
    CorrectName,
    /// File stem equals the expected name ignoring case.
    WrongCase,
    /// Media file named after the table name instead of the description.
    TableName,
    /// Matched by the similarity scorer.
    Fuzzy { score: i32 },
    /// Another file already holds the correct name for this slot, or a
    /// kindred file (script, read-me) belonging to the game.
    Duplicate,
    /// Supported extension, no owning game.
    Unknown,
    /// Extension not recognised for the content type.
    Unsupported,
    /// Slot has no canonical file.
    Missing,
}

impl HitKind {
    /// Every kind, in rank order. `Fuzzy` carries a placeholder score.
    pub const ALL: [HitKind; 8] = [
        HitKind::CorrectName,
        HitKind::WrongCase,
        HitKind::TableName,
        HitKind::Fuzzy { score: 0 },
        HitKind::Duplicate,
        HitKind::Unknown,
        HitKind::Unsupported,
        HitKind::Missing,
    ];

    /// Stable identifier, independent of any fuzzy score.
    pub fn description(&self) -> &'static str {
        match self {
            HitKind::CorrectName => "correct_name",
            HitKind::WrongCase => "wrong_case",
            HitKind::TableName => "table_name",
            HitKind::Fuzzy { .. } => "fuzzy",
            HitKind::Duplicate => "duplicate",
            HitKind::Unknown => "unknown",
            HitKind::Unsupported => "unsupported",
            HitKind::Missing => "missing",
        }
    }

    pub fn score(&self) -> Option<i32> {
        match self {
            HitKind::Fuzzy { score } => Some(*score),
            _ => None,
        }
    }

    /// Lower is better.
    pub fn rank(&self) -> u8 {
        match self {
            HitKind::CorrectName => 0,
            HitKind::WrongCase => 1,
            HitKind::TableName => 2,
            HitKind::Fuzzy { .. } => 3,
            HitKind::Duplicate => 4,
            HitKind::Unknown => 5,
            HitKind::Unsupported => 6,
            HitKind::Missing => 7,
        }
    }

    /// Kinds that count as the slot's canonical file.
    pub fn is_canonical(&self) -> bool {
        matches!(self, HitKind::CorrectName | HitKind::WrongCase | HitKind::TableName)
    }

    /// Same kind, ignoring any fuzzy score.
    pub fn same_kind(&self, other: &HitKind) -> bool {
        self.rank() == other.rank()
    }
}

impl fmt::Display for HitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HitKind::Fuzzy { score } => write!(f, "fuzzy ({})", score),
            other => write!(f, "{}", other.description().replace('_', " ")),
        }
    }
}

/// One classified association between a file and a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    #[serde(flatten)]
    pub kind: HitKind,
    /// `None` only for [`HitKind::Missing`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<CandidateFile>,
}

impl Hit {
    pub fn new(kind: HitKind, file: CandidateFile) -> Self {
        Self {
            kind,
            file: Some(file),
        }
    }

    pub fn missing() -> Self {
        Self {
            kind: HitKind::Missing,
            file: None,
        }
    }

    pub fn size(&self) -> u64 {
        self.file.as_ref().map_or(0, |f| f.size)
    }
}

/// Hits collected for one game within one content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationSlot {
    pub game: Game,
    /// Name a canonical file of this content type would carry.
    pub expected_name: String,
    /// Hits in the order they were found, `Missing` last.
    pub hits: Vec<Hit>,
}

impl ClassificationSlot {
    pub fn new(game: Game, expected_name: impl Into<String>) -> Self {
        Self {
            game,
            expected_name: expected_name.into(),
            hits: Vec::new(),
        }
    }

    /// Highest ranked hit; fuzzy hits compare by score.
    pub fn best(&self) -> Option<&Hit> {
        self.hits.iter().min_by_key(|hit| {
            (
                hit.kind.rank(),
                std::cmp::Reverse(hit.kind.score().unwrap_or(0)),
            )
        })
    }

    pub fn is_missing(&self) -> bool {
        self.hits.iter().any(|hit| hit.kind == HitKind::Missing)
    }

    pub fn has_correct_name(&self) -> bool {
        self.hits.iter().any(|hit| hit.kind == HitKind::CorrectName)
    }

    pub fn has_canonical(&self) -> bool {
        self.hits.iter().any(|hit| hit.kind.is_canonical())
    }

    /// Number of hits of the given kind; fuzzy scores are ignored.
    pub fn count(&self, kind: HitKind) -> usize {
        self.hits.iter().filter(|hit| hit.kind.same_kind(&kind)).count()
    }

    /// Anything other than exactly one correctly named file.
    pub fn is_smelly(&self) -> bool {
        !(self.hits.len() == 1 && self.hits[0].kind == HitKind::CorrectName)
    }

    pub(crate) fn push(&mut self, kind: HitKind, file: CandidateFile) {
        self.hits.push(Hit::new(kind, file));
    }
}

/// Result of reconciling one content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileOutput {
    pub content_type: String,
    pub category: ContentCategory,
    /// One slot per game, in catalogue order.
    pub slots: Vec<ClassificationSlot>,
    /// Files that no game claimed, tagged `Unknown` or `Unsupported`.
    pub unmatched: Vec<Hit>,
}

impl ReconcileOutput {
    /// Slot of the game with the given name.
    pub fn slot(&self, game_name: &str) -> Option<&ClassificationSlot> {
        self.slots.iter().find(|slot| slot.game.name == game_name)
    }

    /// Number of files placed, in slots or unmatched.
    pub fn file_count(&self) -> usize {
        let placed: usize = self
            .slots
            .iter()
            .map(|slot| slot.hits.iter().filter(|hit| hit.file.is_some()).count())
            .sum();
        placed + self.unmatched.len()
    }

    pub fn missing_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_missing()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{file, game};

    #[test]
    fn test_candidate_file_parts() {
        let f = file(r"C:\vp\Tables\Medieval Madness (Williams 1997).VPX", "Tables");
        assert_eq!(f.file_name(), "Medieval Madness (Williams 1997).VPX");
        assert_eq!(f.stem(), "Medieval Madness (Williams 1997)");
        assert_eq!(f.extension().as_deref(), Some("vpx"));

        let no_ext = file("/media/Dr. Who", "Wheel Images");
        assert_eq!(no_ext.stem(), "Dr. Who");
        assert_eq!(no_ext.extension(), None);
    }

    #[test]
    fn test_hit_kind_ranking() {
        let ranks: Vec<u8> = HitKind::ALL.iter().map(HitKind::rank).collect();
        assert!(ranks.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(HitKind::TableName.is_canonical());
        assert!(!HitKind::Fuzzy { score: 200 }.is_canonical());
        assert!(!HitKind::Duplicate.is_canonical());
    }

    #[test]
    fn test_hit_kind_serialization() {
        let json = serde_json::to_string(&HitKind::Fuzzy { score: 150 }).unwrap();
        assert_eq!(json, r#"{"kind":"fuzzy","score":150}"#);

        let json = serde_json::to_string(&HitKind::WrongCase).unwrap();
        assert_eq!(json, r#"{"kind":"wrong_case"}"#);
    }

    #[test]
    fn test_slot_helpers() {
        let mut slot = ClassificationSlot::new(game("Medieval Madness"), "Medieval Madness");
        slot.push(HitKind::Fuzzy { score: 150 }, file("mm 1.vpx", "Tables"));
        slot.push(HitKind::Fuzzy { score: 190 }, file("mm 2.vpx", "Tables"));
        slot.push(HitKind::Duplicate, file("mm 3.vpx", "Tables"));

        let best = slot.best().unwrap();
        assert_eq!(best.kind, HitKind::Fuzzy { score: 190 });
        assert_eq!(slot.count(HitKind::Fuzzy { score: 0 }), 2);
        assert!(slot.is_smelly());
        assert!(!slot.has_canonical());

        let mut clean = ClassificationSlot::new(game("Medieval Madness"), "Medieval Madness");
        clean.push(HitKind::CorrectName, file("Medieval Madness.vpx", "Tables"));
        assert!(!clean.is_smelly());
        assert!(clean.has_correct_name());
    }
}
