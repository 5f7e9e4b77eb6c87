//! Tiered similarity scoring between two normalized names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fuzzy::config::MatchConfig;
use crate::fuzzy::normalizer::{parse_with, NameDetails};

/// Score reported when no tier applies.
pub const NO_MATCH_SCORE: i32 = -10_000;

/// Which comparison produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Whitespace-free keys are equal.
    Exact,
    /// One title starts with the other.
    Prefix,
    /// One title contains the other.
    Substring,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchTier::Exact => write!(f, "exact"),
            MatchTier::Prefix => write!(f, "prefix"),
            MatchTier::Substring => write!(f, "substring"),
        }
    }
}

/// Outcome of comparing two names.
///
/// `score` is only meaningful relative to other scores produced with the same
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub success: bool,
    pub score: i32,
    pub tier: Option<MatchTier>,
}

impl MatchResult {
    pub fn no_match() -> Self {
        Self {
            success: false,
            score: NO_MATCH_SCORE,
            tier: None,
        }
    }
}

/// Normalize `raw` (a name or a file path) and compare it against `details`.
pub fn match_name(raw: &str, details: &NameDetails, config: &MatchConfig) -> MatchResult {
    let parsed = parse_with(raw, config);
    match_details(&parsed, details, config)
}

/// Compare two already-normalized names.
pub fn match_details(a: &NameDetails, b: &NameDetails, config: &MatchConfig) -> MatchResult {
    if a.is_empty() || b.is_empty() {
        return MatchResult::no_match();
    }

    let Some((tier, floor_met)) = select_tier(a, b, config) else {
        return MatchResult::no_match();
    };

    let base = match (tier, floor_met) {
        (MatchTier::Exact, _) => config.exact_base,
        (_, true) => config.partial_base,
        (_, false) => config.short_partial_base,
    };

    let mut score = base + config.year.adjustment(a.year, b.year);
    if manufacturers_differ(a, b) {
        score -= config.manufacturer_mismatch_penalty;
    }

    MatchResult {
        success: floor_met && score >= config.success_threshold,
        score,
        tier: Some(tier),
    }
}

/// First applicable tier, plus whether its length floor is satisfied.
fn select_tier(a: &NameDetails, b: &NameDetails, config: &MatchConfig) -> Option<(MatchTier, bool)> {
    if a.title_key == b.title_key {
        return Some((MatchTier::Exact, true));
    }

    let (shorter, longer) = if a.title_len() <= b.title_len() {
        (a, b)
    } else {
        (b, a)
    };
    let len = shorter.title_len();

    if longer.title.starts_with(&shorter.title) {
        return Some((MatchTier::Prefix, len >= config.prefix_min_len));
    }
    if longer.title.contains(&shorter.title) {
        return Some((MatchTier::Substring, len >= config.substring_min_len));
    }

    None
}

/// Both sides name a manufacturer and neither is an abbreviation of the other.
fn manufacturers_differ(a: &NameDetails, b: &NameDetails) -> bool {
    match (&a.manufacturer, &b.manufacturer) {
        (Some(x), Some(y)) => {
            let x: String = x.chars().filter(|c| !c.is_whitespace()).collect();
            let y: String = y.chars().filter(|c| !c.is_whitespace()).collect();
            !x.starts_with(&y) && !y.starts_with(&x)
        }
        _ => false,
    }
}
