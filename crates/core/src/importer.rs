//! Matching an external game feed against the local catalogue.
//!
//! Unlike content reconciliation only the fuzzy tier is used: feed names
//! rarely match local names verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{is_original, Game, GameDetails};
use crate::config::Config;
use crate::fuzzy::parse_with;

/// Best local match for one feed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedMatch {
    /// Index into the feed.
    pub feed_index: usize,
    /// Index into the local catalogue.
    pub local_index: usize,
    pub score: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedMatchStatistics {
    pub matched_total: usize,
    pub matched_manufactured: usize,
    pub matched_original: usize,
    pub unmatched_total: usize,
    pub unmatched_manufactured: usize,
    pub unmatched_original: usize,
}

impl FeedMatchStatistics {
    fn record(&mut self, matched: bool, original: bool) {
        match (matched, original) {
            (true, false) => self.matched_manufactured += 1,
            (true, true) => self.matched_original += 1,
            (false, false) => self.unmatched_manufactured += 1,
            (false, true) => self.unmatched_original += 1,
        }
        if matched {
            self.matched_total += 1;
        } else {
            self.unmatched_total += 1;
        }
    }
}

impl fmt::Display for FeedMatchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matched Total:            {}", self.matched_total)?;
        writeln!(f, "Matched (manufactured):   {}", self.matched_manufactured)?;
        writeln!(f, "Matched (originals):      {}", self.matched_original)?;
        writeln!(f, "Unmatched Total:          {}", self.unmatched_total)?;
        writeln!(f, "Unmatched (manufactured): {}", self.unmatched_manufactured)?;
        write!(f, "Unmatched (originals):    {}", self.unmatched_original)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedMatchReport {
    /// One entry per matched feed game, in feed order.
    pub matches: Vec<FeedMatch>,
    pub statistics: FeedMatchStatistics,
}

impl FeedMatchReport {
    /// Match for the feed game at `feed_index`, if any.
    pub fn get(&self, feed_index: usize) -> Option<&FeedMatch> {
        self.matches.iter().find(|m| m.feed_index == feed_index)
    }
}

/// Match every feed game to its best local game.
///
/// The feed's manufacturer and year fields take precedence over whatever the
/// feed name's parenthetical says. Ties go to the first local game.
pub fn match_feed(local: &[Game], feed: &[Game], config: &Config) -> FeedMatchReport {
    let details: Vec<GameDetails> = local
        .iter()
        .map(|game| GameDetails::from_game(game, &config.matching))
        .collect();

    let mut report = FeedMatchReport::default();

    for (feed_index, feed_game) in feed.iter().enumerate() {
        let mut name = parse_with(&feed_game.name, &config.matching);
        if let Some(manufacturer) = &feed_game.manufacturer {
            name.manufacturer = Some(manufacturer.trim().to_lowercase()).filter(|m| !m.is_empty());
        }
        if feed_game.year.is_some() {
            name.year = feed_game.year;
        }

        let mut best: Option<(usize, i32)> = None;
        if !name.is_empty() {
            for (local_index, local_details) in details.iter().enumerate() {
                let result = local_details.score(&name, &config.matching);
                if result.success && best.map_or(true, |(_, score)| result.score > score) {
                    best = Some((local_index, result.score));
                }
            }
        }

        let original = is_original(feed_game, &config.catalog);
        report.statistics.record(best.is_some(), original);

        match best {
            Some((local_index, score)) => {
                debug!(
                    "Feed game {} matched {} ({})",
                    feed_game.name, local[local_index].name, score
                );
                report.matches.push(FeedMatch {
                    feed_index,
                    local_index,
                    score,
                });
            }
            None => debug!("Feed game {} has no local match", feed_game.name),
        }
    }

    info!(
        "Matched {}/{} feed games against {} local games",
        report.statistics.matched_total,
        feed.len(),
        local.len()
    );

    report
}
