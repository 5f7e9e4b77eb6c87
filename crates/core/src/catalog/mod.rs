//! Canonical game catalogue.
//!
//! Games are the entities content files are reconciled against. Each game is
//! normalized once per pass into a [`GameDetails`] holding the parsed name and
//! description.

mod types;

pub use types::*;

use crate::fuzzy::{match_details, parse_with, MatchConfig, MatchResult, NameDetails};

/// Pre-normalized name and description of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDetails {
    pub name: NameDetails,
    pub description: Option<NameDetails>,
}

impl GameDetails {
    /// Normalize a game. The explicit manufacturer and year fields fill in what
    /// the name or description parenthetical did not provide.
    pub fn from_game(game: &Game, config: &MatchConfig) -> Self {
        let manufacturer = game.manufacturer.as_deref();
        let name = parse_with(&game.name, config).fill_missing(manufacturer, game.year);
        let description = game
            .description
            .as_deref()
            .map(|d| parse_with(d, config).fill_missing(manufacturer, game.year))
            .filter(|d| !d.is_empty());

        Self { name, description }
    }

    /// Best of the name and description scores against `file`.
    ///
    /// A success always beats a failure; on equal standing the name wins.
    pub fn score(&self, file: &NameDetails, config: &MatchConfig) -> MatchResult {
        let by_name = match_details(file, &self.name, config);
        let Some(description) = &self.description else {
            return by_name;
        };

        let by_description = match_details(file, description, config);
        let better = (by_description.success, by_description.score) > (by_name.success, by_name.score);
        if better {
            by_description
        } else {
            by_name
        }
    }
}

/// Whether a game is an original creation rather than a real machine.
pub fn is_original(game: &Game, config: &CatalogConfig) -> bool {
    let by_manufacturer = game.manufacturer.as_deref().is_some_and(|manufacturer| {
        let manufacturer = manufacturer.trim().to_lowercase();
        config
            .original_manufacturers
            .iter()
            .any(|prefix| manufacturer.starts_with(&prefix.to_lowercase()))
    });

    by_manufacturer
        || config
            .original_names
            .iter()
            .any(|name| name.eq_ignore_ascii_case(game.name.trim()))
}
