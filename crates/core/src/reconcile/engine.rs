//! The per-file matching cascade.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use super::config::ContentTypeConfig;
use super::error::ReconcileError;
use super::types::{CandidateFile, ClassificationSlot, ContentCategory, Hit, HitKind, ReconcileOutput};
use crate::catalog::{Game, GameDetails};
use crate::config::Config;
use crate::fuzzy::parse_with;

/// Reconciles content files against a fixed catalogue.
///
/// Games are normalized once in [`Reconciler::new`] and reused for every
/// content type.
pub struct Reconciler<'a> {
    games: &'a [Game],
    details: Vec<GameDetails>,
    config: &'a Config,
}

impl<'a> Reconciler<'a> {
    /// Fails if two games share a name (ignoring case).
    pub fn new(games: &'a [Game], config: &'a Config) -> Result<Self, ReconcileError> {
        let mut seen = HashSet::new();
        for game in games {
            if !seen.insert(game.name.to_lowercase()) {
                warn!("Duplicate game in catalogue: {}", game.name);
                return Err(ReconcileError::DuplicateGame(game.name.clone()));
            }
        }

        let details = games
            .iter()
            .map(|game| GameDetails::from_game(game, &config.matching))
            .collect();

        Ok(Self {
            games,
            details,
            config,
        })
    }

    /// Classify `files` for one content type.
    ///
    /// Files are processed by extension preference, then kindred files, then
    /// the rest; input order breaks ties within each group and decides
    /// duplicates and fuzzy ties. Every file ends up in exactly one slot or in
    /// `unmatched`.
    pub fn reconcile(
        &self,
        content_type: &ContentTypeConfig,
        files: &[CandidateFile],
    ) -> Result<ReconcileOutput, ReconcileError> {
        if let Some(file) = files
            .iter()
            .find(|f| !f.content_type.eq_ignore_ascii_case(&content_type.name))
        {
            warn!(
                "File {} is tagged '{}' while reconciling '{}'",
                file.path, file.content_type, content_type.name
            );
            return Err(ReconcileError::ContentTypeMismatch {
                path: file.path.clone(),
                expected: content_type.name.clone(),
                actual: file.content_type.clone(),
            });
        }

        let category = content_type.category;
        let content_names: Vec<&str> = self.games.iter().map(|g| g.content_name(category)).collect();
        let lowercase_names: Vec<String> = content_names.iter().map(|n| n.to_lowercase()).collect();

        let mut slots: Vec<ClassificationSlot> = self
            .games
            .iter()
            .zip(&content_names)
            .map(|(game, name)| ClassificationSlot::new(game.clone(), *name))
            .collect();
        let mut unmatched = Vec::new();

        let mut ordered: Vec<&CandidateFile> = files.iter().collect();
        ordered.sort_by_key(|f| content_type.file_order(f.extension().as_deref()));

        for file in ordered {
            let extension = file.extension();
            if !content_type.supports(extension.as_deref()) {
                debug!("{}: unsupported extension", file.path);
                unmatched.push(Hit::new(HitKind::Unsupported, file.clone()));
                continue;
            }
            let kindred = content_type.is_kindred(extension.as_deref());

            let stem = file.stem();
            let lowercase_stem = stem.to_lowercase();

            let assignment = if let Some(idx) = content_names.iter().position(|name| *name == stem) {
                let kind = if slots[idx].has_correct_name() {
                    HitKind::Duplicate
                } else {
                    HitKind::CorrectName
                };
                Some((idx, kind))
            } else if let Some(idx) = lowercase_names.iter().position(|name| *name == lowercase_stem) {
                Some((idx, HitKind::WrongCase))
            } else if let Some(idx) = self.table_name_position(category, stem) {
                Some((idx, HitKind::TableName))
            } else {
                self.best_fuzzy(file)
                    .map(|(idx, score)| (idx, HitKind::Fuzzy { score }))
            };
            let assignment = match assignment {
                Some((idx, _)) if kindred => Some((idx, HitKind::Duplicate)),
                other => other,
            };

            match assignment {
                Some((idx, kind)) => {
                    debug!("{}: {} -> {}", file.path, kind, self.games[idx].name);
                    slots[idx].push(kind, file.clone());
                }
                None => {
                    debug!("{}: no matching game", file.path);
                    unmatched.push(Hit::new(HitKind::Unknown, file.clone()));
                }
            }
        }

        for slot in slots.iter_mut().filter(|slot| !slot.has_canonical()) {
            slot.hits.push(Hit::missing());
        }

        let output = ReconcileOutput {
            content_type: content_type.name.clone(),
            category,
            slots,
            unmatched,
        };

        info!(
            "Reconciled {}: {} files, {} unmatched, {}/{} games missing",
            output.content_type,
            files.len(),
            output.unmatched.len(),
            output.missing_count(),
            self.games.len()
        );

        Ok(output)
    }

    /// Reconcile every configured content type that has files, in
    /// configuration order.
    pub fn reconcile_all(&self, files: &[CandidateFile]) -> Result<Vec<ReconcileOutput>, ReconcileError> {
        if let Some(file) = files
            .iter()
            .find(|f| self.config.content_type(&f.content_type).is_none())
        {
            warn!("File {} has unknown content type '{}'", file.path, file.content_type);
            return Err(ReconcileError::UnknownContentType(file.content_type.clone()));
        }

        let mut outputs = Vec::new();
        for content_type in &self.config.content_types {
            let group: Vec<CandidateFile> = files
                .iter()
                .filter(|f| f.content_type.eq_ignore_ascii_case(&content_type.name))
                .cloned()
                .collect();
            if group.is_empty() {
                continue;
            }
            outputs.push(self.reconcile(content_type, &group)?);
        }

        Ok(outputs)
    }

    /// Media files named after the table rather than the description.
    fn table_name_position(&self, category: ContentCategory, stem: &str) -> Option<usize> {
        match category {
            ContentCategory::Media => self.games.iter().position(|game| game.name == stem),
            ContentCategory::Table => None,
        }
    }

    /// Highest scoring successful fuzzy match; the first game wins ties.
    fn best_fuzzy(&self, file: &CandidateFile) -> Option<(usize, i32)> {
        let parsed = parse_with(&file.path, &self.config.matching);
        if parsed.is_empty() {
            return None;
        }

        let mut best: Option<(usize, i32)> = None;
        for (idx, details) in self.details.iter().enumerate() {
            let result = details.score(&parsed, &self.config.matching);
            if !result.success {
                continue;
            }
            if best.map_or(true, |(_, score)| result.score > score) {
                best = Some((idx, result.score));
            }
        }
        best
    }
}

/// Reconcile files of a single content type, looked up by name.
pub fn reconcile(
    games: &[Game],
    files: &[CandidateFile],
    content_type: &str,
    config: &Config,
) -> Result<ReconcileOutput, ReconcileError> {
    let Some(content_type) = config.content_type(content_type) else {
        warn!("Unknown content type '{}'", content_type);
        return Err(ReconcileError::UnknownContentType(content_type.to_string()));
    };
    Reconciler::new(games, config)?.reconcile(content_type, files)
}

/// Reconcile files of all content types at once.
pub fn reconcile_all(
    games: &[Game],
    files: &[CandidateFile],
    config: &Config,
) -> Result<Vec<ReconcileOutput>, ReconcileError> {
    Reconciler::new(games, config)?.reconcile_all(files)
}
