//! Per content type and per hit kind counts of a reconciliation pass.

use std::fmt;

use serde::Serialize;

use crate::reconcile::{HitKind, ReconcileOutput};

/// Column width of content type names in the text report.
const KEY_WIDTH: usize = 28;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindStatistic {
    /// [`HitKind::description`] of the counted kind.
    pub kind: &'static str,
    /// Number of hits of this kind.
    pub hits: usize,
    /// Number of distinct games with at least one such hit. Always zero for
    /// unmatched kinds.
    pub games: usize,
    /// Total size of the files behind the hits.
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentStatistics {
    pub content_type: String,
    pub files: usize,
    pub matched_files: usize,
    pub unmatched_files: usize,
    /// One entry per hit kind, in rank order.
    pub kinds: Vec<KindStatistic>,
}

impl ContentStatistics {
    pub fn kind(&self, kind: HitKind) -> Option<&KindStatistic> {
        self.kinds.iter().find(|k| k.kind == kind.description())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_games: usize,
    pub content: Vec<ContentStatistics>,
}

impl Statistics {
    pub fn from_outputs(total_games: usize, outputs: &[ReconcileOutput]) -> Self {
        let content = outputs.iter().map(content_statistics).collect();
        Self {
            total_games,
            content,
        }
    }

    pub fn content_type(&self, name: &str) -> Option<&ContentStatistics> {
        self.content.iter().find(|c| c.content_type == name)
    }
}

fn content_statistics(output: &ReconcileOutput) -> ContentStatistics {
    let kinds = HitKind::ALL
        .iter()
        .map(|kind| {
            let mut stat = KindStatistic {
                kind: kind.description(),
                hits: 0,
                games: 0,
                bytes: 0,
            };

            for slot in &output.slots {
                let mut found = false;
                for hit in slot.hits.iter().filter(|h| h.kind.same_kind(kind)) {
                    stat.hits += 1;
                    stat.bytes += hit.size();
                    found = true;
                }
                if found {
                    stat.games += 1;
                }
            }
            for hit in output.unmatched.iter().filter(|h| h.kind.same_kind(kind)) {
                stat.hits += 1;
                stat.bytes += hit.size();
            }

            stat
        })
        .collect();

    let unmatched_files = output.unmatched.len();
    let files = output.file_count();

    ContentStatistics {
        content_type: output.content_type.clone(),
        files,
        matched_files: files - unmatched_files,
        unmatched_files,
        kinds,
    }
}

fn label(kind: &str) -> String {
    kind.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Criteria statistics for each content type")?;

        for kind in HitKind::ALL {
            let unmatched = matches!(kind, HitKind::Unknown | HitKind::Unsupported);
            writeln!(f)?;
            writeln!(f, "{}", label(kind.description()))?;

            for content in &self.content {
                let Some(stat) = content.kind(kind) else {
                    continue;
                };
                let discovered = if unmatched {
                    format!("discovered {}", stat.hits)
                } else {
                    format!("discovered {}/{}", stat.games, self.total_games)
                };
                writeln!(
                    f,
                    "- {:<width$}{}: {} ({})",
                    content.content_type,
                    discovered,
                    stat.hits,
                    format_size(stat.bytes),
                    width = KEY_WIDTH
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Total games: {}", self.total_games)?;
        for content in &self.content {
            writeln!(
                f,
                "- {:<width$}{} files, {} matched, {} unmatched",
                content.content_type,
                content.files,
                content.matched_files,
                content.unmatched_files,
                width = KEY_WIDTH
            )?;
        }
        Ok(())
    }
}

/// Human readable size with binary units and at most one decimal,
/// e.g. `0 B`, `512 B`, `1.5 KB`, `2 MB`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.1}", value);
    let rounded = rounded.strip_suffix(".0").unwrap_or(&rounded);
    format!("{} {}", rounded, UNITS[unit])
}
