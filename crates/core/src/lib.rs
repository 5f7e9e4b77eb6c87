pub mod catalog;
pub mod config;
pub mod fuzzy;
pub mod importer;
pub mod reconcile;
pub mod statistics;
pub mod testing;

pub use catalog::{is_original, CatalogConfig, Game, GameDetails};
pub use config::{load_config, load_config_from_str, validate_config, Config, ConfigError};
pub use fuzzy::{match_details, match_name, parse, parse_with, MatchConfig, MatchResult, MatchTier, NameDetails};
pub use importer::{match_feed, FeedMatch, FeedMatchReport, FeedMatchStatistics};
pub use reconcile::{
    reconcile, reconcile_all, CandidateFile, ClassificationSlot, ContentCategory, ContentTypeConfig, Hit,
    HitKind, ReconcileError, ReconcileOutput, Reconciler,
};
pub use statistics::{format_size, Statistics};
