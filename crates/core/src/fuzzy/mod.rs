//! Name normalization and similarity scoring.
//!
//! [`normalizer`] turns raw names and file paths into [`NameDetails`];
//! [`scorer`] compares two of them and returns a [`MatchResult`].

pub mod config;
pub mod normalizer;
pub mod scorer;

pub use config::{MatchConfig, YearScores};
pub use normalizer::{file_name, parse, parse_with, split_extension, NameDetails};
pub use scorer::{match_details, match_name, MatchResult, MatchTier, NO_MATCH_SCORE};
