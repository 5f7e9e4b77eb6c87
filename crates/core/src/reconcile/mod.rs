//! Reconciliation of content files against the game catalogue.
//!
//! Each file of a content type runs through a cascade, stopping at the first
//! tier that claims it:
//!
//! 1. exact content name ([`HitKind::CorrectName`], or [`HitKind::Duplicate`]
//!    if the slot already has one)
//! 2. content name ignoring case ([`HitKind::WrongCase`])
//! 3. media only: the table name ([`HitKind::TableName`])
//! 4. best successful fuzzy score ([`HitKind::Fuzzy`])
//!
//! Content files run first, ordered by extension preference, so the preferred
//! format takes the correct name. Kindred files (scripts, read-mes) run last
//! and are recorded as [`HitKind::Duplicate`] in whatever slot they match.
//!
//! Files no tier claims are returned as [`HitKind::Unknown`], or
//! [`HitKind::Unsupported`] when the content type does not list their
//! extension. Slots without a canonical hit are marked [`HitKind::Missing`].

mod config;
mod engine;
mod error;
mod types;

pub use config::{default_content_types, normalize_extension, ContentTypeConfig};
pub use engine::{reconcile, reconcile_all, Reconciler};
pub use error::ReconcileError;
pub use types::*;
