//! Error types for gamri-core.
//!
//! Loading and classifying never fail; only taxonomy definitions and category
//! lookups can be rejected. Storage and HTTP errors live in their own crates
//! and converge in `gamri-cli`.

use thiserror::Error;

/// A taxonomy definition that cannot be used for classification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxonomyError {
    /// The TOML text could not be parsed into a taxonomy.
    #[error("Taxonomy parse error: {0}")]
    Parse(String),

    /// No fields are selected for concatenation.
    #[error("Taxonomy '{version}' selects no fields")]
    NoFields { version: String },

    /// A group or the default has an empty label.
    #[error("Taxonomy '{version}' has an empty label")]
    EmptyLabel { version: String },

    /// Two groups (or a group and the default) share a label.
    #[error("Taxonomy '{version}' has duplicate label '{label}'")]
    DuplicateLabel { version: String, label: String },

    /// A group carries no keywords and could never match.
    #[error("Taxonomy '{version}' group '{label}' has no keywords")]
    NoKeywords { version: String, label: String },

    /// A keyword is empty after whitespace removal and would match everything.
    #[error("Taxonomy '{version}' group '{label}' has an empty keyword")]
    EmptyKeyword { version: String, label: String },
}

/// Errors raised by core lookups.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A category label is not part of the active taxonomy.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// No case carries the given selection label.
    #[error("No case matches selection: {0}")]
    CaseNotFound(String),

    /// A taxonomy definition was rejected.
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),
}
