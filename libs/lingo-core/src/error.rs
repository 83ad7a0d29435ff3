//! Error types for lingo-core.
//!
//! Answer evaluation itself never fails; these cover the data the scoring
//! core is configured with and the stores it hands results to.

use thiserror::Error;

/// Errors raised while building or loading a spelling-variant table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VariantTableError {
    #[error("asymmetric variant entry: {word} -> {variant} has no reverse mapping")]
    Asymmetric { word: String, variant: String },

    #[error("invalid variant data: {0}")]
    InvalidData(String),
}

/// Errors raised by key-value stores and the progress log built on them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("corrupt value under key {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised by question content providers.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("question bank unavailable: {0}")]
    Unavailable(String),

    #[error("invalid question bank: {0}")]
    Invalid(String),
}

/// Any error produced by lingo-core.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Variants(#[from] VariantTableError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Content(#[from] ContentError),
}
