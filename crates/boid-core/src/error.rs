//! Base error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::BoidId;

/// The top-level error type for `boid-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("boid {0} not found")]
    BoidNotFound(BoidId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for the `boid-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
