//! Error types for the client core
//!
//! All public operations either return `Result<T>` from this module or an
//! infallible outcome struct; transport errors never escape the core as raw
//! `reqwest` errors.

use thiserror::Error;

use crate::gateway::GatewayError;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors surfaced by the core's public operations
#[derive(Debug, Error)]
pub enum CoreError {
    /// No user id available; surfaced immediately, no retry
    #[error("Not authenticated: no user id available")]
    NotAuthenticated,

    /// A precondition failed before any I/O was issued
    #[error("Required input missing before any request: {0}")]
    DataUnavailable(&'static str),

    /// One fanned-out read failed during a view build; the whole view fails
    #[error("Failed to load {resource}: {message}")]
    AggregationFailed {
        resource: &'static str,
        message: String,
    },

    /// The gateway raised outside of a view build
    #[error("Transport error: {0}")]
    Transport(#[from] GatewayError),
}
