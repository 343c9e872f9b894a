//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or stay separate; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `arb-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `arb-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
