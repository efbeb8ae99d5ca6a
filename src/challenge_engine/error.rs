//! Configuration error types.
//!
//! Generation and session commands never fail: invalid commands are ignored
//! and unparseable answers are judged incorrect. The only fallible boundary is
//! turning host-supplied settings into a [`SessionConfig`](super::config::SessionConfig).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The session was configured without any challenge type.
    #[error("at least one challenge type must be selected")]
    NoChallengeTypes,

    #[error("unknown mode: {0}")]
    UnknownMode(String),

    #[error("unknown challenge type: {0}")]
    UnknownChallengeType(String),

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// The JSON settings payload could not be decoded.
    #[error("invalid session config: {0}")]
    Json(#[from] serde_json::Error),
}
