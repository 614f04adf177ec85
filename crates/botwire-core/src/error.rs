//! Shared error type across botwire crates.

use std::time::Duration;

use thiserror::Error;

use crate::protocol::envelope::ResponseParameters;

/// Shared result type.
pub type Result<T> = std::result::Result<T, BotWireError>;

/// Unified error type used by the protocol core and the client runtime.
#[derive(Debug, Error)]
pub enum BotWireError {
    /// Outer response body is not a well-formed envelope, or violates the
    /// ok/result invariant. Fatal for that single request only.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// Well-formed envelope reporting a platform-side failure. Carries the
    /// flood-control / migration hints verbatim for the transport layer.
    #[error("api error {code}: {description}")]
    Api {
        code: i64,
        description: String,
        parameters: Option<ResponseParameters>,
    },

    /// One update object failed to decode. The ingestion source skips it
    /// and continues the batch.
    #[error("invalid update: {reason}")]
    InvalidUpdate { id: Option<i64>, reason: String },

    /// Send on a stream that can no longer deliver.
    #[error("update stream closed")]
    StreamClosed,

    /// Transport collaborator failure surfaced by the ingestion loop.
    #[error("transport: {0}")]
    Transport(String),

    /// Config load or validation failure.
    #[error("config: {0}")]
    Config(String),

    #[error("internal: {0}")]
    Internal(String),
}

impl BotWireError {
    /// Flood-control hint attached to an `Api` error: wait at least this
    /// long before the next request.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            BotWireError::Api {
                parameters: Some(p),
                ..
            } => p.retry_after.map(Duration::from_secs),
            _ => None,
        }
    }

    /// Migration hint attached to an `Api` error: the chat moved to this id.
    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        match self {
            BotWireError::Api {
                parameters: Some(p),
                ..
            } => p.migrate_to_chat_id,
            _ => None,
        }
    }
}
