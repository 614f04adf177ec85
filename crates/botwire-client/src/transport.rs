//! Transport seam: the HTTP collaborator lives behind this trait.

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

use botwire_core::error::Result;

/// Executes one API method call and returns the raw response body.
///
/// Implementations own everything HTTP: request building, multipart
/// uploads, connection reuse, wire-level retries. The core only ever sees
/// the returned bytes; it parses them with
/// [`botwire_core::protocol::envelope::parse_envelope`]. Failures surface
/// as [`botwire_core::BotWireError::Transport`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(&self, method: &str, params: Value) -> Result<Bytes>;
}
