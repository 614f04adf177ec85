//! Webhook half of ingestion.
//!
//! The HTTP server receiving the platform's pushes is an external
//! collaborator; it hands this module one raw request body per update.

use botwire_core::error::Result;
use botwire_core::protocol::update::decode_update_slice;

use crate::stream::UpdatesSender;

/// Decode one webhook request body and queue the update.
///
/// Decode failures return to the caller (the webhook server), never cross
/// the stream; consumers only ever observe well-formed updates.
pub async fn feed_webhook_body(body: &[u8], updates: &UpdatesSender) -> Result<()> {
    let update = decode_update_slice(body)?;
    updates.send(update).await
}
