//! Long-poll ingestion loop.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, value::RawValue};
use tokio::time::sleep;
use tracing::{info, warn};

use botwire_core::error::{BotWireError, Result};
use botwire_core::protocol::envelope::{decode_result, parse_envelope};
use botwire_core::protocol::update::decode_update;

use crate::config::PollSection;
use crate::stream::UpdatesSender;
use crate::transport::Transport;

/// Wait after a failed poll when the platform gave no flood-control hint.
const ERROR_BACKOFF: Duration = Duration::from_secs(3);

/// Long-poll ingestion source: fetches update batches through the
/// transport, decodes them, and feeds the stream in arrival order.
pub struct Poller {
    transport: Arc<dyn Transport>,
    poll: PollSection,
    offset: i64,
}

impl Poller {
    pub fn new(transport: Arc<dyn Transport>, poll: PollSection) -> Self {
        Self {
            transport,
            poll,
            offset: 0,
        }
    }

    /// Run until the stream closes underneath us (every consumer gone).
    ///
    /// One invalid record is logged and skipped, advancing past its
    /// identifier when it was recoverable; the rest of the batch still
    /// flows. Platform flood-control hints are honored verbatim: the next
    /// poll happens no sooner than the hinted delay.
    pub async fn run(mut self, updates: UpdatesSender) -> Result<()> {
        info!(
            timeout_s = self.poll.timeout_s,
            limit = self.poll.limit,
            "poller starting"
        );
        loop {
            let batch = match self.fetch_batch().await {
                Ok(batch) => batch,
                Err(err) => {
                    let wait = err.retry_after().unwrap_or(ERROR_BACKOFF);
                    warn!(error = %err, wait_s = wait.as_secs(), "poll failed");
                    sleep(wait).await;
                    continue;
                }
            };
            for raw in &batch {
                match decode_update(raw) {
                    Ok(update) => {
                        self.offset = self.offset.max(update.id + 1);
                        if updates.send(update).await.is_err() {
                            info!("update stream closed, poller stopping");
                            return Ok(());
                        }
                    }
                    Err(err) => {
                        // Identifiers are monotonic: skipping one record
                        // keeps the rest of the batch in order.
                        let id = match &err {
                            BotWireError::InvalidUpdate { id, .. } => *id,
                            _ => None,
                        };
                        warn!(update_id = ?id, error = %err, "skipping invalid update");
                        if let Some(id) = id {
                            self.offset = self.offset.max(id + 1);
                        }
                    }
                }
            }
        }
    }

    /// One getUpdates round trip: transport call, first-stage envelope
    /// decode, second-stage decode into raw update objects.
    async fn fetch_batch(&self) -> Result<Vec<Box<RawValue>>> {
        let mut params = json!({
            "offset": self.offset,
            "limit": self.poll.limit,
            "timeout": self.poll.timeout_s,
        });
        if !self.poll.allowed_updates.is_empty() {
            params["allowed_updates"] = json!(self.poll.allowed_updates);
        }
        let body = self.transport.call("getUpdates", params).await?;
        let raw = parse_envelope(&body)?.into_result()?;
        decode_result(&raw)
    }
}
