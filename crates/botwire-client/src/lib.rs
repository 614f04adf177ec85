//! botwire client runtime.
//!
//! This crate wires the protocol core into a running update pipeline: the
//! bounded update stream, the long-poll and webhook ingestion sources, the
//! transport seam the HTTP collaborator plugs into, config loading, and
//! tracing setup. It is intended to be consumed by applications embedding
//! the binding and by integration tests.

pub mod config;
pub mod ingest;
pub mod logging;
pub mod stream;
pub mod transport;

pub use ingest::{feed_webhook_body, Poller};
pub use stream::{update_channel, UpdatesReceiver, UpdatesSender};
pub use transport::Transport;
