//! Ingestion sources feeding the update stream.
//!
//! Both delivery modes end the same way: one JSON object → one `Update` →
//! one `send`. A record that fails to decode is reported to the ingestion
//! source and never reaches the stream.

pub mod poller;
pub mod webhook;

pub use poller::Poller;
pub use webhook::feed_webhook_body;
