//! botwire core: transport-agnostic protocol primitives, payload records,
//! and the shared error surface.
//!
//! This crate defines the wire-level contracts of the bot platform binding:
//! the two-stage response envelope, the inbound update union, and the plain
//! payload records they carry. It intentionally carries no transport or
//! runtime dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `BotWireError`/`Result` so ingestion
//! loops do not crash on malformed platform responses.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod types;

/// Shared result type.
pub use error::{BotWireError, Result};
