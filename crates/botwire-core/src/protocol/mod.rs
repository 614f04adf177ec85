//! Protocol modules (response envelope + update union).
//!
//! Decoding is two-stage throughout:
//! - The envelope parser separates the outer success/error wrapper from the
//!   untouched inner payload bytes (`RawValue`).
//! - The caller decodes that payload into the type the originating request
//!   implies; update objects go through the union decoder one at a time.
//!
//! All parsers are panic-free: malformed input is reported as `BotWireError`
//! so a single bad record never aborts an ingestion batch.

pub mod envelope;
pub mod update;
