//! API response envelope (JSON).
//!
//! One envelope shape wraps dozens of structurally unrelated result types,
//! so `result` is stored as `RawValue` and decoded in a second stage by the
//! caller who knows which request produced it.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::{BotWireError, Result};

/// Structured hints the platform attaches to error responses. Both fields
/// are optional and independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ResponseParameters {
    /// The group migrated to a supergroup with this chat id.
    #[serde(default)]
    pub migrate_to_chat_id: Option<i64>,
    /// Flood control: wait this many seconds before the next request.
    #[serde(default)]
    pub retry_after: Option<u64>,
}

/// Outer success/error wrapper around every API response.
///
/// Invariant: `result` is populated iff `ok`; `error_code` is populated iff
/// `!ok`. [`parse_envelope`] rejects bodies that violate this.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    /// Success flag.
    pub ok: bool,
    /// Inner result, kept as raw JSON (lazy parsing).
    #[serde(default)]
    pub result: Option<Box<RawValue>>,
    /// Platform error code.
    #[serde(default)]
    pub error_code: Option<i64>,
    /// Human-readable error description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional retry/migration hints.
    #[serde(default)]
    pub parameters: Option<ResponseParameters>,
}

/// First-stage decode: raw response body → envelope.
///
/// Only the outer wrapper is parsed; the inner `result` bytes are not
/// interpreted. Unknown fields are ignored so future platform additions do
/// not break existing callers.
pub fn parse_envelope(bytes: &[u8]) -> Result<ApiEnvelope> {
    let env: ApiEnvelope = serde_json::from_slice(bytes)
        .map_err(|e| BotWireError::MalformedEnvelope(format!("invalid envelope json: {e}")))?;
    env.validate()?;
    Ok(env)
}

impl ApiEnvelope {
    fn validate(&self) -> Result<()> {
        if self.ok && self.result.is_none() {
            return Err(BotWireError::MalformedEnvelope(
                "ok envelope without result".into(),
            ));
        }
        if !self.ok {
            if self.result.is_some() {
                return Err(BotWireError::MalformedEnvelope(
                    "error envelope with result".into(),
                ));
            }
            if self.error_code.is_none() {
                return Err(BotWireError::MalformedEnvelope(
                    "error envelope without error_code".into(),
                ));
            }
        }
        Ok(())
    }

    /// Split the envelope into its raw result span, or the platform error.
    ///
    /// On `ok=false` the error carries code, description, and — when present
    /// — the structured parameters, so the transport layer can schedule its
    /// next request per the flood-control contract.
    pub fn into_result(self) -> Result<Box<RawValue>> {
        if self.ok {
            self.result.ok_or_else(|| {
                BotWireError::MalformedEnvelope("ok envelope without result".into())
            })
        } else {
            Err(BotWireError::Api {
                code: self.error_code.unwrap_or_default(),
                description: self.description.unwrap_or_default(),
                parameters: self.parameters,
            })
        }
    }
}

/// Second-stage decode of a raw result span into the caller-chosen type
/// (a list of updates, a single message, a bool, a file, ...).
pub fn decode_result<T: DeserializeOwned>(raw: &RawValue) -> Result<T> {
    serde_json::from_str(raw.get())
        .map_err(|e| BotWireError::MalformedEnvelope(format!("invalid result payload: {e}")))
}
