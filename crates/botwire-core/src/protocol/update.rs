//! Inbound update decoding.
//!
//! On the wire an update is a record of mutually-exclusive optional
//! sub-payloads. It is folded into a tagged variant on decode, so "exactly
//! one kind populated" holds by construction rather than by convention.

use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::{BotWireError, Result};
use crate::types::{CallbackQuery, ChosenInlineResult, InlineQuery, Message};

/// One inbound event from the platform.
#[derive(Debug, Clone)]
pub struct Update {
    /// Monotonically increasing update identifier. The ingestion source uses
    /// it to advance its poll offset; consumers can use it to spot gaps.
    pub id: i64,
    /// The single populated sub-payload.
    pub kind: UpdateKind,
}

/// The sub-payload kinds an update can carry, in canonical priority order.
///
/// When a wire object carries more than one recognized key (the platform
/// promises it never does), the first in this order wins.
#[derive(Debug, Clone)]
pub enum UpdateKind {
    NewMessage(Message),
    EditedMessage(Message),
    ChannelPost(Message),
    EditedChannelPost(Message),
    InlineQuery(InlineQuery),
    ChosenInlineResult(ChosenInlineResult),
    CallbackQuery(CallbackQuery),
    /// A kind this crate does not recognize yet. A no-op for consumers;
    /// never a decode error, so the stream stays forward-compatible.
    Unknown,
}

impl Update {
    /// New-message payload, if this update carries one.
    pub fn message(&self) -> Option<&Message> {
        match &self.kind {
            UpdateKind::NewMessage(m) => Some(m),
            _ => None,
        }
    }

    /// Callback-button payload, if this update carries one.
    pub fn callback_query(&self) -> Option<&CallbackQuery> {
        match &self.kind {
            UpdateKind::CallbackQuery(q) => Some(q),
            _ => None,
        }
    }

    /// True iff this update is a new message whose text starts with the
    /// command marker.
    pub fn is_command(&self) -> bool {
        self.message().is_some_and(Message::is_command)
    }

    /// Command name of the carried message; empty when the update carries
    /// no message or the message is not a command.
    pub fn command(&self) -> &str {
        self.message().map(Message::command).unwrap_or_default()
    }

    /// Command arguments of the carried message; empty when absent.
    pub fn command_arguments(&self) -> &str {
        self.message()
            .map(Message::command_arguments)
            .unwrap_or_default()
    }
}

/// Wire shape: the record of optional sub-payload fields.
#[derive(Debug, Deserialize)]
struct RawUpdate {
    update_id: i64,
    #[serde(default)]
    message: Option<Message>,
    #[serde(default)]
    edited_message: Option<Message>,
    #[serde(default)]
    channel_post: Option<Message>,
    #[serde(default)]
    edited_channel_post: Option<Message>,
    #[serde(default)]
    inline_query: Option<InlineQuery>,
    #[serde(default)]
    chosen_inline_result: Option<ChosenInlineResult>,
    #[serde(default)]
    callback_query: Option<CallbackQuery>,
}

impl From<RawUpdate> for Update {
    fn from(raw: RawUpdate) -> Self {
        let kind = if let Some(m) = raw.message {
            UpdateKind::NewMessage(m)
        } else if let Some(m) = raw.edited_message {
            UpdateKind::EditedMessage(m)
        } else if let Some(m) = raw.channel_post {
            UpdateKind::ChannelPost(m)
        } else if let Some(m) = raw.edited_channel_post {
            UpdateKind::EditedChannelPost(m)
        } else if let Some(q) = raw.inline_query {
            UpdateKind::InlineQuery(q)
        } else if let Some(r) = raw.chosen_inline_result {
            UpdateKind::ChosenInlineResult(r)
        } else if let Some(q) = raw.callback_query {
            UpdateKind::CallbackQuery(q)
        } else {
            UpdateKind::Unknown
        };
        Update {
            id: raw.update_id,
            kind,
        }
    }
}

/// Shape used to recover the identifier from an otherwise invalid update.
#[derive(Deserialize)]
struct IdOnly {
    #[serde(default)]
    update_id: Option<i64>,
}

/// Decode one raw update object (poll-response element).
pub fn decode_update(raw: &RawValue) -> Result<Update> {
    decode_update_str(raw.get())
}

/// Decode one raw update object (webhook request body).
pub fn decode_update_slice(bytes: &[u8]) -> Result<Update> {
    decode_update_str(&String::from_utf8_lossy(bytes))
}

fn decode_update_str(text: &str) -> Result<Update> {
    match serde_json::from_str::<RawUpdate>(text) {
        Ok(raw) => Ok(raw.into()),
        Err(err) => Err(invalid(text, err)),
    }
}

/// Build an `InvalidUpdate` error, recovering the update identifier with a
/// cheap id-only reparse when the object is intact enough to carry one.
fn invalid(text: &str, err: serde_json::Error) -> BotWireError {
    let id = serde_json::from_str::<IdOnly>(text)
        .ok()
        .and_then(|v| v.update_id);
    BotWireError::InvalidUpdate {
        id,
        reason: err.to_string(),
    }
}
