//! Inline-query and callback-button payloads.

use serde::{Deserialize, Serialize};

use crate::types::media::Location;
use crate::types::message::Message;
use crate::types::User;

/// An incoming inline query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineQuery {
    pub id: String,
    pub from: User,
    /// Sender location, only for bots that request it.
    #[serde(default)]
    pub location: Option<Location>,
    /// Text of the query.
    pub query: String,
    /// Offset of the results to be returned, controlled by the bot.
    pub offset: String,
}

/// An inline-query result the user chose and sent to their chat partner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChosenInlineResult {
    pub result_id: String,
    pub from: User,
    #[serde(default)]
    pub location: Option<Location>,
    /// Identifier of the sent inline message, when an inline keyboard was
    /// attached; usable for later edits.
    #[serde(default)]
    pub inline_message_id: Option<String>,
    pub query: String,
}

/// Data sent when a callback button on an inline keyboard is pressed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    /// The message carrying the button, if it originated from the bot.
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub inline_message_id: Option<String>,
    #[serde(default)]
    pub chat_instance: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub game_short_name: Option<String>,
}
