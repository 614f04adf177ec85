//! Payload records carried by updates and API results.
//!
//! Plain immutable value types: every field the platform marks optional is
//! an `Option`, unknown fields are ignored, and relationships are acyclic
//! (reply chains are truncated at depth 1 during decode, see
//! [`message::Message`]).

pub mod media;
pub mod message;
pub mod query;

pub use media::{
    Audio, Contact, Document, File, Location, PhotoSize, Sticker, UserProfilePhotos, Venue, Video,
    Voice,
};
pub use message::{Message, MessageEntity};
pub use query::{CallbackQuery, ChosenInlineResult, InlineQuery};

use serde::{Deserialize, Serialize};

/// A user or bot on the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl User {
    /// Display name: the username, falling back to first/last name.
    pub fn display_name(&self) -> String {
        if let Some(username) = self.username.as_deref() {
            if !username.is_empty() {
                return username.to_string();
            }
        }
        match self.last_name.as_deref() {
            Some(last) if !last.is_empty() => format!("{} {last}", self.first_name),
            _ => self.first_name.clone(),
        }
    }
}

/// A conversation: private, group, supergroup, or channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    /// Chat type discriminator (field name is `type` in JSON).
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub all_members_are_administrators: Option<bool>,
}

impl Chat {
    pub fn is_private(&self) -> bool {
        self.kind == "private"
    }

    pub fn is_group(&self) -> bool {
        self.kind == "group"
    }

    pub fn is_supergroup(&self) -> bool {
        self.kind == "supergroup"
    }

    pub fn is_channel(&self) -> bool {
        self.kind == "channel"
    }
}

/// Membership info for one user in a chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMember {
    pub user: User,
    pub status: String,
}

impl ChatMember {
    pub fn is_creator(&self) -> bool {
        self.status == "creator"
    }

    pub fn is_administrator(&self) -> bool {
        self.status == "administrator"
    }

    pub fn is_member(&self) -> bool {
        self.status == "member"
    }

    pub fn has_left(&self) -> bool {
        self.status == "left"
    }

    pub fn was_kicked(&self) -> bool {
        self.status == "kicked"
    }
}

/// Currently configured webhook, as reported by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookInfo {
    pub url: String,
    #[serde(default)]
    pub has_custom_certificate: bool,
    #[serde(default)]
    pub pending_update_count: i64,
    #[serde(default)]
    pub last_error_date: Option<i64>,
    #[serde(default)]
    pub last_error_message: Option<String>,
}

impl WebhookInfo {
    /// True if a webhook is currently set.
    pub fn is_set(&self) -> bool {
        !self.url.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn user(first: &str, last: Option<&str>, username: Option<&str>) -> User {
        User {
            id: 7,
            first_name: first.to_string(),
            last_name: last.map(str::to_string),
            username: username.map(str::to_string),
        }
    }

    #[test]
    fn display_name_prefers_username() {
        assert_eq!(user("Ada", Some("L"), Some("ada")).display_name(), "ada");
    }

    #[test]
    fn display_name_falls_back_to_full_name() {
        assert_eq!(user("Ada", Some("Lovelace"), None).display_name(), "Ada Lovelace");
        assert_eq!(user("Ada", None, None).display_name(), "Ada");
    }

    #[test]
    fn chat_kind_predicates() {
        let chat: Chat = serde_json::from_str(r#"{"id":1,"type":"supergroup"}"#).unwrap();
        assert!(chat.is_supergroup());
        assert!(!chat.is_private() && !chat.is_group() && !chat.is_channel());
    }

    #[test]
    fn member_status_predicates() {
        let m: ChatMember =
            serde_json::from_str(r#"{"user":{"id":1,"first_name":"A"},"status":"kicked"}"#)
                .unwrap();
        assert!(m.was_kicked());
        assert!(!m.is_member());
    }

    #[test]
    fn webhook_is_set() {
        let info: WebhookInfo = serde_json::from_str(r#"{"url":""}"#).unwrap();
        assert!(!info.is_set());
        let info: WebhookInfo =
            serde_json::from_str(r#"{"url":"https://example.org/hook"}"#).unwrap();
        assert!(info.is_set());
    }
}
