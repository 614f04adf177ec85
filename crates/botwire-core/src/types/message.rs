//! Message record, text entities, and command accessors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use crate::types::media::{
    Audio, Contact, Document, Location, PhotoSize, Sticker, Venue, Video, Voice,
};
use crate::types::{Chat, User};

/// One message of any kind: text, media, or service event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    /// Sender; absent for channel posts.
    #[serde(default)]
    pub from: Option<User>,
    /// Unix time the message was sent.
    #[serde(default)]
    pub date: i64,
    #[serde(default)]
    pub chat: Option<Chat>,
    #[serde(default)]
    pub forward_from: Option<User>,
    #[serde(default)]
    pub forward_from_chat: Option<Chat>,
    #[serde(default)]
    pub forward_from_message_id: Option<i64>,
    #[serde(default)]
    pub forward_date: Option<i64>,
    /// The replied-to message. Never carries a further reply itself: the
    /// decoder truncates the chain at depth 1.
    #[serde(default, deserialize_with = "reply_depth_one")]
    pub reply_to_message: Option<Box<Message>>,
    #[serde(default)]
    pub edit_date: Option<i64>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(default)]
    pub audio: Option<Audio>,
    #[serde(default)]
    pub document: Option<Document>,
    #[serde(default)]
    pub photo: Option<Vec<PhotoSize>>,
    #[serde(default)]
    pub sticker: Option<Sticker>,
    #[serde(default)]
    pub video: Option<Video>,
    #[serde(default)]
    pub voice: Option<Voice>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub contact: Option<Contact>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub venue: Option<Venue>,
    #[serde(default)]
    pub new_chat_member: Option<User>,
    #[serde(default)]
    pub left_chat_member: Option<User>,
    #[serde(default)]
    pub new_chat_title: Option<String>,
    #[serde(default)]
    pub new_chat_photo: Option<Vec<PhotoSize>>,
    #[serde(default)]
    pub delete_chat_photo: Option<bool>,
    #[serde(default)]
    pub group_chat_created: Option<bool>,
    #[serde(default)]
    pub supergroup_chat_created: Option<bool>,
    #[serde(default)]
    pub channel_chat_created: Option<bool>,
    #[serde(default)]
    pub migrate_to_chat_id: Option<i64>,
    #[serde(default)]
    pub migrate_from_chat_id: Option<i64>,
    /// The pinned message; same depth-1 truncation as `reply_to_message`.
    #[serde(default, deserialize_with = "reply_depth_one")]
    pub pinned_message: Option<Box<Message>>,
}

/// Field deserializer enforcing the depth-1 reply invariant: whatever the
/// nested message claims to reply to is dropped after decode.
fn reply_depth_one<'de, D>(de: D) -> Result<Option<Box<Message>>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut inner: Option<Box<Message>> = Option::deserialize(de)?;
    if let Some(m) = inner.as_mut() {
        m.reply_to_message = None;
        m.pinned_message = None;
    }
    Ok(inner)
}

impl Message {
    /// Message date as a UTC timestamp. `None` if the platform sent a value
    /// outside the representable range.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date, 0)
    }

    /// True iff the message carries text starting with the command marker.
    pub fn is_command(&self) -> bool {
        self.text.as_deref().is_some_and(|t| t.starts_with('/'))
    }

    /// The command name without the marker, with any `@botname` mention
    /// separator stripped. Empty when the message is not a command.
    pub fn command(&self) -> &str {
        if !self.is_command() {
            return "";
        }
        let text = self.text.as_deref().unwrap_or_default();
        let token = text[1..].split(' ').next().unwrap_or_default();
        match token.split_once('@') {
            Some((name, _)) => name,
            None => token,
        }
    }

    /// Everything after the command token. Empty when there are no
    /// arguments or the message is not a command.
    pub fn command_arguments(&self) -> &str {
        if !self.is_command() {
            return "";
        }
        let text = self.text.as_deref().unwrap_or_default();
        match text.split_once(' ') {
            Some((_, rest)) => rest,
            None => "",
        }
    }
}

/// One special entity in a text message: mention, hashtag, bot command,
/// URL, formatting span, or text link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEntity {
    /// Entity kind discriminator (field name is `type` in JSON).
    #[serde(rename = "type")]
    pub kind: String,
    /// Offset in UTF-16 code units to the start of the entity.
    pub offset: i64,
    /// Length in UTF-16 code units.
    pub length: i64,
    /// For `text_link` only: the URL opened on tap.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl MessageEntity {
    /// Parse the URL attached to a `text_link` entity. `None` when the
    /// entity carries no URL or the URL does not parse.
    pub fn parse_url(&self) -> Option<Url> {
        self.url.as_deref().and_then(|u| Url::parse(u).ok())
    }
}
