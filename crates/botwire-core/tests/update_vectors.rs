//! Update union vector tests: one-of decoding, canonical priority, unknown
//! kinds, and invalid-record recovery.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use botwire_core::error::BotWireError;
use botwire_core::protocol::update::{decode_update, decode_update_slice, Update, UpdateKind};

fn decode(json: &str) -> Update {
    decode_update_slice(json.as_bytes()).unwrap()
}

#[test]
fn each_recognized_kind_decodes_to_its_variant() {
    let message = r#"{"message_id":1,"date":1,"text":"hi"}"#;
    let inline = r#"{"id":"q1","from":{"id":1,"first_name":"A"},"query":"cats","offset":""}"#;
    let chosen = r#"{"result_id":"r1","from":{"id":1,"first_name":"A"},"query":"cats"}"#;
    let callback = r#"{"id":"c1","from":{"id":1,"first_name":"A"},"data":"go"}"#;

    let cases = [
        (format!(r#"{{"update_id":1,"message":{message}}}"#), "new_message"),
        (format!(r#"{{"update_id":2,"edited_message":{message}}}"#), "edited_message"),
        (format!(r#"{{"update_id":3,"channel_post":{message}}}"#), "channel_post"),
        (format!(r#"{{"update_id":4,"edited_channel_post":{message}}}"#), "edited_channel_post"),
        (format!(r#"{{"update_id":5,"inline_query":{inline}}}"#), "inline_query"),
        (format!(r#"{{"update_id":6,"chosen_inline_result":{chosen}}}"#), "chosen_inline_result"),
        (format!(r#"{{"update_id":7,"callback_query":{callback}}}"#), "callback_query"),
    ];

    for (json, expected) in &cases {
        let update = decode(json);
        let got = match update.kind {
            UpdateKind::NewMessage(_) => "new_message",
            UpdateKind::EditedMessage(_) => "edited_message",
            UpdateKind::ChannelPost(_) => "channel_post",
            UpdateKind::EditedChannelPost(_) => "edited_channel_post",
            UpdateKind::InlineQuery(_) => "inline_query",
            UpdateKind::ChosenInlineResult(_) => "chosen_inline_result",
            UpdateKind::CallbackQuery(_) => "callback_query",
            UpdateKind::Unknown => "unknown",
        };
        assert_eq!(got, *expected, "update_id {}", update.id);
    }
}

#[test]
fn exactly_one_variant_is_exposed_on_conflict() {
    // Two recognized keys on one object: first in canonical order wins.
    let json = r#"{
        "update_id": 8,
        "callback_query": {"id":"c1","from":{"id":1,"first_name":"A"}},
        "message": {"message_id":1,"date":1,"text":"hi"}
    }"#;
    let update = decode(json);
    assert!(matches!(update.kind, UpdateKind::NewMessage(_)));
    assert!(update.callback_query().is_none());
}

#[test]
fn unrecognized_kind_decodes_to_unknown() {
    // A future event kind must not fail the record.
    let json = r#"{"update_id":9,"shipping_query":{"id":"s1","total":120}}"#;
    let update = decode(json);
    assert_eq!(update.id, 9);
    assert!(matches!(update.kind, UpdateKind::Unknown));
    assert!(update.message().is_none());
}

#[test]
fn wrong_typed_field_fails_with_recovered_id() {
    let json = br#"{"update_id":41,"message":5}"#;
    let err = decode_update_slice(json).expect_err("must fail");
    match err {
        BotWireError::InvalidUpdate { id, reason } => {
            assert_eq!(id, Some(41));
            assert!(!reason.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unparseable_object_fails_without_an_id() {
    let err = decode_update_slice(b"{ nope").expect_err("must fail");
    assert!(matches!(err, BotWireError::InvalidUpdate { id: None, .. }));
}

#[test]
fn missing_update_id_is_invalid() {
    let err = decode_update_slice(br#"{"message":{"message_id":1,"date":1}}"#)
        .expect_err("must fail");
    assert!(matches!(err, BotWireError::InvalidUpdate { id: None, .. }));
}

#[test]
fn raw_value_and_slice_decoders_agree() {
    let json = r#"{"update_id":12,"message":{"message_id":3,"date":1,"text":"/ping"}}"#;
    let raw: Box<serde_json::value::RawValue> = serde_json::from_str(json).unwrap();

    let a = decode_update(&raw).unwrap();
    let b = decode_update_slice(json.as_bytes()).unwrap();
    assert_eq!(a.id, b.id);
    assert_eq!(
        a.message().unwrap().command(),
        b.message().unwrap().command()
    );
}

#[test]
fn message_accessor_is_new_messages_only() {
    let edited = decode(r#"{"update_id":13,"edited_message":{"message_id":1,"date":1}}"#);
    assert!(edited.message().is_none());
}

#[test]
fn command_accessors_are_empty_without_a_message() {
    let update = decode(
        r#"{"update_id":14,"message":{"message_id":1,"date":1,"text":"/start@mybot hello world"}}"#,
    );
    assert!(update.is_command());
    assert_eq!(update.command(), "start");
    assert_eq!(update.command_arguments(), "hello world");

    let callback = decode(
        r#"{"update_id":15,"callback_query":{"id":"c","from":{"id":1,"first_name":"A"}}}"#,
    );
    assert!(!callback.is_command());
    assert_eq!(callback.command(), "");
    assert_eq!(callback.command_arguments(), "");
}
