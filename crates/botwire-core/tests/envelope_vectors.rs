//! Response envelope vector tests: both decode stages and the ok/result
//! invariant.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use botwire_core::error::BotWireError;
use botwire_core::protocol::envelope::{decode_result, parse_envelope};
use botwire_core::protocol::update::decode_update;
use botwire_core::types::Message;
use serde_json::value::RawValue;

#[test]
fn ok_envelope_keeps_result_raw() {
    let body = br#"{"ok":true,"result":[{"update_id":1},{"update_id":2}]}"#;
    let env = parse_envelope(body).unwrap();
    assert!(env.ok);
    assert!(env.error_code.is_none());
    assert!(env.description.is_none());

    let raw = env.into_result().unwrap();
    assert!(raw.get().starts_with('['));
}

#[test]
fn second_stage_decodes_the_caller_chosen_type() {
    let body = br#"{"ok":true,"result":{"message_id":9,"date":1700000000,"text":"hi"}}"#;
    let raw = parse_envelope(body).unwrap().into_result().unwrap();
    let msg: Message = decode_result(&raw).unwrap();
    assert_eq!(msg.message_id, 9);
    assert_eq!(msg.text.as_deref(), Some("hi"));

    let body = br#"{"ok":true,"result":true}"#;
    let raw = parse_envelope(body).unwrap().into_result().unwrap();
    let flag: bool = decode_result(&raw).unwrap();
    assert!(flag);
}

#[test]
fn second_stage_mismatch_is_malformed() {
    let body = br#"{"ok":true,"result":"not a message"}"#;
    let raw = parse_envelope(body).unwrap().into_result().unwrap();
    let err = decode_result::<Message>(&raw).expect_err("shape mismatch");
    assert!(matches!(err, BotWireError::MalformedEnvelope(_)));
}

#[test]
fn error_envelope_surfaces_code_and_hints() {
    let body = br#"{
        "ok": false,
        "error_code": 429,
        "description": "Too Many Requests: retry after 7",
        "parameters": { "retry_after": 7 }
    }"#;
    let env = parse_envelope(body).unwrap();
    let err = env.into_result().expect_err("platform failure");
    match &err {
        BotWireError::Api {
            code,
            description,
            parameters,
        } => {
            assert_eq!(*code, 429);
            assert!(description.contains("Too Many Requests"));
            let p = parameters.as_ref().expect("parameters");
            assert_eq!(p.retry_after, Some(7));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.retry_after(), Some(std::time::Duration::from_secs(7)));
    assert_eq!(err.migrate_to_chat_id(), None);
}

#[test]
fn migration_hint_is_independent_of_retry_after() {
    let body = br#"{
        "ok": false,
        "error_code": 400,
        "description": "group upgraded",
        "parameters": { "migrate_to_chat_id": -100123 }
    }"#;
    let err = parse_envelope(body).unwrap().into_result().expect_err("platform failure");
    assert_eq!(err.migrate_to_chat_id(), Some(-100123));
    assert_eq!(err.retry_after(), None);
}

#[test]
fn ok_without_result_is_rejected() {
    let err = parse_envelope(br#"{"ok":true}"#).expect_err("invariant violation");
    assert!(matches!(err, BotWireError::MalformedEnvelope(_)));
}

#[test]
fn error_with_result_is_rejected() {
    let body = br#"{"ok":false,"error_code":400,"result":[]}"#;
    let err = parse_envelope(body).expect_err("invariant violation");
    assert!(matches!(err, BotWireError::MalformedEnvelope(_)));
}

#[test]
fn error_without_code_is_rejected() {
    let err = parse_envelope(br#"{"ok":false,"description":"x"}"#).expect_err("invariant violation");
    assert!(matches!(err, BotWireError::MalformedEnvelope(_)));
}

#[test]
fn garbage_bytes_are_malformed() {
    for body in [&b"not json"[..], &b""[..], &b"[1,2,3]"[..]] {
        let err = parse_envelope(body).expect_err("must fail");
        assert!(matches!(err, BotWireError::MalformedEnvelope(_)));
    }
}

#[test]
fn poll_response_flows_into_update_decode() {
    let body = br#"{"ok":true,"result":[
        {"update_id":1,"message":{"message_id":10,"date":1,"text":"a"}},
        {"update_id":2,"callback_query":{"id":"cb","from":{"id":5,"first_name":"B"},"data":"x"}}
    ]}"#;
    let raw = parse_envelope(body).unwrap().into_result().unwrap();
    let objects: Vec<Box<RawValue>> = decode_result(&raw).unwrap();
    assert_eq!(objects.len(), 2);

    let first = decode_update(&objects[0]).unwrap();
    let second = decode_update(&objects[1]).unwrap();
    assert_eq!((first.id, second.id), (1, 2));
    assert!(first.message().is_some());
    assert!(second.callback_query().is_some());
}
