use super::*;

#[test]
fn parse_event_message_reads_the_payload() {
    let message = parse_event_message(r#"{"message":"model ready","timestamp":"09:30"}"#)
        .expect("parse");
    assert_eq!(message.message, "model ready");
    assert_eq!(message.timestamp, "09:30");
}

#[test]
fn parse_event_message_rejects_non_json() {
    assert!(parse_event_message("<div>progress</div>").is_none());
}

#[test]
fn parse_event_message_rejects_missing_fields() {
    assert!(parse_event_message(r#"{"message":"half"}"#).is_none());
}
