use super::*;

// =============================================================
// EventFeedState
// =============================================================

#[test]
fn event_feed_default_is_empty() {
    let state = EventFeedState::default();
    assert!(state.messages.is_empty());
}

#[test]
fn push_appends_in_arrival_order() {
    let mut state = EventFeedState::default();
    state.push(EventMessage {
        message: "first".to_owned(),
        timestamp: "t1".to_owned(),
    });
    state.push(EventMessage {
        message: "second".to_owned(),
        timestamp: "t2".to_owned(),
    });
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].message, "first");
    assert_eq!(state.messages[1].timestamp, "t2");
}
