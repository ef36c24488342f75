//! Feed of messages received on the host's server-sent update stream.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::net::types::EventMessage;

/// Messages appended from the `/sseupdates` stream, oldest first.
#[derive(Clone, Debug, Default)]
pub struct EventFeedState {
    pub messages: Vec<EventMessage>,
}

impl EventFeedState {
    pub fn push(&mut self, message: EventMessage) {
        self.messages.push(message);
    }
}
