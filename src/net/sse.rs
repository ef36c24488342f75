//! Server-sent update feed from `GET /sseupdates`.
//!
//! ERROR HANDLING
//! ==============
//! Malformed payloads are logged and skipped; the browser's `EventSource`
//! handles stream-level reconnection itself.

#[cfg(test)]
#[path = "sse_test.rs"]
mod sse_test;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::EventMessage;
#[cfg(feature = "hydrate")]
use crate::state::events::EventFeedState;

#[cfg(any(test, feature = "hydrate"))]
fn parse_event_message(raw: &str) -> Option<EventMessage> {
    serde_json::from_str(raw).ok()
}

/// Subscribe to the host's update stream and append each `message` event
/// to the feed.
#[cfg(feature = "hydrate")]
pub fn spawn_event_feed(feed: leptos::prelude::RwSignal<EventFeedState>) {
    use futures::StreamExt;
    use leptos::prelude::Update;

    leptos::task::spawn_local(async move {
        let mut source = match gloo_net::eventsource::futures::EventSource::new("/sseupdates") {
            Ok(source) => source,
            Err(e) => {
                leptos::logging::warn!("update stream unavailable: {e}");
                return;
            }
        };
        let mut messages = match source.subscribe("message") {
            Ok(stream) => stream,
            Err(e) => {
                leptos::logging::warn!("update stream subscribe failed: {e}");
                return;
            }
        };

        while let Some(item) = messages.next().await {
            match item {
                Ok((_, event)) => {
                    let Some(raw) = event.data().as_string() else {
                        continue;
                    };
                    match parse_event_message(&raw) {
                        Some(message) => feed.update(|f| f.push(message)),
                        None => leptos::logging::warn!("unparseable update event: {raw}"),
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("update stream error: {e}");
                }
            }
        }
    });
}
