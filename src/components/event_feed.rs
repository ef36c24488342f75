//! Feed of server-sent update messages.

use leptos::prelude::*;

use crate::state::events::EventFeedState;

/// Renders update-stream messages as plain lines, oldest first.
#[component]
pub fn EventFeed() -> impl IntoView {
    let feed = expect_context::<RwSignal<EventFeedState>>();

    view! {
        <div class="event-feed" id="sse-messages">
            {move || {
                feed.get()
                    .messages
                    .iter()
                    .map(|message| {
                        view! { <div class="event-feed__line">{message.display_line()}</div> }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
