//! Chat timeline: streamed turns, inline images, auto-scroll.

use leptos::prelude::*;

use crate::state::chat::{ChatEntry, ChatState};
use crate::state::scroll::{self, ScrollState};

/// The chat view. Grows with streamed turns and uploaded images; keeps the
/// page pinned to the bottom unless the user has scrolled away.
#[component]
pub fn ChatView() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let scroll_state = expect_context::<RwSignal<ScrollState>>();

    // Any timeline change schedules an auto-scroll; the scroll controller
    // suppresses it while the user-scrolled flag is set.
    Effect::new(move || {
        let _ = chat.get();
        scroll::scroll_to_bottom(scroll_state);
    });

    let on_reset = move |_| scroll::reset(scroll_state);

    view! {
        <div class="chat-view" id="chat-view">
            {move || {
                let entries = chat.get().entries;
                if entries.is_empty() {
                    return view! { <div class="chat-view__empty">"No messages yet"</div> }
                        .into_any();
                }
                entries.iter().map(render_entry).collect::<Vec<_>>().into_any()
            }}
        </div>
        <button class="btn chat-view__scroll-reset" on:click=on_reset title="Scroll to bottom">
            "↓"
        </button>
    }
}

fn render_entry(entry: &ChatEntry) -> AnyView {
    match entry {
        ChatEntry::Turn {
            prompt,
            response,
            model,
            ..
        } => view! {
            <div class="chat-view__turn">
                <div class="chat-view__prompt">{prompt.clone()}</div>
                <div class="chat-view__response">
                    <span class="chat-view__model">{model.clone()}</span>
                    // The host streams rendered markdown for its own views.
                    <div class="chat-view__response-body" inner_html=response.clone()></div>
                </div>
            </div>
        }
        .into_any(),
        ChatEntry::Image { src } => view! {
            <div class="chat-view__turn chat-view__turn--image">
                <img class="chat-view__image" src=src.clone()/>
            </div>
        }
        .into_any(),
    }
}
