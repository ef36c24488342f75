//! Chat workspace page: model grid, chat timeline, prompt bar, event feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It wires mount-time concerns (selection refresh,
//! scroll tracking, the server event feed, prompt-view padding) and owns
//! the upload pipeline and prompt submission flow.
//!
//! ERROR HANDLING
//! ==============
//! Every network failure in these flows is logged and swallowed. A failed
//! upload inserts nothing; a failed chat persist leaves the timeline as is.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;

use crate::components::chat_view::ChatView;
use crate::components::cloud_box::CloudBox;
use crate::components::event_feed::EventFeed;
use crate::components::model_grid::ModelGrid;
#[cfg(feature = "hydrate")]
use crate::net::infer_client::JobSender;
use crate::net::types::{InferenceJob, UploadResponse};
use crate::pages::chat_prompt_bar::ChatPromptBar;
use crate::state::chat::ChatState;
use crate::state::events::EventFeedState;
use crate::state::scroll::ScrollState;
use crate::state::selection::{self, SelectionState};
use crate::state::ui::UiState;
use crate::state::workflow::{IMAGE_FLOW, Workflows};

/// Where uploaded files land on the host, relative to the served page.
pub(crate) fn uploaded_file_src(file_name: &str) -> String {
    format!("./public/uploads/{file_name}")
}

/// What the pipeline does after an upload response arrives.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum UploadOutcome {
    /// Insert the uploaded image into the chat and queue a description job.
    InsertImageAndInfer { src: String, job: InferenceJob },
    /// Keep the extracted content for the next prompt; nothing is rendered.
    StoreContentOnly,
}

/// Decide the pipeline outcome for a completed upload.
pub(crate) fn plan_upload_outcome(
    response: &UploadResponse,
    file_name: &str,
    workflows: &Workflows,
) -> UploadOutcome {
    if !response.is_image_success() {
        return UploadOutcome::StoreContentOnly;
    }
    let Some(model) = workflows.chain_head(IMAGE_FLOW) else {
        return UploadOutcome::StoreContentOnly;
    };
    let src = uploaded_file_src(file_name);
    let job = InferenceJob::image_description(model, &src);
    UploadOutcome::InsertImageAndInfer { src, job }
}

/// Run the upload pipeline for a selected file.
#[cfg(feature = "hydrate")]
pub(crate) async fn run_upload(
    file: web_sys::File,
    chat: RwSignal<ChatState>,
    ui_state: RwSignal<UiState>,
    sender: JobSender,
    workflows: Workflows,
) {
    let Some(response) = crate::net::api::upload_file(&file).await else {
        leptos::logging::warn!("upload failed: {}", file.name());
        ui_state.update(|u| u.notice = Some("Upload failed.".to_owned()));
        return;
    };

    // The extracted content rides along with the next prompt submission.
    let content = response.content.clone().unwrap_or_default();
    chat.update(|c| c.doc_content = content);

    match plan_upload_outcome(&response, &file.name(), &workflows) {
        UploadOutcome::InsertImageAndInfer { src, job } => {
            chat.update(|c| c.push_image(src));
            if !sender.send(&job) {
                leptos::logging::warn!("inference channel closed; describe-image job dropped");
            }
        }
        UploadOutcome::StoreContentOnly => {
            leptos::logging::log!("file uploaded for processing: {}", file.name());
            ui_state.update(|u| u.notice = Some("File uploaded for processing.".to_owned()));
        }
    }
}

/// Submit a prompt: close out any streamed turn (persisting it), open the
/// next turn, and post the form to the host.
pub(crate) fn submit_prompt(
    chat: RwSignal<ChatState>,
    ui_state: RwSignal<UiState>,
    model: String,
    prompt: String,
) {
    finish_active_turn(chat);

    let doc_content = chat.with_untracked(|c| c.doc_content.clone());
    chat.update(|c| {
        c.begin_turn(prompt.clone(), model);
    });
    ui_state.update(|u| u.chat_spin_seq += 1);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::submit_prompt(&prompt, &doc_content).await {
            leptos::logging::warn!("{e}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (prompt, doc_content);
}

/// Close the active streamed turn and post its record to the chats store.
pub(crate) fn finish_active_turn(chat: RwSignal<ChatState>) {
    let Some(record) = chat.try_update(ChatState::finish_turn).flatten() else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::create_chat(&record).await {
            leptos::logging::warn!("{e}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = record;
}

/// Ask the host to stop streaming the active turn. Local streaming state
/// is left untouched; the host decides when output actually stops.
pub(crate) fn stop_active_turn(chat: RwSignal<ChatState>) {
    let Some(turn_id) = chat.with_untracked(|c| c.streaming_turn) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::stop_streaming(turn_id).await {
            Ok(()) => leptos::logging::log!("streaming for turn {turn_id} stopped"),
            Err(e) => leptos::logging::warn!("{e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = turn_id;
}

/// The chat workspace page.
#[component]
pub fn ChatPage() -> impl IntoView {
    let selection_signal = expect_context::<RwSignal<SelectionState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let scroll_state = expect_context::<RwSignal<ScrollState>>();
    let ui_state = expect_context::<RwSignal<UiState>>();
    let feed = expect_context::<RwSignal<EventFeedState>>();

    selection::refresh_selected_models(selection_signal);

    #[cfg(feature = "hydrate")]
    crate::net::sse::spawn_event_feed(feed);
    #[cfg(not(feature = "hydrate"))]
    let _ = feed;

    // Track whether the user scrolled away from the page bottom.
    let scroll_listener = window_event_listener(leptos::ev::scroll, move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let inner_height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or_default();
            let scroll_y = window.scroll_y().unwrap_or_default();
            let body_height = window
                .document()
                .and_then(|doc| doc.body())
                .map_or(0.0, |body| f64::from(body.offset_height()));
            scroll_state.update(|s| s.observe(inner_height, scroll_y, body_height));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = scroll_state;
    });
    on_cleanup(move || scroll_listener.remove());

    // The fixed prompt view must not cover timeline content.
    let prompt_view_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        let Some(el) = prompt_view_ref.get() else {
            return;
        };
        let height = f64::from(el.offset_height());
        ui_state.update(|u| u.prompt_view_height = height);
        #[cfg(feature = "hydrate")]
        apply_body_bottom_padding(crate::state::ui::body_bottom_padding(height));
    });

    let notice = move || ui_state.get().notice;

    view! {
        <div class="chat-page">
            <CloudBox/>
            <ModelGrid/>
            <ChatView/>
            <EventFeed/>
            <Show when=move || notice().is_some()>
                <div class="chat-page__notice" role="status">
                    <span>{move || notice().unwrap_or_default()}</span>
                    <button
                        class="chat-page__notice-dismiss"
                        on:click=move |_| ui_state.update(|u| u.notice = None)
                    >
                        "✕"
                    </button>
                </div>
            </Show>
            <div class="chat-page__prompt-view" id="prompt-view" node_ref=prompt_view_ref>
                <ChatPromptBar/>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn apply_body_bottom_padding(padding_px: f64) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.body())
    else {
        return;
    };
    let _ = body
        .style()
        .set_property("padding-bottom", &format!("{padding_px}px"));
}
