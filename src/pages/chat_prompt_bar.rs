//! Prompt form with file upload and stream-stop controls.

#[cfg(test)]
#[path = "chat_prompt_bar_test.rs"]
mod chat_prompt_bar_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::infer_client::JobSender;
use crate::state::chat::ChatState;
use crate::state::ui::UiState;
use crate::state::workflow::{DEFAULT_FLOW, Workflows};

fn trimmed_prompt(raw: &str) -> Option<String> {
    let prompt = raw.trim();
    (!prompt.is_empty()).then(|| prompt.to_owned())
}

/// The prompt form: text input, a hidden file input behind the upload
/// button, and a stop button for the streaming turn. Submission is
/// intercepted and posted as form data instead of a page navigation.
#[component]
pub(crate) fn ChatPromptBar() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let ui_state = expect_context::<RwSignal<UiState>>();
    #[cfg(feature = "hydrate")]
    let sender = expect_context::<RwSignal<JobSender>>();
    let workflows = expect_context::<Workflows>();

    let prompt_input = RwSignal::new(String::new());
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let default_model = StoredValue::new(
        workflows
            .chain_head(DEFAULT_FLOW)
            .unwrap_or_default()
            .to_owned(),
    );
    #[cfg(feature = "hydrate")]
    let upload_workflows = StoredValue::new(workflows);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(prompt) = trimmed_prompt(&prompt_input.get_untracked()) else {
            return;
        };
        crate::pages::chat::submit_prompt(chat, ui_state, default_model.get_value(), prompt);
        prompt_input.set(String::new());
    };

    let on_upload_click = move |ev: leptos::ev::MouseEvent| {
        // Keep the click from bubbling into the form submit.
        ev.stop_propagation();
        if let Some(input) = file_input_ref.get_untracked() {
            input.click();
        }
    };

    let on_file_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_input_ref.get_untracked() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Reset so re-selecting the same file fires another change.
            input.set_value("");
            leptos::task::spawn_local(crate::pages::chat::run_upload(
                file,
                chat,
                ui_state,
                sender.get_untracked(),
                upload_workflows.get_value(),
            ));
        }
    };

    let on_stop = move |_| crate::pages::chat::stop_active_turn(chat);
    let streaming = move || chat.get().streaming_turn.is_some();

    view! {
        <form class="prompt-bar" action="/chatsubmit" method="post" on:submit=on_submit>
            <input
                class="prompt-bar__input"
                type="text"
                placeholder="Send a message..."
                prop:value=move || prompt_input.get()
                on:input=move |ev| prompt_input.set(event_target_value(&ev))
            />
            <input
                class="prompt-bar__file-input"
                type="file"
                id="file-input"
                node_ref=file_input_ref
                on:change=on_file_change
            />
            <button class="btn prompt-bar__upload" type="button" id="upload" on:click=on_upload_click>
                "Upload"
            </button>
            <button
                class="btn prompt-bar__stop"
                type="button"
                on:click=on_stop
                disabled=move || !streaming()
            >
                "Stop"
            </button>
            <button
                class="btn btn--primary prompt-bar__send"
                type="submit"
                disabled=move || trimmed_prompt(&prompt_input.get()).is_none()
            >
                "Send"
            </button>
        </form>
    }
}
