//! Decorative spinning cube in the page corner.
//!
//! Purely visual: a click or the first hover inside a 1000ms window
//! advances the rotation counter and applies the next CSS transform.
//! Chat activity bumps `UiState::chat_spin_seq`, which applies the
//! smaller chat-spin step.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::rotation::{HOVER_DEBOUNCE_MS, RotationSpin, SPIN_TRANSITION};

#[component]
pub fn CloudBox() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Spin once up front, as the original page does on load.
    let mut initial = RotationSpin::default();
    let first = initial.spin();
    let spin = RwSignal::new(initial);
    let transform = RwSignal::new(first);
    let hover_armed = RwSignal::new(true);

    let on_click = move |_| {
        if let Some(next) = spin.try_update(RotationSpin::spin) {
            transform.set(next);
        }
    };

    let on_mouseover = move |_| {
        if !hover_armed.get_untracked() {
            return;
        }
        hover_armed.set(false);
        if let Some(next) = spin.try_update(RotationSpin::spin) {
            transform.set(next);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(HOVER_DEBOUNCE_MS)).await;
            hover_armed.set(true);
        });
    };

    // Chat activity nudges the cube with the smaller spin step.
    let seen_seq = RwSignal::new(0_u64);
    Effect::new(move || {
        let seq = ui.get().chat_spin_seq;
        if seq == seen_seq.get_untracked() {
            return;
        }
        seen_seq.set(seq);
        if let Some(next) = spin.try_update(RotationSpin::chat_spin) {
            transform.set(next);
        }
    });

    view! {
        <div class="cloud-box" on:click=on_click>
            <div
                class="cloud-box__cube"
                on:mouseover=on_mouseover
                style:transform=move || transform.get()
                style:transition=SPIN_TRANSITION
            ></div>
        </div>
    }
}
