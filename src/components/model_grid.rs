//! Grid of model cards with selection highlighting.

use leptos::prelude::*;

use crate::components::model_card::ModelCard;
use crate::net::types::ModelInfo;
use crate::state::selection::{self, SelectionState};

/// The models container. Loads the inventory once, then re-runs the
/// selected-set fetch so the freshly rendered cards highlight correctly.
#[component]
pub fn ModelGrid() -> impl IntoView {
    let selection_signal = expect_context::<RwSignal<SelectionState>>();
    let models = RwSignal::new(Vec::<ModelInfo>::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_language_models().await {
            Some(inventory) => {
                models.set(inventory);
                // The grid just re-rendered; re-sync highlighting.
                selection::refresh_selected_models(selection_signal);
            }
            None => leptos::logging::warn!("model inventory fetch failed"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = selection_signal;

    view! {
        <div class="model-grid" id="models-container">
            {move || {
                models
                    .get()
                    .into_iter()
                    .map(|model| view! { <ModelCard model=model/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
