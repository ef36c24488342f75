//! Card for a single language model.
//!
//! DESIGN
//! ======
//! The card derives its highlight class reactively from the selected set,
//! so re-rendering the grid never needs a separate re-highlight pass.

use leptos::prelude::*;

use crate::net::types::ModelInfo;
use crate::state::selection::SelectionState;

/// A model card. Carries `data-model-name` for styling hooks and toggles
/// `card-selected` from selection state.
#[component]
pub fn ModelCard(model: ModelInfo) -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();

    let data_name = model.name.clone();
    let highlight_name = model.name.clone();
    let ctx_label = (model.ctx > 0).then(|| format!("{} ctx", model.ctx));

    view! {
        <div
            class="model-card"
            data-model-name=data_name
            class:card-selected=move || selection.get().is_selected(&highlight_name)
        >
            <span class="model-card__name">{model.name}</span>
            {ctx_label.map(|label| view! { <span class="model-card__ctx">{label}</span> })}
        </div>
    }
}
