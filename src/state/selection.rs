//! Selected-model set fetched from the host.
//!
//! DESIGN
//! ======
//! The original page re-applied a CSS class through a MutationObserver
//! whenever the card container re-rendered. Here the set is explicit
//! reactive state: cards derive their highlight class from `is_selected`,
//! and `refresh_selected_models` replaces the set wholesale after any flow
//! that re-renders the grid.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

/// Which models the host currently reports as selected.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    pub models: Vec<String>,
    pub loading: bool,
}

impl SelectionState {
    /// Whether the card for `name` should carry the `card-selected` class.
    pub fn is_selected(&self, name: &str) -> bool {
        self.models.iter().any(|model| model == name)
    }

    /// Replace the set with a fresh server response.
    pub fn replace(&mut self, models: Vec<String>) {
        self.models = models;
        self.loading = false;
    }
}

/// Re-fetch the selected set from `/models/selected` and replace state.
///
/// A failed fetch is logged and leaves the previous set in place.
pub fn refresh_selected_models(selection: leptos::prelude::RwSignal<SelectionState>) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::Update;

        selection.update(|state| state.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_selected_models().await {
                Some(models) => selection.update(|state| state.replace(models)),
                None => {
                    leptos::logging::warn!("selected models fetch failed");
                    selection.update(|state| state.loading = false);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = selection;
    }
}
