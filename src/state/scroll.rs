//! Scroll controller for the chat page.
//!
//! Tracks whether the user has manually scrolled away from the bottom of
//! the page. Auto-scrolls are suppressed while the flag is set; `reset`
//! clears it and forces a scroll. The listener recomputes the flag on every
//! native scroll event, without debounce.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use leptos::prelude::{GetUntracked, RwSignal, Update};

/// Whether the user scrolled away from the page bottom.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollState {
    pub user_has_scrolled: bool,
}

impl ScrollState {
    /// Update the flag from a scroll event's viewport measurements.
    pub fn observe(&mut self, inner_height: f64, scroll_y: f64, body_height: f64) {
        self.user_has_scrolled = away_from_bottom(inner_height, scroll_y, body_height);
    }
}

/// The viewport is short of the document bottom.
pub fn away_from_bottom(inner_height: f64, scroll_y: f64, body_height: f64) -> bool {
    inner_height + scroll_y < body_height
}

/// Schedule a scroll to the document bottom on the next animation frame,
/// unless the user has scrolled away.
pub fn scroll_to_bottom(scroll: RwSignal<ScrollState>) {
    if scroll.get_untracked().user_has_scrolled {
        return;
    }
    force_scroll_to_bottom();
}

/// Clear the user-scrolled flag and scroll regardless of prior state.
pub fn reset(scroll: RwSignal<ScrollState>) {
    scroll.update(|state| state.user_has_scrolled = false);
    force_scroll_to_bottom();
}

fn force_scroll_to_bottom() {
    #[cfg(feature = "hydrate")]
    {
        leptos::prelude::request_animation_frame(|| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(body) = window.document().and_then(|doc| doc.body()) else {
                return;
            };
            window.scroll_to_with_x_and_y(0.0, f64::from(body.scroll_height()));
        });
    }
}
