//! Transient page chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns (toast notice, prompt-view padding, the
//! decor spin nudge) out of domain state so the chat timeline can evolve
//! independently of page chrome.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Spacing between the timeline and the fixed prompt view, in pixels.
const PROMPT_VIEW_SPACING: f64 = 10.0;

/// UI state for the toast notice, prompt-view height, and decor nudges.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub notice: Option<String>,
    pub prompt_view_height: f64,
    /// Bumped on chat activity; the cloud box applies its chat spin per bump.
    pub chat_spin_seq: u64,
}

/// Bottom padding that keeps the fixed prompt view from covering content.
pub fn body_bottom_padding(prompt_view_height: f64) -> f64 {
    prompt_view_height + PROMPT_VIEW_SPACING
}
