use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_has_no_notice() {
    let state = UiState::default();
    assert!(state.notice.is_none());
    assert_eq!(state.prompt_view_height, 0.0);
    assert_eq!(state.chat_spin_seq, 0);
}

// =============================================================
// Prompt-view padding
// =============================================================

#[test]
fn body_bottom_padding_adds_fixed_spacing() {
    assert_eq!(body_bottom_padding(120.0), 130.0);
}

#[test]
fn body_bottom_padding_of_unmeasured_view_is_just_spacing() {
    assert_eq!(body_bottom_padding(0.0), 10.0);
}
