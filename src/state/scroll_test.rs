use super::*;

// =============================================================
// Bottom math
// =============================================================

#[test]
fn at_the_bottom_is_not_away() {
    assert!(!away_from_bottom(600.0, 400.0, 1000.0));
}

#[test]
fn past_the_bottom_is_not_away() {
    // Overscroll bounce can report a scroll offset past the document end.
    assert!(!away_from_bottom(600.0, 500.0, 1000.0));
}

#[test]
fn short_of_the_bottom_is_away() {
    assert!(away_from_bottom(600.0, 399.0, 1000.0));
}

#[test]
fn unscrolled_short_page_is_not_away() {
    assert!(!away_from_bottom(800.0, 0.0, 500.0));
}

// =============================================================
// Observe
// =============================================================

#[test]
fn observe_sets_the_flag_when_short_of_bottom() {
    let mut state = ScrollState::default();
    state.observe(600.0, 100.0, 1000.0);
    assert!(state.user_has_scrolled);
}

#[test]
fn observe_clears_the_flag_back_at_bottom() {
    let mut state = ScrollState {
        user_has_scrolled: true,
    };
    state.observe(600.0, 400.0, 1000.0);
    assert!(!state.user_has_scrolled);
}
