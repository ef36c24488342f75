use super::*;

// =============================================================
// SelectionState defaults
// =============================================================

#[test]
fn selection_state_default_is_empty() {
    let state = SelectionState::default();
    assert!(state.models.is_empty());
    assert!(!state.loading);
}

// =============================================================
// Membership
// =============================================================

#[test]
fn is_selected_matches_exact_names_only() {
    let state = SelectionState {
        models: vec!["m1".to_owned(), "m2".to_owned()],
        loading: false,
    };
    assert!(state.is_selected("m1"));
    assert!(state.is_selected("m2"));
    assert!(!state.is_selected("m3"));
    assert!(!state.is_selected("m"));
}

#[test]
fn is_selected_on_empty_set_is_false() {
    let state = SelectionState::default();
    assert!(!state.is_selected("m1"));
}

// =============================================================
// Replace
// =============================================================

#[test]
fn replace_swaps_the_set_and_clears_loading() {
    let mut state = SelectionState {
        models: vec!["old".to_owned()],
        loading: true,
    };
    state.replace(vec!["new".to_owned()]);
    assert_eq!(state.models, vec!["new".to_owned()]);
    assert!(!state.loading);
}

#[test]
fn replace_with_empty_clears_all_highlights() {
    let mut state = SelectionState {
        models: vec!["m1".to_owned()],
        loading: false,
    };
    state.replace(Vec::new());
    assert!(!state.is_selected("m1"));
}
