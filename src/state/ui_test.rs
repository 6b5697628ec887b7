use super::*;

// =============================================================
// HeaderState defaults
// =============================================================

#[test]
fn header_state_default_is_top_of_page_with_menu_closed() {
    let state = HeaderState::default();
    assert!(!state.scrolled);
    assert!(!state.menu_open);
    assert_eq!(state.class(), "site-header");
}

// =============================================================
// Scroll
// =============================================================

#[test]
fn scrolled_only_strictly_past_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(10.0));
    assert!(is_scrolled(10.5));
    assert!(is_scrolled(800.0));
}

#[test]
fn on_scroll_tracks_both_directions() {
    let mut state = HeaderState::default();
    state.on_scroll(42.0);
    assert!(state.scrolled);
    assert_eq!(state.class(), "site-header site-header--scrolled");
    state.on_scroll(3.0);
    assert!(!state.scrolled);
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn toggle_menu_flips_and_relabels() {
    let mut state = HeaderState::default();
    assert_eq!(state.menu_label(), "Open menu");
    state.toggle_menu();
    assert!(state.menu_open);
    assert_eq!(state.menu_label(), "Close menu");
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn close_menu_is_idempotent() {
    let mut state = HeaderState { scrolled: true, menu_open: true };
    state.close_menu();
    state.close_menu();
    assert!(!state.menu_open);
    assert!(state.scrolled);
}
