use super::*;
use crate::util::catalog::{CHAIR, MEETING_ROOM, OFFICE};

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.tips_open);
}

#[test]
fn ui_state_default_tool_is_select() {
    let state = UiState::default();
    assert_eq!(state.tool, ToolType::Select);
    assert!(!state.has_selection);
    assert_eq!(state.shape_count, 0);
    assert_eq!(state.delete_seq, 0);
    assert_eq!(state.clone_seq, 0);
}

// =============================================================
// Fixture buttons
// =============================================================

#[test]
fn toggle_fixture_arms_button() {
    let mut state = UiState::default();
    state.toggle_fixture(MEETING_ROOM);
    assert_eq!(state.tool, ToolType::Place(MEETING_ROOM));
    assert!(state.is_active(MEETING_ROOM));
    assert!(!state.is_active(OFFICE));
}

#[test]
fn toggle_same_fixture_twice_disarms() {
    let mut state = UiState::default();
    state.toggle_fixture(CHAIR);
    state.toggle_fixture(CHAIR);
    assert_eq!(state.tool, ToolType::Select);
    assert!(!state.is_active(CHAIR));
}

#[test]
fn toggle_other_fixture_replaces_armed_one() {
    let mut state = UiState::default();
    state.toggle_fixture(MEETING_ROOM);
    state.toggle_fixture(OFFICE);
    assert!(state.is_active(OFFICE));
    assert!(!state.is_active(MEETING_ROOM));
}

#[test]
fn toggle_fixture_while_drawing_arms_it() {
    let mut state = UiState { tool: ToolType::Draw, ..Default::default() };
    state.toggle_fixture(CHAIR);
    assert_eq!(state.tool, ToolType::Place(CHAIR));
}

// =============================================================
// Tips and requests
// =============================================================

#[test]
fn toggle_tips_flips() {
    let mut state = UiState::default();
    state.toggle_tips();
    assert!(state.tips_open);
    state.toggle_tips();
    assert!(!state.tips_open);
}

#[test]
fn requests_bump_their_own_counter() {
    let mut state = UiState::default();
    state.request_delete();
    state.request_delete();
    state.request_clone();
    assert_eq!(state.delete_seq, 2);
    assert_eq!(state.clone_seq, 1);
}

#[test]
fn request_counters_saturate() {
    let mut state = UiState { delete_seq: u64::MAX, clone_seq: u64::MAX, ..Default::default() };
    state.request_delete();
    state.request_clone();
    assert_eq!(state.delete_seq, u64::MAX);
    assert_eq!(state.clone_seq, u64::MAX);
}
