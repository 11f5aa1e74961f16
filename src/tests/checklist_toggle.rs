//! Checklist toggling parity.

use crate::messages::Message;
use crate::state::AppState;
use crate::storage::Store;
use crate::update::update;

#[test]
fn double_toggle_restores_the_original_state() {
    let mut state = AppState::with_store(Store::memory());
    let original: Vec<bool> = state.checklist.iter().map(|i| i.completed).collect();
    let id = state.checklist[0].id.clone();

    update(&mut state, Message::ToggleChecklistItem(id.clone()));
    assert_ne!(state.checklist[0].completed, original[0]);

    update(&mut state, Message::ToggleChecklistItem(id));
    let after: Vec<bool> = state.checklist.iter().map(|i| i.completed).collect();
    assert_eq!(after, original);
}

#[test]
fn toggling_an_unknown_id_changes_nothing() {
    let mut state = AppState::with_store(Store::memory());
    let original: Vec<bool> = state.checklist.iter().map(|i| i.completed).collect();

    update(&mut state, Message::ToggleChecklistItem("absent".to_string()));
    let after: Vec<bool> = state.checklist.iter().map(|i| i.completed).collect();
    assert_eq!(after, original);
}

#[test]
fn seed_has_seven_tasks_across_three_categories() {
    let state = AppState::with_store(Store::memory());
    assert_eq!(state.checklist.len(), 7);
    for category in crate::models::ChecklistCategory::ALL {
        assert!(state.checklist.iter().any(|i| i.category == category));
    }
}
