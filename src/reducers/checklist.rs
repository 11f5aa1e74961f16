//! Optimization checklist.  The task list is fixed; only the completion
//! flag moves, and toggling twice restores the original state.

use crate::messages::{Command, Message};
use crate::state::AppState;

/// Returns `true` when the message was handled by the checklist reducer.
pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::ToggleChecklistItem(id) => {
            if let Some(item) = state.checklist.iter_mut().find(|i| &i.id == id) {
                item.completed = !item.completed;
                cmds.push(Command::update_ui(|| {
                    crate::views::render_if_active(crate::routes::Route::Checklist)
                }));
            }
            true
        }
        _ => false,
    }
}
