// frontend/src/update.rs
//
// Routes each message to the screen reducer that owns it.  Session and
// navigation handling stay here because they cut across screens.

use crate::messages::{Command, Message};
use crate::models::AppAction;
use crate::routes::Route;
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    // ---------------------------------------------------------------
    // Delegate to screen-specific reducers first.  When one of them
    // consumes the message we can bail out early.
    // ---------------------------------------------------------------

    if crate::reducers::chat::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::profile::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::content::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::images::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::checklist::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::metrics::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::reputation::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::competitors::update(state, &msg, &mut commands) {
        return commands;
    }

    match msg {
        Message::Login(user) => {
            state.store.save_session(&user);
            state.current_user = Some(user);
            commands.push(Command::update_ui(crate::views::render_app_deferred));
        }

        Message::Logout => {
            state.store.clear_session();
            state.current_user = None;
            commands.push(Command::update_ui(crate::views::render_app_deferred));
        }

        Message::Navigate(route) => {
            if state.route != route {
                state.route = route;
                commands.push(Command::SetHash(route));
                commands.push(Command::update_ui(crate::views::render_app_deferred));
            }
        }

        Message::ApplyAgentAction(action) => {
            // Suggestions may only reference the fixed route set; anything
            // else is dropped here.
            let AppAction::Navigate { path, .. } = action;
            if let Some(route) = Route::parse(&path) {
                commands.push(Command::send(Message::Navigate(route)));
            } else {
                crate::debug_log!("Ignoring navigation suggestion to unknown path {}", path);
            }
        }

        other => {
            crate::debug_log!("Unhandled message: {:?}", other);
        }
    }

    commands
}
