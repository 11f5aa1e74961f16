//! Business profile editing.  Every change persists immediately; the save
//! button only adds the confirmation flash on top.

use crate::messages::{Command, Message, ProfileField};
use crate::state::AppState;

/// Returns `true` when the message was handled by the profile reducer.
pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::ProfileFieldChanged(field, value) => {
            let profile = &mut state.profile.profile;
            match field {
                ProfileField::Name => profile.name = value.clone(),
                ProfileField::Industry => profile.industry = value.clone(),
                ProfileField::Location => profile.location = value.clone(),
                ProfileField::Description => profile.description = value.clone(),
                ProfileField::Website => profile.website = value.clone(),
                ProfileField::Phone => profile.phone = value.clone(),
            }
            state.store.save_profile(&state.profile.profile);
            // Typing must not rebuild the form (focus would be lost); the
            // DOM input already shows the value.  Only the description
            // counter mirrors keystrokes.
            if *field == ProfileField::Description {
                let count = state.profile.description_grapheme_count();
                cmds.push(Command::update_ui(move || {
                    crate::components::profile_form::update_description_counter(count);
                }));
            }
            true
        }

        Message::ProfileServiceChanged { index, value } => {
            if let Some(slot) = state.profile.profile.services.get_mut(*index) {
                *slot = value.clone();
                state.store.save_profile(&state.profile.profile);
            }
            true
        }

        Message::ProfileServiceAdded => {
            state.profile.profile.services.push(String::new());
            state.store.save_profile(&state.profile.profile);
            cmds.push(render_profile());
            true
        }

        Message::ProfileServiceRemoved(index) => {
            if *index < state.profile.profile.services.len() {
                state.profile.profile.services.remove(*index);
                state.store.save_profile(&state.profile.profile);
                cmds.push(render_profile());
            }
            true
        }

        Message::SaveProfile => {
            state.store.save_profile(&state.profile.profile);
            state.profile.saved_flash = true;
            cmds.push(Command::ScheduleSaveFlashEnd);
            cmds.push(render_profile());
            true
        }

        Message::ProfileSaveFlashEnded => {
            state.profile.saved_flash = false;
            cmds.push(render_profile());
            true
        }

        Message::ConnectGoogle => {
            if state.profile.connecting || state.profile.google_connected {
                return true;
            }
            state.profile.connecting = true;
            cmds.push(Command::ConnectGoogle);
            cmds.push(render_profile());
            true
        }

        Message::GoogleConnected => {
            state.profile.connecting = false;
            state.profile.google_connected = true;
            state.store.set_google_connected(true);
            cmds.push(render_profile());
            true
        }

        _ => false,
    }
}

fn render_profile() -> Command {
    Command::update_ui(|| crate::views::render_if_active(crate::routes::Route::Profile))
}
