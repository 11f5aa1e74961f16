//! Image studio: generate from scratch or edit a captured image.

use crate::constants::{IMAGE_ERROR_TEXT, IMAGE_MISSING_SOURCE_TEXT};
use crate::messages::{Command, Message};
use crate::state::{AppState, StudioMode};

/// Returns `true` when the message was handled by the image reducer.
pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::StudioModeSelected(mode) => {
            state.images.mode = *mode;
            state.images.prompt.clear();
            state.images.result = None;
            state.images.error = None;
            cmds.push(render_studio());
            true
        }

        Message::ImagePromptChanged(value) => {
            state.images.prompt = value.clone();
            true
        }

        Message::SourceImageLoaded { mime_type, data } => {
            state.images.source = Some(crate::models::ImagePayload {
                mime_type: mime_type.clone(),
                data: data.clone(),
            });
            cmds.push(render_studio());
            true
        }

        Message::SubmitImageRequest => {
            if state.images.prompt.trim().is_empty() || state.images.loading {
                return true;
            }
            if state.images.mode == StudioMode::Edit && state.images.source.is_none() {
                state.images.error = Some(IMAGE_MISSING_SOURCE_TEXT.to_string());
                cmds.push(render_studio());
                return true;
            }

            state.images.loading = true;
            state.images.error = None;
            state.images.result = None;
            let prompt = state.images.prompt.clone();
            match (state.images.mode, &state.images.source) {
                (StudioMode::Edit, Some(source)) => cmds.push(Command::EditImage {
                    data: source.data.clone(),
                    mime_type: source.mime_type.clone(),
                    prompt,
                }),
                _ => cmds.push(Command::GenerateImage { prompt }),
            }
            cmds.push(render_studio());
            true
        }

        Message::ImageReady(image) => {
            state.images.loading = false;
            state.images.result = Some(image.clone());
            cmds.push(render_studio());
            true
        }

        Message::ImageFailed(error) => {
            crate::error_log!("Image request failed: {}", error);
            state.images.loading = false;
            state.images.error = Some(IMAGE_ERROR_TEXT.to_string());
            cmds.push(render_studio());
            true
        }

        _ => false,
    }
}

fn render_studio() -> Command {
    Command::update_ui(|| crate::views::render_if_active(crate::routes::Route::Images))
}
