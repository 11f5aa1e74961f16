//! Conversational agent loop.
//!
//! Idle -> Awaiting on submit (non-empty input only, one request in
//! flight); Awaiting -> Idle on reply or error.  An error appends a
//! user-visible apology turn – it is an event, not a sticky state.

use chrono::Utc;

use crate::messages::{Command, Message};
use crate::models::{ChatMessage, Role};
use crate::state::{AppState, ChatPhase};

/// Returns `true` when the message was handled by the chat reducer.
pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::ChatInputChanged(value) => {
            state.chat.input = value.clone();
            true
        }

        Message::SendChatMessage => {
            let text = state.chat.input.trim().to_string();
            // Submit guard: no empty turns, no second in-flight request.
            if text.is_empty() || state.chat.phase == ChatPhase::Awaiting {
                return true;
            }

            // The gateway receives the transcript as it was before this
            // turn; the new message travels separately.
            let history: Vec<(Role, String)> = state
                .chat
                .messages
                .iter()
                .map(|m| (m.role, m.text.clone()))
                .collect();

            state
                .chat
                .messages
                .push(ChatMessage::new(Role::User, text.clone(), Utc::now()));
            state.chat.input.clear();
            state.chat.phase = ChatPhase::Awaiting;
            state.store.save_chat_history(&state.chat.messages);

            cmds.push(Command::SendChatTurn {
                message: text,
                history,
            });
            cmds.push(render_chat());
            true
        }

        Message::ChatReplyReceived(reply) => {
            let mut message = ChatMessage::new(Role::Model, reply.text.clone(), Utc::now());
            message.sources = reply.sources.clone();
            message.action = reply.action.clone();
            state.chat.messages.push(message);
            state.chat.phase = ChatPhase::Idle;
            state.store.save_chat_history(&state.chat.messages);
            cmds.push(render_chat());
            true
        }

        Message::ChatRequestFailed(error) => {
            crate::error_log!("Chat turn failed: {}", error);
            state.chat.messages.push(ChatMessage::apology(Utc::now()));
            state.chat.phase = ChatPhase::Idle;
            state.store.save_chat_history(&state.chat.messages);
            cmds.push(render_chat());
            true
        }

        Message::ClearChatHistory => {
            state.chat.messages = vec![ChatMessage::reset_notice(Utc::now())];
            state.store.save_chat_history(&state.chat.messages);
            cmds.push(render_chat());
            true
        }

        _ => false,
    }
}

fn render_chat() -> Command {
    Command::update_ui(|| crate::views::render_if_active(crate::routes::Route::Agent))
}
