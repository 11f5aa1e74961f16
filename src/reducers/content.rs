//! Content strategy generator.

use crate::constants::STRATEGY_ERROR_TEXT;
use crate::messages::{Command, ContentField, Message};
use crate::state::AppState;

/// Returns `true` when the message was handled by the content reducer.
pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::ContentFieldChanged(field, value) => {
            match field {
                ContentField::BusinessName => state.content.business_name = value.clone(),
                ContentField::Industry => state.content.industry = value.clone(),
                ContentField::Offers => state.content.offers = value.clone(),
            }
            true
        }

        Message::GenerateStrategy => {
            // Required fields block the call client-side; the gateway is
            // never reached with an incomplete form.
            if state.content.business_name.trim().is_empty()
                || state.content.industry.trim().is_empty()
                || state.content.loading
            {
                return true;
            }
            state.content.loading = true;
            state.content.error = None;
            state.content.result = None;
            cmds.push(Command::GenerateStrategy {
                business_name: state.content.business_name.clone(),
                industry: state.content.industry.clone(),
                offers: state.content.offers.clone(),
            });
            cmds.push(render_content());
            true
        }

        Message::StrategyGenerated(result) => {
            state.content.loading = false;
            state.content.result = Some(result.clone());
            cmds.push(render_content());
            true
        }

        Message::StrategyFailed(error) => {
            crate::error_log!("Strategy generation failed: {}", error);
            state.content.loading = false;
            state.content.error = Some(STRATEGY_ERROR_TEXT.to_string());
            cmds.push(render_content());
            true
        }

        _ => false,
    }
}

fn render_content() -> Command {
    Command::update_ui(|| crate::views::render_if_active(crate::routes::Route::Content))
}
