//! Reputation manager.  Sentiment and the drafted owner response are filled
//! in once per review and then treated as immutable.

use crate::constants::REVIEW_ERROR_TEXT;
use crate::messages::{Command, Message};
use crate::state::AppState;

/// Returns `true` when the message was handled by the reputation reducer.
pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::GenerateReviewReply(review_id) => {
            // One outstanding assessment per screen.
            if state.reputation.loading_id.is_some() {
                return true;
            }
            let Some(review) = state
                .reputation
                .reviews
                .iter()
                .find(|r| &r.id == review_id)
                .cloned()
            else {
                return true;
            };
            if review.sentiment.is_some() {
                // Already assessed; the result is immutable.
                return true;
            }

            state.reputation.loading_id = Some(review.id.clone());
            cmds.push(Command::AssessReview {
                review_id: review.id.clone(),
                review_text: review.text.clone(),
                rating: review.rating,
                author: review.author.clone(),
                business_name: state.business_name_or_default(),
            });
            cmds.push(render_reputation());
            true
        }

        Message::ReviewAssessed {
            review_id,
            assessment,
        } => {
            if let Some(review) = state
                .reputation
                .reviews
                .iter_mut()
                .find(|r| &r.id == review_id)
            {
                if review.sentiment.is_none() {
                    review.sentiment = Some(assessment.sentiment);
                    review.response = Some(assessment.response.clone());
                }
            }
            state.reputation.loading_id = None;
            cmds.push(render_reputation());
            true
        }

        Message::ReviewAssessmentFailed { review_id, error } => {
            crate::error_log!("Review assessment failed for {}: {}", review_id, error);
            state.reputation.loading_id = None;
            cmds.push(Command::update_ui(|| {
                crate::toast::error(REVIEW_ERROR_TEXT);
            }));
            cmds.push(render_reputation());
            true
        }

        _ => false,
    }
}

fn render_reputation() -> Command {
    Command::update_ui(|| crate::views::render_if_active(crate::routes::Route::Reputation))
}
