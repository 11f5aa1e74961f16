//! Executes the side effects queued by the update layer.  Every gateway
//! call runs in its own `spawn_local` task and re-enters the dispatch loop
//! with a result message.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::gateway;
use crate::messages::{Command, Message};
use crate::state::dispatch_global_message;
use crate::utils::js_error_to_string;

pub fn execute(cmd: Command) {
    match cmd {
        Command::NoOp => {}

        Command::SendMessage(msg) => dispatch_global_message(*msg),

        Command::UpdateUI(update_fn) => update_fn(),

        Command::SetHash(route) => {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_hash(route.path());
            }
        }

        Command::SendChatTurn { message, history } => {
            spawn_local(async move {
                match gateway::send_chat_turn(&message, &history).await {
                    Ok(reply) => dispatch_global_message(Message::ChatReplyReceived(reply)),
                    Err(e) => dispatch_global_message(Message::ChatRequestFailed(
                        js_error_to_string(&e),
                    )),
                }
            });
        }

        Command::GenerateStrategy {
            business_name,
            industry,
            offers,
        } => {
            spawn_local(async move {
                match gateway::generate_marketing_strategy(&business_name, &industry, &offers).await
                {
                    Ok(strategy) => dispatch_global_message(Message::StrategyGenerated(strategy)),
                    Err(e) => {
                        dispatch_global_message(Message::StrategyFailed(js_error_to_string(&e)))
                    }
                }
            });
        }

        Command::GenerateImage { prompt } => {
            spawn_local(async move {
                match gateway::generate_image(&prompt).await {
                    Ok(image) => dispatch_global_message(Message::ImageReady(image)),
                    Err(e) => dispatch_global_message(Message::ImageFailed(js_error_to_string(&e))),
                }
            });
        }

        Command::EditImage {
            data,
            mime_type,
            prompt,
        } => {
            spawn_local(async move {
                match gateway::edit_image(&data, &mime_type, &prompt).await {
                    Ok(image) => dispatch_global_message(Message::ImageReady(image)),
                    Err(e) => dispatch_global_message(Message::ImageFailed(js_error_to_string(&e))),
                }
            });
        }

        Command::AssessReview {
            review_id,
            review_text,
            rating,
            author,
            business_name,
        } => {
            spawn_local(async move {
                match gateway::generate_review_response(
                    &review_text,
                    rating,
                    &author,
                    &business_name,
                )
                .await
                {
                    Ok(assessment) => dispatch_global_message(Message::ReviewAssessed {
                        review_id,
                        assessment,
                    }),
                    Err(e) => dispatch_global_message(Message::ReviewAssessmentFailed {
                        review_id,
                        error: js_error_to_string(&e),
                    }),
                }
            });
        }

        Command::AnalyzeCompetitors {
            my_business,
            competitors,
        } => {
            spawn_local(async move {
                match gateway::analyze_competitors(&my_business, &competitors).await {
                    Ok(results) => dispatch_global_message(Message::CompetitorsAnalyzed(results)),
                    Err(e) => dispatch_global_message(Message::CompetitorAnalysisFailed(
                        js_error_to_string(&e),
                    )),
                }
            });
        }

        Command::ConnectGoogle => {
            // Simulated account link: a fixed authentication delay, then
            // the flag flips.
            spawn_local(async {
                TimeoutFuture::new(1_500).await;
                dispatch_global_message(Message::GoogleConnected);
            });
        }

        Command::ScheduleSaveFlashEnd => {
            spawn_local(async {
                TimeoutFuture::new(2_000).await;
                dispatch_global_message(Message::ProfileSaveFlashEnded);
            });
        }
    }
}
