//! Competitor analysis.  Findings are transient: one request, one grid of
//! cards, nothing persisted.

use crate::constants::COMPETITOR_ERROR_TEXT;
use crate::messages::{Command, Message};
use crate::state::AppState;

/// Returns `true` when the message was handled by the competitor reducer.
pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::CompetitorsInputChanged(value) => {
            state.competitors.input = value.clone();
            true
        }

        Message::AnalyzeCompetitors => {
            if state.competitors.loading {
                return true;
            }
            let names: Vec<String> = state
                .competitors
                .input
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if names.is_empty() {
                return true;
            }

            state.competitors.loading = true;
            cmds.push(Command::AnalyzeCompetitors {
                my_business: state.business_name_or_default(),
                competitors: names,
            });
            cmds.push(render_competitors());
            true
        }

        Message::CompetitorsAnalyzed(results) => {
            state.competitors.loading = false;
            state.competitors.results = results.clone();
            cmds.push(render_competitors());
            true
        }

        Message::CompetitorAnalysisFailed(error) => {
            crate::error_log!("Competitor analysis failed: {}", error);
            state.competitors.loading = false;
            cmds.push(Command::update_ui(|| {
                crate::toast::error(COMPETITOR_ERROR_TEXT);
            }));
            cmds.push(render_competitors());
            true
        }

        _ => false,
    }
}

fn render_competitors() -> Command {
    Command::update_ui(|| crate::views::render_if_active(crate::routes::Route::Competitors))
}
