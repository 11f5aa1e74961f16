//! Manual performance tracker.  Rows are user-appended, individually
//! deletable, and persisted on every change.

use crate::messages::{Command, Message, TrackerField};
use crate::models::TrackerEntry;
use crate::state::{AppState, TrackerForm};

/// Returns `true` when the message was handled by the metrics reducer.
pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::TrackerFieldChanged(field, value) => {
            let form = &mut state.metrics.form;
            match field {
                TrackerField::Period => form.period = value.clone(),
                TrackerField::Impressions => form.impressions = value.parse().unwrap_or(0),
                TrackerField::Clicks => form.clicks = value.parse().unwrap_or(0),
                TrackerField::Calls => form.calls = value.parse().unwrap_or(0),
                TrackerField::Reviews => form.reviews = value.parse().unwrap_or(0),
                TrackerField::Rating => form.rating = value.parse().unwrap_or(0.0),
            }
            true
        }

        Message::AddTrackerEntry => {
            if state.metrics.form.period.trim().is_empty() {
                return true;
            }
            let form = &state.metrics.form;
            state.metrics.entries.push(TrackerEntry {
                id: crate::utils::new_id(),
                period: form.period.clone(),
                impressions: form.impressions,
                clicks: form.clicks,
                calls: form.calls,
                reviews: form.reviews,
                rating: form.rating,
            });
            state.metrics.form = TrackerForm::empty();
            state.store.save_tracker_entries(&state.metrics.entries);
            cmds.push(render_metrics());
            true
        }

        Message::DeleteTrackerEntry(id) => {
            state.metrics.entries.retain(|e| &e.id != id);
            state.store.save_tracker_entries(&state.metrics.entries);
            cmds.push(render_metrics());
            true
        }

        _ => false,
    }
}

fn render_metrics() -> Command {
    Command::update_ui(|| crate::views::render_if_active(crate::routes::Route::Metrics))
}
