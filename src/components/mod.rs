// Screen components.  Each module owns the DOM of one route and dispatches
// messages back into the update loop; none of them mutate state directly.

pub mod chart;
pub mod chat_view;
pub mod checklist;
pub mod competitors;
pub mod content_generator;
pub mod dashboard;
pub mod image_studio;
pub mod layout;
pub mod login;
pub mod metrics_tracker;
pub mod profile_form;
pub mod prompt_library;
pub mod reputation;
