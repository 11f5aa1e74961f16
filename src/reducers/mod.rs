// One reducer per screen.  Each consumes the messages it owns, mutates its
// slice of `AppState`, and queues commands for side effects.

pub mod chat;
pub mod checklist;
pub mod competitors;
pub mod content;
pub mod images;
pub mod metrics;
pub mod profile;
pub mod reputation;
