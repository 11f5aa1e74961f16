//! Save-then-reload must reproduce the identical value for every persisted
//! entity.

use std::cell::Cell;
use std::rc::Rc;

use chrono::Utc;

use crate::models::{
    AppAction, BusinessProfile, ChatMessage, Role, SourceLink, TrackerEntry, UserProfile,
};
use crate::storage::Store;

#[test]
fn session_round_trip() {
    let store = Store::memory();
    assert!(store.load_session().is_none());

    let user = UserProfile {
        name: "Jeanne Dupont".to_string(),
        email: "jeanne@example.fr".to_string(),
        avatar: "JD".to_string(),
    };
    store.save_session(&user);
    assert_eq!(store.load_session(), Some(user));

    store.clear_session();
    assert!(store.load_session().is_none());
}

#[test]
fn profile_round_trip() {
    let store = Store::memory();
    let profile = BusinessProfile {
        name: "Ma Boulangerie".to_string(),
        industry: "Boulangerie Pâtisserie".to_string(),
        location: "Paris, France".to_string(),
        description: "Pain au levain depuis 1987.".to_string(),
        services: vec!["Pain".to_string(), "Viennoiseries".to_string()],
        website: "https://boulangerie.example".to_string(),
        phone: "+33 1 23 45 67 89".to_string(),
    };
    store.save_profile(&profile);
    assert_eq!(store.load_profile(), profile);
}

#[test]
fn absent_profile_loads_as_default() {
    let store = Store::memory();
    assert_eq!(store.load_profile(), BusinessProfile::default());
}

#[test]
fn chat_history_round_trip_preserves_sources_and_actions() {
    let store = Store::memory();
    let mut message = ChatMessage::new(Role::Model, "Voici la marche à suivre.", Utc::now());
    message.sources = vec![SourceLink {
        uri: "https://support.google.com".to_string(),
        title: "Aide GMB".to_string(),
    }];
    message.action = Some(AppAction::Navigate {
        path: "/profile".to_string(),
        label: "Modifier le profil".to_string(),
    });
    let history = vec![ChatMessage::new(Role::User, "Comment faire ?", Utc::now()), message];

    store.save_chat_history(&history);
    let loaded = store.load_chat_history(Utc::now());
    assert_eq!(loaded, history);
}

#[test]
fn tracker_entries_round_trip_and_seeding() {
    let store = Store::memory();

    // Nothing ever saved: the demo seed appears.
    let seeded = store.load_tracker_entries();
    assert_eq!(seeded.len(), 4);
    assert_eq!(seeded[0].period, "Semaine 1");

    // An explicitly saved empty list stays empty.
    store.save_tracker_entries(&[]);
    assert!(store.load_tracker_entries().is_empty());

    let entries = vec![TrackerEntry {
        id: "42".to_string(),
        period: "Semaine 5".to_string(),
        impressions: 1800,
        clicks: 72,
        calls: 19,
        reviews: 4,
        rating: 4.6,
    }];
    store.save_tracker_entries(&entries);
    assert_eq!(store.load_tracker_entries(), entries);
}

#[test]
fn google_flag_round_trip() {
    let store = Store::memory();
    assert!(!store.google_connected());
    store.set_google_connected(true);
    assert!(store.google_connected());
}

#[test]
fn subscribers_observe_writes_to_their_key() {
    let store = Store::memory();
    let seen = Rc::new(Cell::new(0));
    let seen_clone = Rc::clone(&seen);
    store.subscribe(crate::constants::PROFILE_KEY, move |raw| {
        assert!(raw.contains("Ma Boulangerie"));
        seen_clone.set(seen_clone.get() + 1);
    });

    let profile = BusinessProfile {
        name: "Ma Boulangerie".to_string(),
        ..Default::default()
    };
    store.save_profile(&profile);
    // Writes to other keys stay silent.
    store.set_google_connected(true);

    assert_eq!(seen.get(), 1);
}
