//! Typed persistence over a string key-value backend.
//!
//! Every persisted entity owns exactly one well-known key holding a bare
//! JSON value (no envelope, no schema version).  Writes are
//! last-writer-wins.  The [`Store`] facade adds typed load/save pairs per
//! entity, the chat retention policy, and subscriber callbacks so screens
//! that mirror another screen's data (e.g. the header showing the business
//! name) can refresh without re-reading on a timer.

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::constants::{
    CHAT_HISTORY_KEY, GOOGLE_CONNECTED_KEY, METRICS_KEY, PROFILE_KEY, RETENTION_DAYS, SESSION_KEY,
};
use crate::models::{BusinessProfile, ChatMessage, TrackerEntry, UserProfile};
use crate::{debug_log, error_log};

/// Minimal contract the browser's localStorage fulfils.  Kept as a trait so
/// host-target tests can swap in an in-memory map.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage` wrapper.  Absent storage (e.g. sandboxed iframes)
/// degrades to a no-op rather than crashing the app.
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(s) = self.storage() {
            if s.set_item(key, value).is_err() {
                error_log!("localStorage write failed for key {}", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(s) = self.storage() {
            let _ = s.remove_item(key);
        }
    }
}

/// In-memory backend for unit tests.
#[derive(Default)]
pub struct MemoryBackend {
    map: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.map.borrow_mut().remove(key);
    }
}

type Subscriber = Box<dyn Fn(&str)>;

pub struct Store {
    backend: Box<dyn StorageBackend>,
    // Callbacks invoked with the serialized value after a write to their
    // key.  Callbacks must not dispatch back into the state layer.
    subscribers: RefCell<HashMap<String, Vec<Subscriber>>>,
}

impl Store {
    pub fn with_backend(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            subscribers: RefCell::new(HashMap::new()),
        }
    }

    pub fn local() -> Self {
        Self::with_backend(LocalStorageBackend)
    }

    pub fn memory() -> Self {
        Self::with_backend(MemoryBackend::new())
    }

    pub fn subscribe(&self, key: &str, callback: impl Fn(&str) + 'static) {
        self.subscribers
            .borrow_mut()
            .entry(key.to_string())
            .or_default()
            .push(Box::new(callback));
    }

    fn notify(&self, key: &str, raw: &str) {
        if let Some(subs) = self.subscribers.borrow().get(key) {
            for cb in subs {
                cb(raw);
            }
        }
    }

    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                // A corrupt value behaves like an absent one; the next save
                // overwrites it.
                error_log!("Failed to parse stored value under {}: {}", key, e);
                None
            }
        }
    }

    fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => {
                self.backend.set(key, &raw);
                self.notify(key, &raw);
            }
            Err(e) => error_log!("Failed to serialize value for {}: {}", key, e),
        }
    }

    // ------------------------------------------------------------------
    // Session user
    // ------------------------------------------------------------------

    pub fn load_session(&self) -> Option<UserProfile> {
        self.get_json(SESSION_KEY)
    }

    pub fn save_session(&self, user: &UserProfile) {
        self.set_json(SESSION_KEY, user);
    }

    pub fn clear_session(&self) {
        self.backend.remove(SESSION_KEY);
        self.notify(SESSION_KEY, "null");
    }

    // ------------------------------------------------------------------
    // Business profile
    // ------------------------------------------------------------------

    pub fn load_profile(&self) -> BusinessProfile {
        self.get_json(PROFILE_KEY).unwrap_or_default()
    }

    pub fn save_profile(&self, profile: &BusinessProfile) {
        self.set_json(PROFILE_KEY, profile);
    }

    // ------------------------------------------------------------------
    // Chat transcript
    // ------------------------------------------------------------------

    /// Load the transcript, dropping entries older than the retention
    /// window.  An empty or fully expired history yields the default
    /// welcome message.
    pub fn load_chat_history(&self, now: DateTime<Utc>) -> Vec<ChatMessage> {
        let stored: Vec<ChatMessage> = self.get_json(CHAT_HISTORY_KEY).unwrap_or_default();
        let kept = apply_retention(stored, now);
        if kept.is_empty() {
            vec![ChatMessage::welcome(now)]
        } else {
            kept
        }
    }

    pub fn save_chat_history(&self, messages: &[ChatMessage]) {
        self.set_json(CHAT_HISTORY_KEY, &messages);
    }

    // ------------------------------------------------------------------
    // Tracker entries
    // ------------------------------------------------------------------

    /// Stored rows, or the demo seed when nothing was ever saved.  An
    /// explicitly saved empty list stays empty.
    pub fn load_tracker_entries(&self) -> Vec<TrackerEntry> {
        match self.get_json(METRICS_KEY) {
            Some(entries) => entries,
            None => {
                debug_log!("No tracker data stored, seeding demo weeks");
                crate::constants::default_tracker_entries()
            }
        }
    }

    pub fn save_tracker_entries(&self, entries: &[TrackerEntry]) {
        self.set_json(METRICS_KEY, &entries);
    }

    // ------------------------------------------------------------------
    // Google connection flag
    // ------------------------------------------------------------------

    pub fn google_connected(&self) -> bool {
        self.get_json(GOOGLE_CONNECTED_KEY).unwrap_or(false)
    }

    pub fn set_google_connected(&self, connected: bool) {
        self.set_json(GOOGLE_CONNECTED_KEY, &connected);
    }
}

/// Retention policy: keep only messages younger than [`RETENTION_DAYS`].
pub fn apply_retention(messages: Vec<ChatMessage>, now: DateTime<Utc>) -> Vec<ChatMessage> {
    let cutoff = now - Duration::days(RETENTION_DAYS);
    messages.into_iter().filter(|m| m.timestamp > cutoff).collect()
}
