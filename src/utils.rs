use chrono::{DateTime, Utc};

/// Fresh identifier for transcript entries and tracker rows.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// "HH:MM" stamp shown under chat bubbles, in the viewer's local time.
#[cfg(target_arch = "wasm32")]
pub fn short_time(ts: &DateTime<Utc>) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(
        ts.timestamp_millis() as f64
    ));
    format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn short_time(ts: &DateTime<Utc>) -> String {
    ts.format("%H:%M").to_string()
}

/// Uppercase initials used as the session avatar, e.g. "Jeanne D" -> "JD".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Best-effort clipboard write.  The returned promise is intentionally not
/// awaited – a failed copy only misses the confirmation flash.
#[cfg(target_arch = "wasm32")]
pub fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn copy_to_clipboard(_text: &str) {}

/// Human-readable rendering of a JS error for screen-boundary messages.
pub fn js_error_to_string(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_takes_first_two_words() {
        assert_eq!(initials("Jeanne Dupont"), "JD");
        assert_eq!(initials("madame"), "M");
        assert_eq!(initials(""), "");
    }
}
