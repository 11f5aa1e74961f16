use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod command_executors;
pub mod components;
pub mod constants;
pub mod dom_utils;
pub mod gateway;
pub mod macros;
pub mod messages;
pub mod models;
pub mod reducers;
pub mod routes;
pub mod state;
pub mod storage;
pub mod toast;
pub mod update;
pub mod utils;
pub mod views;

#[cfg(test)]
mod tests;

use routes::Route;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    // Seed every screen container from persistent storage before the first
    // render, honoring the chat retention window.
    let initial_route = Route::from_hash(&window.location().hash().unwrap_or_default());
    state::APP_STATE.with(|state_ref| {
        let mut app_state = state_ref.borrow_mut();
        app_state.boot(initial_route);

        // The header mirrors the stored business name; keep it fresh when
        // any screen writes the profile key.
        app_state
            .store
            .subscribe(constants::PROFILE_KEY, |raw| {
                if let Ok(profile) = serde_json::from_str::<models::BusinessProfile>(raw) {
                    components::layout::set_header_business_name(&profile.name);
                }
            });
    });

    views::render_app(&document)?;
    setup_hashchange_listener(&window)?;

    Ok(())
}

// Keep the app in sync with back/forward navigation and hand-edited hashes.
fn setup_hashchange_listener(window: &web_sys::Window) -> Result<(), JsValue> {
    let on_hashchange = Closure::wrap(Box::new(move |_: web_sys::HashChangeEvent| {
        let Some(window) = web_sys::window() else { return };
        let hash = window.location().hash().unwrap_or_default();
        // Navigating to the already-active route is a no-op in the reducer,
        // so the hash write performed by `Command::SetHash` does not loop.
        state::dispatch_global_message(messages::Message::Navigate(Route::from_hash(&hash)));
    }) as Box<dyn FnMut(_)>);

    window.add_event_listener_with_callback("hashchange", on_hashchange.as_ref().unchecked_ref())?;
    on_hashchange.forget();
    Ok(())
}
