//! View router: maps the active route onto its screen component inside the
//! shell's content root, or shows the login form when no session exists.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::components;
use crate::routes::Route;
use crate::state::{AppState, APP_STATE};

/// Render the whole application: login form without a session, otherwise
/// the shell plus the active screen.
pub fn render_app(document: &Document) -> Result<(), JsValue> {
    let logged_in = APP_STATE.with(|s| s.borrow().current_user.is_some());
    if !logged_in {
        return components::login::render(document);
    }
    components::layout::ensure_shell(document)?;
    render_active_view(document)
}

/// `FnOnce` adapter for `Command::update_ui` – looks the document up itself
/// and logs instead of propagating, since there is no caller to hand the
/// error to inside a deferred closure.
pub fn render_app_deferred() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Err(e) = render_app(&document) {
        crate::error_log!("Failed to render app: {:?}", e);
    }
}

/// Rebuild only the content root for the current route.
pub fn render_active_view(document: &Document) -> Result<(), JsValue> {
    APP_STATE.with(|state_ref| {
        let state = state_ref.borrow();
        render_content(document, &state)
    })
}

/// Re-render the content root only when `route` is the active screen.
/// Reducers use this so a background reply never clobbers another screen.
pub fn render_if_active(route: Route) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let is_active = APP_STATE.with(|s| s.borrow().route == route);
    if is_active {
        if let Err(e) = render_active_view(&document) {
            crate::error_log!("Failed to refresh {:?}: {:?}", route, e);
        }
    }
}

fn render_content(document: &Document, state: &AppState) -> Result<(), JsValue> {
    components::layout::highlight_nav(document, state.route);
    components::layout::set_header_business_name(&state.profile.profile.name);

    let root = document
        .get_element_by_id("content-root")
        .ok_or_else(|| JsValue::from_str("content root not found"))?;
    root.set_inner_html("");

    match state.route {
        Route::Agent => components::chat_view::render(document, &root, state),
        Route::Dashboard => components::dashboard::render(document, &root, state),
        Route::Profile => components::profile_form::render(document, &root, state),
        Route::Content => components::content_generator::render(document, &root, state),
        Route::Images => components::image_studio::render(document, &root, state),
        Route::Checklist => components::checklist::render(document, &root, state),
        Route::Metrics => components::metrics_tracker::render(document, &root, state),
        Route::Reputation => components::reputation::render(document, &root, state),
        Route::Competitors => components::competitors::render(document, &root, state),
        Route::Prompts => components::prompt_library::render(document, &root, state),
    }
}
