//! Application shell: header, sidebar navigation, content root.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom_utils::{create, create_text, ensure_styles, on_click, set_active, set_inactive};
use crate::messages::Message;
use crate::routes::Route;
use crate::state::dispatch_global_message;

/// Build the shell once.  Subsequent calls are no-ops so per-screen
/// renders only touch the content root.
pub fn ensure_shell(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id("app-shell").is_some() {
        return Ok(());
    }

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.set_inner_html("");
    ensure_styles(document, "app-styles", APP_CSS);

    let shell = create(document, "div", "app-shell")?;
    shell.set_id("app-shell");

    // ---------------- Header ----------------
    let header = create(document, "header", "app-header")?;
    header.set_id("header");

    let brand = create_text(document, "div", "brand", "GMB Copilot")?;
    header.append_child(&brand)?;

    let business = create(document, "span", "header-business-name")?;
    business.set_id("header-business-name");
    header.append_child(&business)?;

    let session = create(document, "div", "session-box")?;
    let user_name = crate::state::APP_STATE.with(|s| {
        s.borrow()
            .current_user
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_default()
    });
    let avatar = create_text(document, "span", "avatar", &crate::utils::initials(&user_name))?;
    session.append_child(&avatar)?;
    let name_el = create_text(document, "span", "session-name", &user_name)?;
    session.append_child(&name_el)?;

    let logout = create_text(document, "button", "logout-button", "Déconnexion")?;
    on_click(&logout, || dispatch_global_message(Message::Logout))?;
    session.append_child(&logout)?;
    header.append_child(&session)?;
    shell.append_child(&header)?;

    // ---------------- Sidebar ----------------
    let main = create(document, "div", "app-main")?;
    let sidebar = create(document, "nav", "sidebar")?;
    for route in Route::ALL {
        let button = create_text(document, "button", "nav-button", route.label())?;
        button.set_id(&nav_button_id(route));
        on_click(&button, move || {
            dispatch_global_message(Message::Navigate(route))
        })?;
        sidebar.append_child(&button)?;
    }
    main.append_child(&sidebar)?;

    // ---------------- Content root ----------------
    let content = create(document, "main", "content-root")?;
    content.set_id("content-root");
    main.append_child(&content)?;
    shell.append_child(&main)?;

    body.append_child(&shell)?;
    Ok(())
}

fn nav_button_id(route: Route) -> String {
    format!("nav-{}", route.path().trim_start_matches('/'))
}

/// Move the `active` marker to the current route's sidebar entry.
pub fn highlight_nav(document: &Document, active: Route) {
    for route in Route::ALL {
        if let Some(button) = document.get_element_by_id(&nav_button_id(route)) {
            if route == active {
                set_active(&button);
            } else {
                set_inactive(&button);
            }
        }
    }
}

/// Header chip mirroring the stored business name.  Fed both from renders
/// and from the store subscription registered at startup.
pub fn set_header_business_name(name: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = document.get_element_by_id("header-business-name") {
        el.set_text_content(Some(name));
    }
}

pub(crate) const APP_CSS: &str = "
*{box-sizing:border-box;margin:0}
body{background:#2e1065;color:#e2e8f0;font-family:'Segoe UI',Arial,sans-serif}
.app-header{display:flex;align-items:center;gap:16px;padding:12px 24px;background:#1e1b4b;border-bottom:1px solid rgba(99,102,241,.2)}
.brand{font-weight:700;font-size:18px;color:#fff}
.header-business-name{color:#a5b4fc;font-size:13px;flex:1}
.session-box{display:flex;align-items:center;gap:10px}
.avatar{width:32px;height:32px;border-radius:50%;background:#4f46e5;color:#fff;display:flex;align-items:center;justify-content:center;font-size:12px;font-weight:700}
.session-name{font-size:13px;color:#c7d2fe}
.logout-button{background:transparent;border:1px solid rgba(99,102,241,.4);color:#a5b4fc;border-radius:6px;padding:6px 10px;cursor:pointer}
.logout-button:hover{background:rgba(99,102,241,.15)}
.app-main{display:flex;min-height:calc(100vh - 57px)}
.sidebar{display:flex;flex-direction:column;gap:4px;width:220px;padding:16px 10px;background:#1e1b4b;border-right:1px solid rgba(99,102,241,.2)}
.nav-button{text-align:left;background:transparent;border:none;color:#c7d2fe;padding:10px 12px;border-radius:8px;cursor:pointer;font-size:14px}
.nav-button:hover{background:rgba(99,102,241,.15)}
.nav-button.active{background:#4f46e5;color:#fff}
.content-root{flex:1;padding:24px;max-width:1080px}
.card{background:#fff;color:#1e293b;border:1px solid #e2e8f0;border-radius:12px;padding:20px;margin-bottom:16px}
.card h3{margin-bottom:12px}
.screen-title{color:#fff;font-size:22px;font-weight:700;margin-bottom:4px}
.screen-subtitle{color:#a5b4fc;font-size:14px;margin-bottom:20px}
.field-label{display:block;font-size:11px;font-weight:600;color:#64748b;text-transform:uppercase;margin:10px 0 4px}
.text-input,.text-area{width:100%;padding:8px 10px;border:1px solid #cbd5e1;border-radius:8px;font-size:14px}
.text-area{min-height:120px;resize:vertical}
.primary-button{display:inline-flex;align-items:center;gap:8px;background:#4f46e5;color:#fff;border:none;border-radius:8px;padding:10px 18px;font-size:14px;font-weight:600;cursor:pointer}
.primary-button:disabled{background:#94a3b8;cursor:not-allowed}
.danger-button{background:transparent;border:none;color:#dc2626;cursor:pointer}
.error-panel{background:#fef2f2;color:#dc2626;border:1px solid #fecaca;border-radius:8px;padding:12px;margin-bottom:16px}
.hidden{display:none}
.visible{display:block}
";
