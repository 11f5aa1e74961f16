//! Login form shown while no session user is stored.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom_utils::{create, create_text, ensure_styles, input_value, on_click};
use crate::messages::Message;
use crate::models::UserProfile;
use crate::state::dispatch_global_message;

pub fn render(document: &Document) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.set_inner_html("");
    ensure_styles(document, "app-styles", super::layout::APP_CSS);
    ensure_styles(document, "login-styles", LOGIN_CSS);

    let wrap = create(document, "div", "login-wrap")?;
    let card = create(document, "div", "login-card")?;

    card.append_child(&create_text(document, "h1", "login-title", "GMB Copilot")?.into())?;
    card.append_child(&create_text(
        document,
        "p",
        "login-subtitle",
        "Connectez-vous pour gérer votre présence Google Business Profile.",
    )?.into())?;

    card.append_child(&create_text(document, "label", "field-label", "Nom")?.into())?;
    let name = create(document, "input", "text-input")?;
    name.set_id("login-name");
    name.set_attribute("placeholder", "Ex: Jeanne Dupont")?;
    card.append_child(&name)?;

    card.append_child(&create_text(document, "label", "field-label", "Email")?.into())?;
    let email = create(document, "input", "text-input")?;
    email.set_id("login-email");
    email.set_attribute("type", "email")?;
    email.set_attribute("placeholder", "vous@entreprise.fr")?;
    card.append_child(&email)?;

    let submit = create_text(document, "button", "primary-button login-submit", "Se connecter")?;
    {
        let document = document.clone();
        on_click(&submit, move || {
            let name = input_value(&document, "login-name");
            let email = input_value(&document, "login-email");
            if name.trim().is_empty() || email.trim().is_empty() {
                crate::toast::error("Veuillez renseigner votre nom et votre email.");
                return;
            }
            let avatar = crate::utils::initials(&name);
            dispatch_global_message(Message::Login(UserProfile {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                avatar,
            }));
        })?;
    }
    card.append_child(&submit)?;

    wrap.append_child(&card)?;
    body.append_child(&wrap)?;
    Ok(())
}

const LOGIN_CSS: &str = "
.login-wrap{min-height:100vh;display:flex;align-items:center;justify-content:center}
.login-card{background:#1e1b4b;border:1px solid rgba(99,102,241,.3);border-radius:16px;padding:32px;width:360px}
.login-card .text-input{margin-bottom:4px;background:#111827;border-color:rgba(99,102,241,.3);color:#fff}
.login-title{color:#fff;font-size:22px;margin-bottom:4px}
.login-subtitle{color:#a5b4fc;font-size:13px;margin-bottom:16px}
.login-submit{width:100%;justify-content:center;margin-top:16px}
";
