//! Content strategy generator: profile-seeded form, one gateway round trip,
//! description plus eight post cards.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement};

use crate::dom_utils::{create, create_text, ensure_styles, on_click, on_input};
use crate::messages::{ContentField, Message};
use crate::state::{dispatch_global_message, AppState};

pub fn render(document: &Document, root: &Element, state: &AppState) -> Result<(), JsValue> {
    ensure_styles(document, "content-styles", CONTENT_CSS);

    root.append_child(&create_text(
        document,
        "h2",
        "screen-title",
        "Générateur de Stratégie de Contenu",
    )?.into())?;
    root.append_child(&create_text(
        document,
        "p",
        "screen-subtitle",
        "Utilise Gemini 3 Pro (Mode Pensée) pour analyser votre entreprise et créer 8 Google Posts optimisés + une description d'entreprise.",
    )?.into())?;

    // ---------------- Form ----------------
    let form = create(document, "div", "card")?;

    if state.content.seeded_from_profile {
        form.append_child(&create_text(
            document,
            "div",
            "seed-note",
            "Informations pré-remplies depuis votre Profil GMB. Vous pouvez les modifier pour cette génération spécifique.",
        )?.into())?;
    }

    form.append_child(&create_text(document, "label", "field-label", "Nom de l'entreprise")?.into())?;
    let name = create(document, "input", "text-input")?;
    name.set_attribute("placeholder", "ex: Pizza chez Joe")?;
    if let Some(el) = name.dyn_ref::<HtmlInputElement>() {
        el.set_value(&state.content.business_name);
    }
    on_input(&name, |value| {
        dispatch_global_message(Message::ContentFieldChanged(ContentField::BusinessName, value))
    })?;
    form.append_child(&name)?;

    form.append_child(&create_text(document, "label", "field-label", "Industrie / Catégorie")?.into())?;
    let industry = create(document, "input", "text-input")?;
    industry.set_attribute("placeholder", "ex: Restaurant Italien")?;
    if let Some(el) = industry.dyn_ref::<HtmlInputElement>() {
        el.set_value(&state.content.industry);
    }
    on_input(&industry, |value| {
        dispatch_global_message(Message::ContentFieldChanged(ContentField::Industry, value))
    })?;
    form.append_child(&industry)?;

    form.append_child(&create_text(
        document,
        "label",
        "field-label",
        "Offres Clés / Focus / Services",
    )?.into())?;
    let offers = create(document, "textarea", "text-area offers-area")?;
    offers.set_attribute(
        "placeholder",
        "ex: -50% sur le menu midi, four à bois, ambiance familiale, nouveau menu végétalien...",
    )?;
    if let Some(el) = offers.dyn_ref::<HtmlTextAreaElement>() {
        el.set_value(&state.content.offers);
    }
    on_input(&offers, |value| {
        dispatch_global_message(Message::ContentFieldChanged(ContentField::Offers, value))
    })?;
    form.append_child(&offers)?;

    let submit_label = if state.content.loading {
        "Génération de la Stratégie (Réflexion)..."
    } else {
        "Générer le Plan de Contenu"
    };
    let submit = create_text(document, "button", "primary-button generate-button", submit_label)?;
    if let Some(button) = submit.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(state.content.loading);
    }
    on_click(&submit, || dispatch_global_message(Message::GenerateStrategy))?;
    form.append_child(&submit)?;
    root.append_child(&form)?;

    // ---------------- Error ----------------
    if let Some(error) = &state.content.error {
        root.append_child(&create_text(document, "div", "error-panel", error)?.into())?;
    }

    // ---------------- Result ----------------
    if let Some(result) = &state.content.result {
        let desc_card = create(document, "div", "card")?;
        let desc_header = create(document, "div", "result-header")?;
        desc_header.append_child(&create_text(
            document,
            "h3",
            "",
            "Description de l'entreprise (Générée)",
        )?.into())?;
        let copy_desc = create_text(document, "button", "copy-button", "Copier")?;
        let description = result.description.clone();
        on_click(&copy_desc, move || {
            crate::utils::copy_to_clipboard(&description);
            crate::toast::success("Copié dans le presse-papier");
        })?;
        desc_header.append_child(&copy_desc)?;
        desc_card.append_child(&desc_header)?;
        desc_card.append_child(&create_text(document, "p", "description-text", &result.description)?.into())?;
        root.append_child(&desc_card)?;

        root.append_child(&create_text(document, "h3", "posts-title", "Posts Générés")?.into())?;
        let grid = create(document, "div", "posts-grid")?;
        for post in &result.posts {
            let card = create(document, "div", "card post-card")?;
            let post_header = create(document, "div", "result-header")?;
            post_header.append_child(&create_text(
                document,
                "span",
                &post_type_class(&post.kind),
                &post.kind,
            )?.into())?;
            let copy = create_text(document, "button", "copy-button", "Copier")?;
            let content = post.content.clone();
            on_click(&copy, move || {
                crate::utils::copy_to_clipboard(&content);
                crate::toast::success("Copié dans le presse-papier");
            })?;
            post_header.append_child(&copy)?;
            card.append_child(&post_header)?;
            card.append_child(&create_text(document, "h4", "post-title", &post.title)?.into())?;
            card.append_child(&create_text(document, "p", "post-content", &post.content)?.into())?;
            grid.append_child(&card)?;
        }
        root.append_child(&grid)?;
    }

    Ok(())
}

fn post_type_class(kind: &str) -> String {
    let lower = kind.to_lowercase();
    if lower.contains("offer") || lower.contains("offre") {
        "post-type offer".to_string()
    } else if lower.contains("event") || lower.contains("événement") {
        "post-type event".to_string()
    } else {
        "post-type update".to_string()
    }
}

const CONTENT_CSS: &str = "
.seed-note{background:#eff6ff;color:#1d4ed8;border-radius:8px;padding:10px;font-size:13px;margin-bottom:12px}
.offers-area{min-height:80px}
.generate-button{width:100%;justify-content:center;margin-top:16px}
.result-header{display:flex;justify-content:space-between;align-items:center;margin-bottom:8px}
.copy-button{background:#f8fafc;border:1px solid #e2e8f0;color:#64748b;border-radius:6px;padding:4px 10px;font-size:12px;cursor:pointer}
.copy-button:hover{color:#4f46e5}
.description-text{white-space:pre-wrap;color:#475569;font-size:14px;line-height:1.6}
.posts-title{color:#fff;margin:16px 0 12px}
.posts-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(300px,1fr));gap:16px}
.post-card{margin-bottom:0}
.post-type{font-size:11px;font-weight:600;border-radius:999px;padding:3px 10px}
.post-type.update{background:#dbeafe;color:#1d4ed8}
.post-type.offer{background:#dcfce7;color:#15803d}
.post-type.event{background:#f3e8ff;color:#7e22ce}
.post-title{margin-bottom:6px}
.post-content{white-space:pre-wrap;color:#475569;font-size:13px}
";
