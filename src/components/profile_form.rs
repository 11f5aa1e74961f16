//! Business profile editor: identity, contact, description with grapheme
//! counter, dynamic services list and the (simulated) Google account link.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

use crate::constants::DESCRIPTION_LIMIT;
use crate::dom_utils::{create, create_text, ensure_styles, on_click, on_input};
use crate::messages::{Message, ProfileField};
use crate::state::{dispatch_global_message, AppState};

pub fn render(document: &Document, root: &Element, state: &AppState) -> Result<(), JsValue> {
    ensure_styles(document, "profile-styles", PROFILE_CSS);

    // ---------------- Title + save ----------------
    let header = create(document, "div", "profile-header")?;
    let title_box = create(document, "div", "")?;
    title_box.append_child(&create_text(document, "h2", "screen-title", "Profil GMB")?.into())?;
    title_box.append_child(&create_text(
        document,
        "p",
        "screen-subtitle",
        "Gérez les informations clés de votre fiche Google Business Profile.",
    )?.into())?;
    header.append_child(&title_box)?;

    let save_label = if state.profile.saved_flash { "Enregistré" } else { "Enregistrer" };
    let save = create_text(document, "button", "primary-button", save_label)?;
    on_click(&save, || dispatch_global_message(Message::SaveProfile))?;
    header.append_child(&save)?;
    root.append_child(&header)?;

    // ---------------- Google connection ----------------
    let google = create(document, "div", "card google-card")?;
    let text_box = create(document, "div", "")?;
    text_box.append_child(&create_text(document, "h3", "", "Compte Google")?.into())?;
    let status_text = if state.profile.google_connected {
        "Votre profil est authentifié et lié à votre compte Google Business Profile."
    } else {
        "Connectez votre compte Google pour synchroniser les données GMB."
    };
    text_box.append_child(&create_text(document, "p", "google-status", status_text)?.into())?;
    google.append_child(&text_box)?;

    if state.profile.google_connected {
        google.append_child(&create_text(document, "span", "connected-pill", "Authentifié")?.into())?;
    } else {
        let label = if state.profile.connecting { "Connexion..." } else { "Connecter avec Google" };
        let connect = create_text(document, "button", "google-button", label)?;
        on_click(&connect, || dispatch_global_message(Message::ConnectGoogle))?;
        google.append_child(&connect)?;
    }
    root.append_child(&google)?;

    // ---------------- Identity ----------------
    let identity = create(document, "div", "card")?;
    identity.append_child(&create_text(document, "h3", "", "Identité")?.into())?;
    identity.append_child(&text_field(
        document,
        "Nom de l'entreprise",
        "Ex: Ma Boulangerie",
        &state.profile.profile.name,
        ProfileField::Name,
    )?.into())?;
    identity.append_child(&text_field(
        document,
        "Catégorie / Industrie",
        "Ex: Boulangerie Pâtisserie",
        &state.profile.profile.industry,
        ProfileField::Industry,
    )?.into())?;
    identity.append_child(&text_field(
        document,
        "Localisation",
        "Ex: Paris, France",
        &state.profile.profile.location,
        ProfileField::Location,
    )?.into())?;
    root.append_child(&identity)?;

    // ---------------- Contact ----------------
    let contact = create(document, "div", "card")?;
    contact.append_child(&create_text(document, "h3", "", "Contact")?.into())?;
    contact.append_child(&text_field(
        document,
        "Site Web",
        "https://...",
        &state.profile.profile.website,
        ProfileField::Website,
    )?.into())?;
    contact.append_child(&text_field(
        document,
        "Téléphone",
        "+33 ...",
        &state.profile.profile.phone,
        ProfileField::Phone,
    )?.into())?;
    root.append_child(&contact)?;

    // ---------------- Description ----------------
    let desc_card = create(document, "div", "card")?;
    desc_card.append_child(&create_text(document, "h3", "", "Description GMB")?.into())?;
    let area = create(document, "textarea", "text-area")?;
    area.set_attribute("placeholder", "Description de votre entreprise...")?;
    if let Some(area_el) = area.dyn_ref::<HtmlTextAreaElement>() {
        area_el.set_value(&state.profile.profile.description);
    }
    on_input(&area, |value| {
        dispatch_global_message(Message::ProfileFieldChanged(ProfileField::Description, value))
    })?;
    desc_card.append_child(&area)?;

    // The counter is filled in directly here - the element is not reachable
    // through getElementById until this subtree lands in the document.
    let count = state.profile.description_grapheme_count();
    let counter = create_text(
        document,
        "div",
        if count > DESCRIPTION_LIMIT {
            "description-counter over-limit"
        } else {
            "description-counter"
        },
        &format!("{} / {} caractères", count, DESCRIPTION_LIMIT),
    )?;
    counter.set_id("description-counter");
    desc_card.append_child(&counter)?;

    desc_card.append_child(&create_text(
        document,
        "p",
        "hint",
        "Cette description est utilisée comme contexte pour générer vos posts et optimiser votre fiche.",
    )?.into())?;
    root.append_child(&desc_card)?;

    // ---------------- Services ----------------
    let services_card = create(document, "div", "card")?;
    let services_header = create(document, "div", "services-header")?;
    services_header.append_child(&create_text(document, "h3", "", "Services & Offres Clés")?.into())?;
    let add = create_text(document, "button", "add-service", "+ Ajouter")?;
    on_click(&add, || dispatch_global_message(Message::ProfileServiceAdded))?;
    services_header.append_child(&add)?;
    services_card.append_child(&services_header)?;

    for (index, service) in state.profile.profile.services.iter().enumerate() {
        let row = create(document, "div", "service-row")?;
        let input = create(document, "input", "text-input")?;
        input.set_attribute("placeholder", "Service ou offre...")?;
        if let Some(input_el) = input.dyn_ref::<HtmlInputElement>() {
            input_el.set_value(service);
        }
        on_input(&input, move |value| {
            dispatch_global_message(Message::ProfileServiceChanged { index, value })
        })?;
        row.append_child(&input)?;

        let remove = create_text(document, "button", "danger-button", "×")?;
        on_click(&remove, move || {
            dispatch_global_message(Message::ProfileServiceRemoved(index))
        })?;
        row.append_child(&remove)?;
        services_card.append_child(&row)?;
    }
    if state.profile.profile.services.is_empty() {
        services_card.append_child(&create_text(
            document,
            "p",
            "hint",
            "Aucun service ajouté. Cliquez sur Ajouter.",
        )?.into())?;
    }
    root.append_child(&services_card)?;

    Ok(())
}

fn text_field(
    document: &Document,
    label: &str,
    placeholder: &str,
    value: &str,
    field: ProfileField,
) -> Result<Element, JsValue> {
    let wrap = create(document, "div", "")?;
    wrap.append_child(&create_text(document, "label", "field-label", label)?.into())?;
    let input = create(document, "input", "text-input")?;
    input.set_attribute("placeholder", placeholder)?;
    if let Some(input_el) = input.dyn_ref::<HtmlInputElement>() {
        input_el.set_value(value);
    }
    on_input(&input, move |value| {
        dispatch_global_message(Message::ProfileFieldChanged(field, value))
    })?;
    wrap.append_child(&input)?;
    Ok(wrap)
}

/// Refresh the "N / 750 caractères" counter without re-rendering the form.
pub fn update_description_counter(count: usize) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(counter) = document.get_element_by_id("description-counter") {
        counter.set_text_content(Some(&format!("{} / {} caractères", count, DESCRIPTION_LIMIT)));
        counter.set_class_name(if count > DESCRIPTION_LIMIT {
            "description-counter over-limit"
        } else {
            "description-counter"
        });
    }
}

const PROFILE_CSS: &str = "
.profile-header{display:flex;justify-content:space-between;align-items:flex-start;margin-bottom:16px}
.google-card{display:flex;justify-content:space-between;align-items:center;gap:16px}
.google-status{color:#64748b;font-size:13px}
.google-button{background:#fff;border:1px solid #cbd5e1;color:#334155;border-radius:8px;padding:8px 14px;cursor:pointer}
.connected-pill{background:#f0fdf4;color:#15803d;border:1px solid #bbf7d0;border-radius:999px;padding:4px 10px;font-size:11px;font-weight:700;text-transform:uppercase}
.description-counter{text-align:right;font-size:12px;color:#94a3b8;margin-top:4px}
.description-counter.over-limit{color:#ef4444;font-weight:700}
.hint{color:#94a3b8;font-size:12px;margin-top:8px}
.services-header{display:flex;justify-content:space-between;align-items:center}
.add-service{background:transparent;border:none;color:#4f46e5;font-weight:600;cursor:pointer}
.service-row{display:flex;align-items:center;gap:8px;margin-top:8px}
";
