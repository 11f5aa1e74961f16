//! Competitor analysis: one comma-separated input, one gateway call, a
//! card per competitor.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement};

use crate::dom_utils::{create, create_text, ensure_styles, on_click, on_enter, on_input};
use crate::messages::Message;
use crate::state::{dispatch_global_message, AppState};

pub fn render(document: &Document, root: &Element, state: &AppState) -> Result<(), JsValue> {
    ensure_styles(document, "competitor-styles", COMPETITOR_CSS);

    root.append_child(&create_text(document, "h2", "screen-title", "Analyse Concurrentielle")?.into())?;
    root.append_child(&create_text(
        document,
        "p",
        "screen-subtitle",
        "Espionnez vos concurrents. Utilisez l'IA pour détecter leurs faiblesses et opportunités de mots-clés.",
    )?.into())?;

    // ---------------- Input ----------------
    let form = create(document, "div", "card competitor-form")?;
    let field = create(document, "div", "competitor-field")?;
    field.append_child(&create_text(
        document,
        "label",
        "field-label",
        "Noms des concurrents (séparés par des virgules)",
    )?.into())?;
    let input = create(document, "input", "text-input")?;
    input.set_attribute("placeholder", "ex: Agence Alpha, Studio Beta, Marketing X...")?;
    if let Some(el) = input.dyn_ref::<HtmlInputElement>() {
        el.set_value(&state.competitors.input);
    }
    on_input(&input, |value| {
        dispatch_global_message(Message::CompetitorsInputChanged(value))
    })?;
    on_enter(&input, || {
        dispatch_global_message(Message::AnalyzeCompetitors)
    })?;
    field.append_child(&input)?;
    form.append_child(&field)?;

    let submit_label = if state.competitors.loading { "Analyse..." } else { "Analyser" };
    let submit = create_text(document, "button", "primary-button analyze-button", submit_label)?;
    if let Some(b) = submit.dyn_ref::<HtmlButtonElement>() {
        b.set_disabled(state.competitors.loading);
    }
    on_click(&submit, || {
        dispatch_global_message(Message::AnalyzeCompetitors)
    })?;
    form.append_child(&submit)?;
    root.append_child(&form)?;

    // ---------------- Results ----------------
    if !state.competitors.results.is_empty() {
        let grid = create(document, "div", "competitor-grid")?;
        for competitor in &state.competitors.results {
            let card = create(document, "div", "card competitor-card")?;
            card.append_child(&create_text(document, "h3", "", &competitor.name)?.into())?;

            card.append_child(&list_section(
                document,
                "section-title strengths",
                "Points Forts",
                &competitor.strengths,
            )?.into())?;
            card.append_child(&list_section(
                document,
                "section-title weaknesses",
                "Points Faibles",
                &competitor.weaknesses,
            )?.into())?;

            card.append_child(&create_text(
                document,
                "h4",
                "section-title keywords",
                "Mots-clés Cibles",
            )?.into())?;
            let tags = create(document, "div", "keyword-tags")?;
            for keyword in &competitor.keywords {
                tags.append_child(&create_text(document, "span", "keyword-tag", keyword)?.into())?;
            }
            card.append_child(&tags)?;
            grid.append_child(&card)?;
        }
        root.append_child(&grid)?;
    }

    Ok(())
}

fn list_section(
    document: &Document,
    title_class: &str,
    title: &str,
    items: &[String],
) -> Result<Element, JsValue> {
    let wrap = create(document, "div", "")?;
    wrap.append_child(&create_text(document, "h4", title_class, title)?.into())?;
    let list = create(document, "ul", "competitor-list")?;
    for item in items {
        list.append_child(&create_text(document, "li", "", item)?.into())?;
    }
    wrap.append_child(&list)?;
    Ok(wrap)
}

const COMPETITOR_CSS: &str = "
.competitor-form{display:flex;gap:12px;align-items:flex-end}
.competitor-field{flex:1}
.analyze-button{background:#dc2626}
.competitor-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(280px,1fr));gap:16px}
.competitor-card{margin-bottom:0}
.section-title{font-size:11px;font-weight:700;text-transform:uppercase;margin:12px 0 6px}
.section-title.strengths{color:#16a34a}
.section-title.weaknesses{color:#dc2626}
.section-title.keywords{color:#2563eb}
.competitor-list{padding-left:18px;font-size:13px;color:#475569}
.keyword-tags{display:flex;flex-wrap:wrap;gap:6px}
.keyword-tag{background:#eff6ff;color:#1d4ed8;border:1px solid #dbeafe;border-radius:6px;font-size:12px;padding:3px 8px}
";
