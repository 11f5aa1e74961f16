//! Manual metrics tracker: two canvas charts, the entry form and the
//! editable journal table.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

use crate::components::chart::{self, ChartKind, Series};
use crate::dom_utils::{create, create_text, ensure_styles, on_click, on_input};
use crate::messages::{Message, TrackerField};
use crate::state::{dispatch_global_message, AppState};

pub fn render(document: &Document, root: &Element, state: &AppState) -> Result<(), JsValue> {
    ensure_styles(document, "metrics-styles", METRICS_CSS);

    root.append_child(&create_text(document, "h2", "screen-title", "Suivi Métriques GMB")?.into())?;
    root.append_child(&create_text(
        document,
        "p",
        "screen-subtitle",
        "Suivez vos performances hebdomadaires : Impressions, Clics, Appels et Réputation.",
    )?.into())?;

    // ---------------- Charts ----------------
    let labels: Vec<String> = state.metrics.entries.iter().map(|e| e.period.clone()).collect();

    let traffic_card = create(document, "div", "card")?;
    traffic_card.append_child(&create_text(document, "h3", "", "Volume & Trafic")?.into())?;
    let traffic_canvas = create(document, "canvas", "")?;
    traffic_canvas.set_id("metrics-traffic-chart");
    traffic_canvas.set_attribute("width", "720")?;
    traffic_canvas.set_attribute("height", "240")?;
    traffic_card.append_child(&traffic_canvas)?;
    root.append_child(&traffic_card)?;

    chart::draw(
        document,
        "metrics-traffic-chart",
        &labels,
        &[
            Series {
                name: "Impressions",
                color: "#3b82f6",
                values: state.metrics.entries.iter().map(|e| e.impressions as f64).collect(),
            },
            Series {
                name: "Clics",
                color: "#10b981",
                values: state.metrics.entries.iter().map(|e| e.clicks as f64).collect(),
            },
        ],
        ChartKind::Lines,
    )?;

    let conversion_card = create(document, "div", "card")?;
    conversion_card.append_child(&create_text(document, "h3", "", "Conversion & Avis")?.into())?;
    let conversion_canvas = create(document, "canvas", "")?;
    conversion_canvas.set_id("metrics-conversion-chart");
    conversion_canvas.set_attribute("width", "720")?;
    conversion_canvas.set_attribute("height", "240")?;
    conversion_card.append_child(&conversion_canvas)?;
    root.append_child(&conversion_card)?;

    chart::draw(
        document,
        "metrics-conversion-chart",
        &labels,
        &[
            Series {
                name: "Appels",
                color: "#6366f1",
                values: state.metrics.entries.iter().map(|e| e.calls as f64).collect(),
            },
            Series {
                name: "Nouveaux Avis",
                color: "#f59e0b",
                values: state.metrics.entries.iter().map(|e| e.reviews as f64).collect(),
            },
        ],
        ChartKind::Bars,
    )?;

    // ---------------- Entry form ----------------
    let journal = create(document, "div", "card")?;
    journal.append_child(&create_text(document, "h3", "", "Journal des Données")?.into())?;

    let form = create(document, "div", "tracker-form")?;
    form.append_child(&number_field(document, "Période", "ex: Semaine 5", &state.metrics.form.period, TrackerField::Period, true)?.into())?;
    form.append_child(&number_field(document, "Impress.", "", &non_zero(state.metrics.form.impressions), TrackerField::Impressions, false)?.into())?;
    form.append_child(&number_field(document, "Clics", "", &non_zero(state.metrics.form.clicks), TrackerField::Clicks, false)?.into())?;
    form.append_child(&number_field(document, "Appels", "", &non_zero(state.metrics.form.calls), TrackerField::Calls, false)?.into())?;
    form.append_child(&number_field(document, "Avis", "", &non_zero(state.metrics.form.reviews), TrackerField::Reviews, false)?.into())?;
    form.append_child(&number_field(document, "Note", "", &format!("{}", state.metrics.form.rating), TrackerField::Rating, false)?.into())?;

    let add = create_text(document, "button", "primary-button", "Ajouter Entrée")?;
    on_click(&add, || dispatch_global_message(Message::AddTrackerEntry))?;
    form.append_child(&add)?;
    journal.append_child(&form)?;

    // ---------------- Table ----------------
    let table = create(document, "table", "tracker-table")?;
    let head = create(document, "tr", "")?;
    for title in ["Période", "Impressions", "Clics", "Appels", "Nouv. Avis", "Note Moy.", "Action"] {
        head.append_child(&create_text(document, "th", "", title)?.into())?;
    }
    table.append_child(&head)?;

    for entry in &state.metrics.entries {
        let row = create(document, "tr", "")?;
        row.append_child(&create_text(document, "td", "period-cell", &entry.period)?.into())?;
        row.append_child(&create_text(document, "td", "", &entry.impressions.to_string())?.into())?;
        row.append_child(&create_text(document, "td", "", &entry.clicks.to_string())?.into())?;
        row.append_child(&create_text(document, "td", "", &entry.calls.to_string())?.into())?;
        row.append_child(&create_text(document, "td", "", &entry.reviews.to_string())?.into())?;
        row.append_child(&create_text(document, "td", "rating-cell", &format!("★ {}", entry.rating))?.into())?;

        let action_cell = create(document, "td", "")?;
        let delete = create_text(document, "button", "danger-button", "Supprimer")?;
        let id = entry.id.clone();
        on_click(&delete, move || {
            dispatch_global_message(Message::DeleteTrackerEntry(id.clone()))
        })?;
        action_cell.append_child(&delete)?;
        row.append_child(&action_cell)?;
        table.append_child(&row)?;
    }

    if state.metrics.entries.is_empty() {
        let row = create(document, "tr", "")?;
        let cell = create_text(
            document,
            "td",
            "empty-cell",
            "Aucune donnée enregistrée. Commencez par ajouter votre première semaine ci-dessus.",
        )?;
        cell.set_attribute("colspan", "7")?;
        row.append_child(&cell)?;
        table.append_child(&row)?;
    }
    journal.append_child(&table)?;
    root.append_child(&journal)?;

    Ok(())
}

fn non_zero(value: u32) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}

fn number_field(
    document: &Document,
    label: &str,
    placeholder: &str,
    value: &str,
    field: TrackerField,
    is_text: bool,
) -> Result<Element, JsValue> {
    let wrap = create(document, "div", "tracker-field")?;
    wrap.append_child(&create_text(document, "label", "field-label", label)?.into())?;
    let input = create(document, "input", "text-input")?;
    if !is_text {
        input.set_attribute("type", "number")?;
        input.set_attribute("min", "0")?;
        if field == TrackerField::Rating {
            input.set_attribute("max", "5")?;
            input.set_attribute("step", "0.1")?;
        }
    }
    if !placeholder.is_empty() {
        input.set_attribute("placeholder", placeholder)?;
    }
    if let Some(el) = input.dyn_ref::<HtmlInputElement>() {
        el.set_value(value);
    }
    on_input(&input, move |value| {
        dispatch_global_message(Message::TrackerFieldChanged(field, value))
    })?;
    wrap.append_child(&input)?;
    Ok(wrap)
}

const METRICS_CSS: &str = "
.tracker-form{display:grid;grid-template-columns:2fr repeat(5,1fr) auto;gap:10px;align-items:end;background:#f8fafc;border:1px solid #f1f5f9;border-radius:12px;padding:12px;margin-bottom:16px}
.tracker-table{width:100%;border-collapse:collapse;font-size:14px}
.tracker-table th{text-align:left;font-size:11px;text-transform:uppercase;color:#475569;background:#f8fafc;border-bottom:1px solid #e2e8f0;padding:10px}
.tracker-table td{padding:10px;border-bottom:1px solid #f1f5f9;color:#475569}
.period-cell{font-weight:600;color:#0f172a}
.rating-cell{color:#b45309}
.empty-cell{text-align:center;color:#94a3b8;padding:24px}
";
