//! Overview screen: headline counters, the performance trend chart and the
//! short pending-task list.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::chart::{self, ChartKind, Series};
use crate::dom_utils::{create, create_text, ensure_styles, on_click};
use crate::messages::Message;
use crate::routes::Route;
use crate::state::{dispatch_global_message, AppState};

const STATS: [(&str, &str, &str); 4] = [
    ("Vues Totales", "12,450", "+12%"),
    ("Demandes d'itinéraire", "1,203", "+5%"),
    ("Appels", "432", "+18%"),
    ("Visites Site Web", "892", "+3%"),
];

const PENDING_TASKS: [(&str, &str, bool); 4] = [
    ("Répondre au nouvel avis", "il y a 2h", true),
    ("Publier offre hebdo", "Aujourd'hui", false),
    ("Mettre à jour horaires vacances", "Demain", true),
    ("Mettre en ligne photos intérieur", "Semaine pro.", false),
];

pub fn render(document: &Document, root: &Element, _state: &AppState) -> Result<(), JsValue> {
    ensure_styles(document, "dashboard-styles", DASHBOARD_CSS);

    root.append_child(&create_text(document, "h2", "screen-title", "Vue d'ensemble")?.into())?;
    root.append_child(&create_text(
        document,
        "p",
        "screen-subtitle",
        "Suivez vos performances GMB et votre pipeline de contenu.",
    )?.into())?;

    // ---------------- Stat cards ----------------
    let grid = create(document, "div", "stat-grid")?;
    for (title, value, change) in STATS {
        let card = create(document, "div", "card stat-card")?;
        card.append_child(&create_text(document, "p", "stat-title", title)?.into())?;
        card.append_child(&create_text(document, "h3", "stat-value", value)?.into())?;
        let change_el = create_text(
            document,
            "p",
            "stat-change",
            &format!("{} vs le mois dernier", change),
        )?;
        card.append_child(&change_el)?;
        grid.append_child(&card)?;
    }
    root.append_child(&grid)?;

    // ---------------- Trend chart ----------------
    let chart_card = create(document, "div", "card")?;
    chart_card.append_child(&create_text(document, "h3", "", "Tendances de performance")?.into())?;
    let canvas = create(document, "canvas", "")?;
    canvas.set_id("dashboard-chart");
    canvas.set_attribute("width", "720")?;
    canvas.set_attribute("height", "280")?;
    chart_card.append_child(&canvas)?;
    root.append_child(&chart_card)?;

    let labels: Vec<String> = (1..=7).map(|i| format!("Sem {}", i)).collect();
    chart::draw(
        document,
        "dashboard-chart",
        &labels,
        &[
            Series {
                name: "Vues",
                color: "#3b82f6",
                values: vec![400.0, 300.0, 200.0, 278.0, 189.0, 239.0, 349.0],
            },
            Series {
                name: "Actions",
                color: "#6366f1",
                values: vec![240.0, 139.0, 980.0, 390.0, 480.0, 380.0, 430.0],
            },
        ],
        ChartKind::Lines,
    )?;

    // ---------------- Pending tasks ----------------
    let tasks_card = create(document, "div", "card")?;
    tasks_card.append_child(&create_text(document, "h3", "", "Tâches en attente")?.into())?;
    for (label, time, urgent) in PENDING_TASKS {
        let row = create(document, "div", "task-row")?;
        let dot = create(document, "span", if urgent { "task-dot urgent" } else { "task-dot" })?;
        row.append_child(&dot)?;
        row.append_child(&create_text(document, "span", "task-label", label)?.into())?;
        row.append_child(&create_text(document, "span", "task-time", time)?.into())?;
        tasks_card.append_child(&row)?;
    }
    let to_checklist = create_text(document, "button", "primary-button", "Voir la Checklist")?;
    on_click(&to_checklist, || {
        dispatch_global_message(Message::Navigate(Route::Checklist))
    })?;
    tasks_card.append_child(&to_checklist)?;
    root.append_child(&tasks_card)?;

    Ok(())
}

const DASHBOARD_CSS: &str = "
.stat-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(200px,1fr));gap:16px;margin-bottom:16px}
.stat-card{margin-bottom:0}
.stat-title{color:#64748b;font-size:13px}
.stat-value{font-size:24px;margin:4px 0}
.stat-change{color:#16a34a;font-size:12px}
.task-row{display:flex;align-items:center;gap:10px;background:#f8fafc;border-radius:8px;padding:10px;margin-bottom:8px}
.task-dot{width:8px;height:8px;border-radius:50%;background:#60a5fa}
.task-dot.urgent{background:#ef4444}
.task-label{flex:1;font-size:14px}
.task-time{color:#94a3b8;font-size:12px}
";
