//! Optimization checklist: three fixed categories with per-category
//! progress counts and clickable rows.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils::{create, create_text, ensure_styles, on_click};
use crate::messages::Message;
use crate::models::ChecklistCategory;
use crate::state::{dispatch_global_message, AppState};

pub fn render(document: &Document, root: &Element, state: &AppState) -> Result<(), JsValue> {
    ensure_styles(document, "checklist-styles", CHECKLIST_CSS);

    root.append_child(&create_text(document, "h2", "screen-title", "Checklist d'Optimisation")?.into())?;
    root.append_child(&create_text(
        document,
        "p",
        "screen-subtitle",
        "Suivez vos tâches récurrentes pour garder votre profil actif et bien classé.",
    )?.into())?;

    for category in ChecklistCategory::ALL {
        let items: Vec<_> = state
            .checklist
            .iter()
            .filter(|i| i.category == category)
            .collect();
        let done = items.iter().filter(|i| i.completed).count();

        let card = create(document, "div", "card")?;
        let header = create(document, "div", "checklist-header")?;
        header.append_child(&create_text(
            document,
            "h3",
            "",
            &format!("Tâches {}", category.label()),
        )?.into())?;
        header.append_child(&create_text(
            document,
            "span",
            "progress-pill",
            &format!("{} / {}", done, items.len()),
        )?.into())?;
        card.append_child(&header)?;

        for item in &items {
            let row = create(document, "div", "check-row")?;
            let mark = create_text(
                document,
                "span",
                if item.completed { "check-mark done" } else { "check-mark" },
                if item.completed { "☑" } else { "☐" },
            )?;
            row.append_child(&mark)?;
            row.append_child(&create_text(
                document,
                "span",
                if item.completed { "check-task done" } else { "check-task" },
                &item.task,
            )?.into())?;
            let id = item.id.clone();
            on_click(&row, move || {
                dispatch_global_message(Message::ToggleChecklistItem(id.clone()))
            })?;
            card.append_child(&row)?;
        }
        if items.is_empty() {
            card.append_child(&create_text(
                document,
                "p",
                "hint",
                "Aucune tâche dans cette catégorie.",
            )?.into())?;
        }
        root.append_child(&card)?;
    }

    Ok(())
}

const CHECKLIST_CSS: &str = "
.checklist-header{display:flex;justify-content:space-between;align-items:center;margin-bottom:8px}
.progress-pill{font-size:12px;color:#64748b;border:1px solid #e2e8f0;border-radius:6px;padding:2px 8px}
.check-row{display:flex;align-items:center;gap:12px;padding:12px 4px;border-bottom:1px solid #f1f5f9;cursor:pointer}
.check-row:hover{background:#f8fafc}
.check-mark{font-size:20px;color:#cbd5e1}
.check-mark.done{color:#22c55e}
.check-task{flex:1;font-size:14px}
.check-task.done{color:#94a3b8;text-decoration:line-through}
";
