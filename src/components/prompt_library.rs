//! Static library of image prompt templates with copy-to-clipboard.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::NANO_PROMPTS;
use crate::dom_utils::{create, create_text, ensure_styles, on_click};
use crate::state::AppState;

pub fn render(document: &Document, root: &Element, _state: &AppState) -> Result<(), JsValue> {
    ensure_styles(document, "prompts-styles", PROMPTS_CSS);

    root.append_child(&create_text(document, "h2", "screen-title", "Prompts Nano Banana")?.into())?;
    root.append_child(&create_text(
        document,
        "p",
        "screen-subtitle",
        "Des prompts prêts à l'emploi pour générer des photos d'entreprise de haute qualité.",
    )?.into())?;

    let grid = create(document, "div", "prompt-grid")?;
    for (title, prompt) in NANO_PROMPTS {
        let card = create(document, "div", "card prompt-card")?;
        let header = create(document, "div", "prompt-head")?;
        header.append_child(&create_text(document, "h3", "", title)?.into())?;
        let copy = create_text(document, "button", "copy-button", "Copier")?;
        on_click(&copy, move || {
            crate::utils::copy_to_clipboard(prompt);
            crate::toast::success("Prompt copié");
        })?;
        header.append_child(&copy)?;
        card.append_child(&header)?;
        card.append_child(&create_text(document, "div", "prompt-body", prompt)?.into())?;
        grid.append_child(&card)?;
    }
    root.append_child(&grid)?;

    Ok(())
}

const PROMPTS_CSS: &str = "
.prompt-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(320px,1fr));gap:16px}
.prompt-card{margin-bottom:0}
.prompt-head{display:flex;justify-content:space-between;align-items:center;margin-bottom:10px}
.prompt-body{background:#f8fafc;border:1px solid #f1f5f9;border-radius:8px;padding:12px;font-family:monospace;font-size:12px;color:#475569}
";
