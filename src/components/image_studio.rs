//! Image studio: generate a square image from a prompt, or upload one and
//! rework it with a text instruction.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, FileReader, HtmlButtonElement, HtmlInputElement};

use crate::dom_utils::{create, create_text, ensure_styles, on_click, on_input};
use crate::messages::Message;
use crate::state::{dispatch_global_message, AppState, StudioMode};

pub fn render(document: &Document, root: &Element, state: &AppState) -> Result<(), JsValue> {
    ensure_styles(document, "studio-styles", STUDIO_CSS);

    root.append_child(&create_text(document, "h2", "screen-title", "Studio Nano Banana")?.into())?;
    root.append_child(&create_text(
        document,
        "p",
        "screen-subtitle",
        "Générez de nouvelles photos ou éditez les existantes avec du texte en utilisant Gemini 2.5 Flash Image.",
    )?.into())?;

    let card = create(document, "div", "card")?;

    // ---------------- Mode tabs ----------------
    let tabs = create(document, "div", "studio-tabs")?;
    let generate_tab = create_text(
        document,
        "button",
        tab_class(state.images.mode == StudioMode::Generate),
        "Générer Nouvelle",
    )?;
    on_click(&generate_tab, || {
        dispatch_global_message(Message::StudioModeSelected(StudioMode::Generate))
    })?;
    tabs.append_child(&generate_tab)?;

    let edit_tab = create_text(
        document,
        "button",
        tab_class(state.images.mode == StudioMode::Edit),
        "Éditer avec Texte",
    )?;
    on_click(&edit_tab, || {
        dispatch_global_message(Message::StudioModeSelected(StudioMode::Edit))
    })?;
    tabs.append_child(&edit_tab)?;
    card.append_child(&tabs)?;

    // ---------------- Upload zone (edit mode) ----------------
    if state.images.mode == StudioMode::Edit {
        let upload = create(document, "div", "upload-zone")?;
        match &state.images.source {
            Some(source) => {
                let preview = create(document, "img", "upload-preview")?;
                preview.set_attribute("src", &source.to_data_url())?;
                upload.append_child(&preview)?;
                upload.append_child(&create_text(
                    document,
                    "p",
                    "hint",
                    "Image chargée. Décrivez la modification souhaitée ci-dessous.",
                )?.into())?;
            }
            None => {
                upload.append_child(&create_text(
                    document,
                    "p",
                    "hint",
                    "Téléchargez une photo à retravailler.",
                )?.into())?;
            }
        }
        let file_input = create(document, "input", "file-input")?;
        file_input.set_attribute("type", "file")?;
        file_input.set_attribute("accept", "image/*")?;
        attach_file_handler(&file_input)?;
        upload.append_child(&file_input)?;
        card.append_child(&upload)?;
    }

    // ---------------- Prompt + submit ----------------
    card.append_child(&create_text(document, "label", "field-label", "Prompt")?.into())?;
    let prompt = create(document, "input", "text-input")?;
    prompt.set_attribute(
        "placeholder",
        "ex: Une devanture de boulangerie chaleureuse au lever du soleil...",
    )?;
    if let Some(el) = prompt.dyn_ref::<HtmlInputElement>() {
        el.set_value(&state.images.prompt);
    }
    on_input(&prompt, |value| {
        dispatch_global_message(Message::ImagePromptChanged(value))
    })?;
    card.append_child(&prompt)?;

    let submit_label = if state.images.loading {
        "Traitement..."
    } else if state.images.mode == StudioMode::Generate {
        "Générer l'image"
    } else {
        "Appliquer l'édition"
    };
    let submit = create_text(document, "button", "primary-button studio-submit", submit_label)?;
    if let Some(button) = submit.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(state.images.loading);
    }
    on_click(&submit, || {
        dispatch_global_message(Message::SubmitImageRequest)
    })?;
    card.append_child(&submit)?;
    root.append_child(&card)?;

    // ---------------- Error / result ----------------
    if let Some(error) = &state.images.error {
        root.append_child(&create_text(document, "div", "error-panel", error)?.into())?;
    }

    if let Some(result) = &state.images.result {
        let result_card = create(document, "div", "card result-card")?;
        let img = create(document, "img", "result-image")?;
        let data_url = result.to_data_url();
        img.set_attribute("src", &data_url)?;
        result_card.append_child(&img)?;

        let download = create_text(document, "a", "primary-button download-link", "Télécharger")?;
        download.set_attribute("href", &data_url)?;
        download.set_attribute("download", "gmb-image.png")?;
        result_card.append_child(&download)?;
        root.append_child(&result_card)?;
    }

    Ok(())
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "studio-tab active"
    } else {
        "studio-tab"
    }
}

/// Read the chosen file as a data URL and dispatch its base64 payload.
fn attach_file_handler(input: &Element) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let Some(target) = event.target() else { return };
        let Ok(input) = target.dyn_into::<HtmlInputElement>() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let Ok(reader) = FileReader::new() else { return };
        let reader_handle = reader.clone();
        let onloadend = Closure::once_into_js(move |_event: web_sys::ProgressEvent| {
            let Ok(result) = reader_handle.result() else {
                return;
            };
            let Some(data_url) = result.as_string() else {
                return;
            };
            if let Some((mime_type, data)) = split_data_url(&data_url) {
                dispatch_global_message(Message::SourceImageLoaded {
                    mime_type: mime_type.to_string(),
                    data: data.to_string(),
                });
            }
        });
        reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
        if reader.read_as_data_url(&file).is_err() {
            crate::toast::error("Lecture du fichier impossible.");
        }
    }) as Box<dyn FnMut(_)>);
    input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Split `data:<mime>;base64,<payload>` into its parts.
pub fn split_data_url(data_url: &str) -> Option<(&str, &str)> {
    let rest = data_url.strip_prefix("data:")?;
    let (mime_type, payload) = rest.split_once(";base64,")?;
    if mime_type.is_empty() {
        return None;
    }
    Some((mime_type, payload))
}

#[cfg(test)]
mod tests {
    use super::split_data_url;

    #[test]
    fn data_url_splits_into_mime_and_payload() {
        assert_eq!(
            split_data_url("data:image/png;base64,QUJD"),
            Some(("image/png", "QUJD"))
        );
        assert_eq!(split_data_url("data:;base64,QUJD"), None);
        assert_eq!(split_data_url("image/png;base64,QUJD"), None);
        assert_eq!(split_data_url("data:image/png,QUJD"), None);
    }
}

const STUDIO_CSS: &str = "
.studio-tabs{display:flex;border-bottom:1px solid #e2e8f0;margin-bottom:16px}
.studio-tab{flex:1;background:#f8fafc;border:none;padding:12px;font-size:14px;color:#64748b;cursor:pointer}
.studio-tab.active{background:#fff;color:#db2777;border-bottom:2px solid #ec4899;font-weight:600}
.upload-zone{border:2px dashed #cbd5e1;border-radius:12px;padding:20px;text-align:center;margin-bottom:12px}
.upload-preview{max-width:200px;border-radius:8px;margin-bottom:8px}
.file-input{margin-top:8px}
.studio-submit{width:100%;justify-content:center;margin-top:14px}
.result-card{text-align:center}
.result-image{max-width:100%;border-radius:12px;margin-bottom:12px}
.download-link{text-decoration:none}
";
