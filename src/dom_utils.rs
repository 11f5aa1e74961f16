//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small, ergonomic wrappers for element creation, class toggling and event
//! wiring so screen components do not sprinkle `Closure::wrap` boilerplate
//! everywhere.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlTextAreaElement};

/// Create an element with a class name.
pub fn create(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

/// Create an element with a class name and text content.
pub fn create_text(
    document: &Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<Element, JsValue> {
    let el = create(document, tag, class)?;
    el.set_text_content(Some(text));
    Ok(el)
}

/// Toggle CSS classes so the element becomes visible.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1("hidden");
    let _ = el.class_list().add_1("visible");
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().remove_1("visible");
    let _ = el.class_list().add_1("hidden");
}

/// Mark a sidebar entry as the active one.
pub fn set_active(btn: &Element) {
    btn.set_class_name("nav-button active");
}

/// Remove the `active` modifier from a sidebar entry.
pub fn set_inactive(btn: &Element) {
    btn.set_class_name("nav-button");
}

/// Attach a click handler.  The closure is leaked intentionally – these
/// elements live for the lifetime of their screen render.
pub fn on_click(el: &Element, mut handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        handler();
    }) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Attach an input handler receiving the control's current value.
pub fn on_input(el: &Element, handler: impl Fn(String) + 'static) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |event: Event| {
        handler(event_target_value(&event));
    }) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Attach a keydown handler that fires on Enter.
pub fn on_enter(el: &Element, mut handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
        if event.key() == "Enter" {
            event.prevent_default();
            handler();
        }
    }) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Current value of the input or textarea that fired an event.
pub fn event_target_value(event: &Event) -> String {
    let Some(target) = event.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

/// Fetch an `<input>` element by id and read its value.  Missing or
/// mistyped elements read as empty – the caller validates anyway.
pub fn input_value(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        .map(|i| i.value())
        .unwrap_or_default()
}

/// Ensure a `<style>` block with the given id exists in `<head>`.
pub fn ensure_styles(document: &Document, id: &str, css: &str) {
    if document.get_element_by_id(id).is_some() {
        return;
    }
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(id);
    style.set_text_content(Some(css));
    if let Ok(Some(head)) = document.query_selector("head") {
        let _ = head.append_child(&style);
    } else if let Some(body) = document.body() {
        let _ = body.append_child(&style);
    }
}
