//! Tiny toast / notification helper.
//! Creates a `#toast-root` container once per page and appends toast divs
//! that fade out after a few seconds.  Screen-boundary errors surface here.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, HtmlElement};

#[derive(Debug, Clone, Copy)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

pub fn success(msg: &str) {
    show(msg, ToastKind::Success);
}

pub fn error(msg: &str) {
    show(msg, ToastKind::Error);
}

#[allow(dead_code)]
pub fn info(msg: &str) {
    show(msg, ToastKind::Info);
}

pub fn show(message: &str, kind: ToastKind) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let document = match window.document() {
        Some(d) => d,
        None => return,
    };

    let root = ensure_root(&document);
    let Ok(toast) = document.create_element("div") else {
        return;
    };
    toast.set_class_name("toast");
    let _ = match kind {
        ToastKind::Success => toast.class_list().add_1("toast-success"),
        ToastKind::Error => toast.class_list().add_1("toast-error"),
        ToastKind::Info => toast.class_list().add_1("toast-info"),
    };
    toast.set_text_content(Some(message));

    // Prepend so newest appears on top.
    let _ = root.prepend_with_node_1(&toast);

    // Auto-remove after 4s.
    let toast_clone: HtmlElement = toast.unchecked_into();
    let cb = Closure::once_into_js(move || {
        let _ = toast_clone
            .parent_node()
            .map(|p| p.remove_child(&toast_clone));
    });
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 4000);

    crate::dom_utils::ensure_styles(&document, "toast-styles", TOAST_CSS);
}

fn ensure_root(document: &Document) -> Element {
    if let Some(el) = document.get_element_by_id("toast-root") {
        el
    } else {
        let root = document
            .create_element("div")
            .expect("document can create a div");
        root.set_id("toast-root");
        root.set_class_name("toast-root");
        if let Some(body) = document.body() {
            let _ = body.append_child(&root);
        }
        root
    }
}

const TOAST_CSS: &str = "
.toast-root{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:9999;font-family:Arial,Helvetica,sans-serif}
.toast{padding:10px 16px;border-radius:6px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.15);opacity:0;animation:toast-in .2s forwards}
.toast-success{background:#16a34a}
.toast-error{background:#dc2626}
.toast-info{background:#4f46e5}
@keyframes toast-in{to{opacity:1}}
";
