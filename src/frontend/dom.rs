//! Thin web-sys accessors. Missing nodes and failed writes are no-ops.

use crate::pointer::Bounds;
use crate::scroll::{smooth_scroll_target, SectionBounds};
use crate::theme::{PreferenceStore, Theme};
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, Document, Element, Event, HtmlElement, Node, ScrollBehavior, ScrollToOptions, Storage,
};
use yew::NodeRef;

pub fn document() -> Option<Document> {
    window()?.document()
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// `localStorage`-backed preferences.
pub struct LocalStorageStore;

impl PreferenceStore for LocalStorageStore {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

pub fn paint_theme(theme: &Theme) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

fn body() -> Option<HtmlElement> {
    document()?.body()
}

pub fn set_scroll_locked(locked: bool) {
    let Some(body) = body() else {
        return;
    };

    let style = body.style();
    if locked {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}

pub fn page_loaded() -> bool {
    document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false)
}

pub fn mark_body_loaded() {
    if let Some(body) = body() {
        let _ = body.class_list().add_1("loaded");
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0)
}

pub fn section_bounds(id: &str) -> Option<SectionBounds> {
    let section = document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()?;

    Some(SectionBounds {
        offset_top: f64::from(section.offset_top()),
        height: f64::from(section.offset_height()),
    })
}

pub fn element_bounds(node: &NodeRef) -> Option<Bounds> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();

    Some(Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

/// Animated jump to `#id`, leaving room for the fixed header.
pub fn smooth_scroll_to(id: &str) {
    let Some(win) = window() else {
        return;
    };
    let Some(target) = document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };

    let top = smooth_scroll_target(target.get_bounding_client_rect().top(), scroll_y());
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

pub fn is_touch_device() -> bool {
    window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("ontouchstart")).unwrap_or(false))
        .unwrap_or(false)
}

pub fn event_inside(node: &NodeRef, event: &Event) -> bool {
    let Some(container) = node.cast::<Node>() else {
        return false;
    };

    let target = event.target();
    container.contains(target.as_ref().and_then(|t| t.dyn_ref::<Node>()))
}

pub fn set_inline_style(node: &NodeRef, style: &str) {
    if let Some(element) = node.cast::<Element>() {
        let _ = element.set_attribute("style", style);
    }
}
