use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

/// Current vertical scroll offset of the page.
pub fn scroll_top() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn document_height() -> f64 {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}

pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Every element matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_html(selector: &str) -> Option<HtmlElement> {
    window()?
        .document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

/// Smoothly scrolls so that the element with `id` sits `offset` px below the top.
/// Returns false when no such element exists.
pub fn scroll_to_anchor(id: &str, offset: f64) -> bool {
    let Some(target) = html_element_by_id(id.trim_start_matches('#')) else {
        return false;
    };
    let Some(window) = window() else {
        return false;
    };
    let options = ScrollToOptions::new();
    options.set_top(target.offset_top() as f64 - offset);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// Current time in milliseconds, as used by the rate limiters.
pub fn now_ms() -> f64 {
    web_sys::js_sys::Date::now()
}
