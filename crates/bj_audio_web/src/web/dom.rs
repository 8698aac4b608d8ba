use std::time::Duration;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement};

pub(super) fn js_error_string(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

pub(super) fn by_id<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    doc.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub(super) fn query(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

/// Every element matching `selector` that casts to `T`.
pub(super) fn query_all<T: JsCast>(doc: &Document, selector: &str) -> Result<Vec<T>, String> {
    let list = doc
        .query_selector_all(selector)
        .map_err(|e| format!("query_selector_all({selector}): {}", js_error_string(&e)))?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

pub(super) fn data(el: &HtmlElement, key: &str) -> Option<String> {
    el.dataset().get(key)
}

/// Attach a listener for the page's lifetime.
pub(super) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut() + 'static,
) -> Result<(), String> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|e| format!("add_event_listener({event}): {}", js_error_string(&e)))?;
    cb.forget();
    Ok(())
}

/// One-shot timer, never cancelled.
pub(super) fn set_timeout(delay: Duration, f: impl FnOnce() + 'static) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window".to_string())?;
    let cb = Closure::once_into_js(f);
    let ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        .map_err(|e| format!("set_timeout: {}", js_error_string(&e)))?;
    Ok(())
}
