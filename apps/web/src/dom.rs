use portfolio_core::LoadError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior, Window};

use crate::error::WebError;

pub fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or_else(|| LoadError::MissingElement("window".to_string()).into())
}

pub fn document(window: &Window) -> Result<Document, WebError> {
    window
        .document()
        .ok_or_else(|| LoadError::MissingElement("document".to_string()).into())
}

pub fn body(document: &Document) -> Result<HtmlElement, WebError> {
    document
        .body()
        .ok_or_else(|| LoadError::MissingElement("body".to_string()).into())
}

/// Element lookup by id; absence is an error for the calling installer.
pub fn by_id(document: &Document, id: &str) -> Result<HtmlElement, LoadError> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| LoadError::MissingElement(id.to_string()))
}

pub fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn create(document: &Document, tag: &str) -> Result<HtmlElement, WebError> {
    Ok(document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(JsValue::from)?)
}

pub fn create_with_class(
    document: &Document,
    tag: &str,
    class: &str,
) -> Result<HtmlElement, WebError> {
    let element = create(document, tag)?;
    element.set_class_name(class);
    Ok(element)
}

pub fn create_with_text(
    document: &Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<HtmlElement, WebError> {
    let element = create_with_class(document, tag, class)?;
    element.set_text_content(Some(text));
    Ok(element)
}

/// Nearest ancestor of the event target (itself included) matching `selector`.
pub fn closest(event: &Event, selector: &str) -> Option<HtmlElement> {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(error) = element.style().set_property(property, value) {
        log::debug!("could not set {property}: {error:?}");
    }
}

pub fn remove_style(element: &HtmlElement, property: &str) {
    element.style().remove_property(property).ok();
}

pub fn add_class(element: &Element, class: &str) {
    element.class_list().add_1(class).ok();
}

pub fn remove_class(element: &Element, class: &str) {
    element.class_list().remove_1(class).ok();
}

pub fn toggle_class(element: &Element, class: &str, on: bool) {
    element.class_list().toggle_with_force(class, on).ok();
}

/// Registers a listener for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), WebError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn set_timeout(window: &Window, millis: i32, callback: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(callback);
    if let Err(error) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
    {
        log::warn!("setTimeout failed: {error:?}");
    }
}

pub fn request_frame(window: &Window, callback: impl FnOnce() + 'static) -> Result<(), WebError> {
    let callback: JsValue = Closure::once_into_js(callback);
    window.request_animation_frame(callback.unchecked_ref())?;
    Ok(())
}

pub fn scroll_into_view(element: &Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}
