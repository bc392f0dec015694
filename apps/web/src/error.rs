use portfolio_core::LoadError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_message(&value))
    }
}

/// Best-effort text for a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Logs the outcome of one independent installer without stopping the others.
pub fn report(name: &str, result: Result<(), WebError>) {
    match result {
        Ok(()) => log::debug!("{name} installed"),
        Err(error) => log::error!("{name} not installed: {error}"),
    }
}
