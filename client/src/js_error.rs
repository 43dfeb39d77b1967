use common::PageError;
use wasm_bindgen::{JsCast, JsValue};

/// Best-effort human readable text for a thrown JS value.
pub fn message(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(e.name()), String::from(e.message()));
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

pub fn platform_error(err: JsValue) -> PageError {
    PageError::Platform(message(&err))
}

pub fn render_error(err: JsValue) -> PageError {
    PageError::Render(message(&err))
}

pub fn to_js(err: PageError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
