use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AddEventListenerOptions, Window};

#[wasm_bindgen(inline_js = "export function importModule(url) { return import(url); }")]
extern "C" {
    #[wasm_bindgen(catch, js_name = importModule)]
    async fn import_module(url: &str) -> Result<JsValue, JsValue>;
}

/// Resolves once the window `load` event has fired.
pub async fn wait_for_load(window: &Window) -> Result<(), JsValue> {
    let document = window.document().ok_or("No document")?;
    if document.ready_state() == "complete" {
        return Ok(());
    }

    let options = AddEventListenerOptions::new();
    options.set_once(true);

    let mut register = |resolve: js_sys::Function, reject: js_sys::Function| {
        if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "load", &resolve, &options,
        ) {
            log::error!("Adding load listener failed: {}", crate::js_error::message(&e));
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    };
    JsFuture::from(js_sys::Promise::new(&mut register)).await?;
    Ok(())
}

/// Dynamically imports the error log module.
pub async fn load_error_log(url: &str) -> Result<JsValue, JsValue> {
    log::debug!("Importing error log module from {}", url);
    import_module(url).await
}
