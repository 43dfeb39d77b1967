use common::{ErrorReport, ErrorReporter, LogReporter, PageError};
use wasm_bindgen::{JsCast, JsValue};

/// Reports through the `rethrow` export of the imported error log module.
pub struct JsErrorReporter {
    module: JsValue,
}

impl JsErrorReporter {
    pub fn new(module: JsValue) -> Self {
        Self { module }
    }

    fn call_rethrow(&self, report: &ErrorReport) -> Result<(), JsValue> {
        let rethrow: js_sys::Function =
            js_sys::Reflect::get(&self.module, &"rethrow".into())?.dyn_into()?;

        let arg = js_sys::Object::new();
        js_sys::Reflect::set(&arg, &"functionName".into(), &report.function_name.as_str().into())?;
        js_sys::Reflect::set(&arg, &"error".into(), &js_sys::Error::new(&report.error).into())?;

        rethrow.call1(&self.module, &arg)?;
        Ok(())
    }
}

impl ErrorReporter for JsErrorReporter {
    fn rethrow(&self, report: ErrorReport) -> PageError {
        // rethrow logs and then throws; the throw is expected
        if let Err(thrown) = self.call_rethrow(&report) {
            log::debug!(
                "[{}] re-raised: {}",
                report.function_name,
                crate::js_error::message(&thrown)
            );
        }
        PageError::Reported {
            function_name: report.function_name,
            message: report.error,
        }
    }
}

/// Falls back to the console logger when the module has no usable `rethrow`.
pub fn reporter_for(module: JsValue) -> Box<dyn ErrorReporter> {
    let has_rethrow = js_sys::Reflect::get(&module, &"rethrow".into())
        .map(|f| f.is_function())
        .unwrap_or(false);
    if has_rethrow {
        Box::new(JsErrorReporter::new(module))
    } else {
        log::warn!("Error log module has no rethrow function, logging to console");
        Box::new(LogReporter)
    }
}
