use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Options passed from the host page to `start()`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// ES module exporting `rethrow({functionName, error})`
    pub error_log_module: String,
    pub log_level: String,
    pub record_prompt: String,
}

fn default_error_log_module() -> String {
    "https://scotwatson.github.io/Debug/ErrorLog.mjs".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            error_log_module: default_error_log_module(),
            log_level: default_log_level(),
            record_prompt: common::DEFAULT_RECORD_PROMPT.to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_js(value: JsValue) -> Result<Self, JsValue> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_wasm_bindgen::from_value(value)?)
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        match self.log_level.to_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            _ => log::LevelFilter::Info,
        }
    }
}
