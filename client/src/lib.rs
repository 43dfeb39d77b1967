//! Browser page listing media devices, opening a stream from one of them and
//! saving a single recorded chunk of it.

use std::cell::RefCell;
use std::rc::Rc;

use common::{ErrorReporter, LogReporter, PageController, PanelAction};
use wasm_bindgen::prelude::*;

mod config;
mod js_error;
mod platform;
mod reporter;
mod startup;
mod surface;

pub use config::PageConfig;
use platform::BrowserPlatform;
use surface::DomSurface;

type BrowserController = PageController<BrowserPlatform, DomSurface>;

thread_local! {
    static PAGE: RefCell<Option<Rc<BrowserController>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("devprobe client initialized");
}

/// Waits for the page and the error log module, then lists media devices.
#[wasm_bindgen]
pub async fn start(config: JsValue) -> Result<(), JsValue> {
    let config = PageConfig::from_js(config)?;
    log::set_max_level(config.level_filter());

    let window = web_sys::window().ok_or("No window")?;

    let (loaded, module) = futures::future::join(
        startup::wait_for_load(&window),
        startup::load_error_log(&config.error_log_module),
    )
    .await;

    if let Err(e) = loaded {
        log::error!("Waiting for page load failed: {}", js_error::message(&e));
        return Err(e);
    }
    let reporter: Box<dyn ErrorReporter> = match module {
        Ok(module) => reporter::reporter_for(module),
        Err(e) => {
            log::error!(
                "Loading error log module {} failed: {}",
                config.error_log_module,
                js_error::message(&e)
            );
            Box::new(LogReporter)
        }
    };

    let document = window.document().ok_or("No document")?;
    let platform = BrowserPlatform::new(window).map_err(js_error::to_js)?;
    let surface = DomSurface::new(document).map_err(js_error::to_js)?;
    let controller = Rc::new(
        PageController::new(platform, surface, reporter).with_record_prompt(config.record_prompt),
    );

    let weak = Rc::downgrade(&controller);
    controller.surface().set_dispatcher(Rc::new(move |action: PanelAction| {
        if let Some(controller) = weak.upgrade() {
            wasm_bindgen_futures::spawn_local(async move {
                controller.dispatch(action).await;
            });
        }
    }));
    PAGE.with(|page| *page.borrow_mut() = Some(Rc::clone(&controller)));

    let count = controller.list_devices().await.map_err(js_error::to_js)?;
    log::info!("Listed {} media devices", count);
    Ok(())
}
