// ============================================================================
// PROPERTY PORTAL - Rust + WASM front-end (MVVM)
// ============================================================================
// - Views: functions that render DOM
// - ViewModels: screen state machines + UI logic
// - Services: API + token storage only
// - State: Rc<RefCell> with change subscribers
// - Models: API records
// ============================================================================

mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::App;
use crate::config::CONFIG;
use crate::state::Route;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Property portal starting (API: {})", CONFIG.api_base_url);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Back/forward buttons. Registered once here, so forget() cannot pile up listeners.
    if let Some(win) = web_sys::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_e: web_sys::PopStateEvent| {
            let route = Route::from_path(&dom::current_path());
            APP.with(|app_cell| {
                if let Some(ref app) = *app_cell.borrow() {
                    app.state().navigate(route);
                }
            });
        }) as Box<dyn FnMut(web_sys::PopStateEvent)>);

        win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Full re-render of the current screen
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref mut app) = *app_cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ [APP] Render error: {:?}", e);
            }
        } else {
            log::warn!("⚠️ [APP] App not initialized");
        }
    });
}
