// ============================================================================
// EVENT HANDLING
// ============================================================================
// A wasm closure handed to the browser lives until its `Closure` is dropped;
// `forget()` leaks it along with everything it captures (viewmodel Rcs
// included). Element listeners are therefore owned by a `Listeners` bag that
// the app replaces on every render, after the old DOM has been detached.
// Only the window-level popstate listener is forgotten, once, at startup.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, MouseEvent};

/// Closures registered by one render of a screen
#[derive(Default)]
pub struct Listeners {
    closures: Vec<Closure<dyn FnMut(Event)>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.closures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closures.is_empty()
    }

    pub fn on_click<F>(&mut self, element: &Element, mut handler: F) -> Result<(), JsValue>
    where
        F: FnMut(MouseEvent) + 'static,
    {
        self.listen(element, "click", move |e: Event| {
            if let Ok(mouse) = e.dyn_into::<MouseEvent>() {
                handler(mouse);
            }
        })
    }

    /// Calls `handler` with the new value of an `<input>`
    pub fn on_input_value<F>(&mut self, element: &Element, mut handler: F) -> Result<(), JsValue>
    where
        F: FnMut(String) + 'static,
    {
        self.listen(element, "input", move |e: Event| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                handler(target.value());
            }
        })
    }

    /// Form submit with the default navigation suppressed
    pub fn on_submit<F>(&mut self, form: &Element, mut handler: F) -> Result<(), JsValue>
    where
        F: FnMut() + 'static,
    {
        self.listen(form, "submit", move |e: Event| {
            e.prevent_default();
            handler();
        })
    }

    fn listen<F>(&mut self, element: &Element, event: &str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.closures.push(closure);
        Ok(())
    }
}
