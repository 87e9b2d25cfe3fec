// ============================================================================
// PROPERTY LIST VIEW
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder, Listeners};
use crate::viewmodels::{ListingState, ListingViewModel};
use crate::views::header::render_header;
use crate::views::property_card::render_property_card;

pub fn render_property_list(
    vm: &Rc<ListingViewModel>,
    listeners: &mut Listeners,
) -> Result<Element, JsValue> {
    let state = vm.state().get();

    let screen = ElementBuilder::new("div")?
        .class("listing-screen")
        .build();

    let on_logout = {
        let vm = Rc::clone(vm);
        move |_: web_sys::MouseEvent| vm.logout()
    };
    append_child(&screen, &render_header("Service apartments", Some(on_logout), listeners)?)?;

    if let Some(message) = state.message() {
        let class = if state.is_error() { "listing-message error" } else { "listing-message" };
        let message_el = ElementBuilder::new("p")?
            .class(class)
            .text(message)
            .build();
        append_child(&screen, &message_el)?;
    }

    if let ListingState::Loaded(properties) = &state {
        let list = ElementBuilder::new("div")?
            .class("property-list")
            .build();
        for property in properties {
            append_child(&list, &render_property_card(property)?)?;
        }
        append_child(&screen, &list)?;
    }

    Ok(screen)
}
