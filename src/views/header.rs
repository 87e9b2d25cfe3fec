// ============================================================================
// HEADER - Title bar shared by the screens
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::dom::{append_child, ElementBuilder, Listeners};

/// `on_logout` adds a logout button when present
pub fn render_header<F>(
    title: &str,
    on_logout: Option<F>,
    listeners: &mut Listeners,
) -> Result<Element, JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let header = ElementBuilder::new("header")?
        .class("app-header")
        .child(ElementBuilder::new("h1")?.class("app-title").text(title).build())?
        .build();

    if let Some(handler) = on_logout {
        let logout_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-logout")
            .text("Log out")
            .build();
        listeners.on_click(&logout_btn, handler)?;
        append_child(&header, &logout_btn)?;
    }

    Ok(header)
}
