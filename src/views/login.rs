// ============================================================================
// LOGIN VIEW
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, ElementBuilder, Listeners};
use crate::viewmodels::{LoginPhase, LoginViewModel};

pub fn render_login(vm: &Rc<LoginViewModel>, listeners: &mut Listeners) -> Result<Element, JsValue> {
    let state = vm.state().get();
    let submitting = state.phase == LoginPhase::Submitting;

    let login_screen = ElementBuilder::new("div")?
        .class("login-screen")
        .build();

    let login_container = ElementBuilder::new("div")?
        .class("login-container")
        .build();

    let login_header = ElementBuilder::new("div")?
        .class("login-header")
        .child(ElementBuilder::new("h1")?.text("Sign In").build())?
        .child(ElementBuilder::new("p")?.text("Service apartments portal").build())?
        .build();

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .attr("novalidate", "")?
        .build();

    let email_group = create_input_group(
        "email",
        "Email",
        "email",
        &vm.email(),
        submitting,
        {
            let vm = Rc::clone(vm);
            move |value| vm.set_email(value)
        },
        listeners,
    )?;

    let password_group = create_input_group(
        "password",
        "Password",
        "password",
        &vm.password(),
        submitting,
        {
            let vm = Rc::clone(vm);
            move |value| vm.set_password(value)
        },
        listeners,
    )?;

    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;

    if let Some(error) = &state.error {
        let error_el = ElementBuilder::new("p")?
            .class("login-error")
            .attr("role", "alert")?
            .text(error)
            .build();
        append_child(&form, &error_el)?;
    }

    // Disabled while a request is in flight
    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-login")
        .attr_if(submitting, "disabled", "")?
        .text(if submitting { "Loading..." } else { "Sign In" })
        .build();
    append_child(&form, &submit_btn)?;

    {
        let vm = Rc::clone(vm);
        listeners.on_submit(&form, move || {
            let vm = Rc::clone(&vm);
            spawn_local(async move {
                vm.submit().await;
            });
        })?;
    }

    append_child(&login_container, &login_header)?;
    append_child(&login_container, &form)?;
    append_child(&login_screen, &login_container)?;

    Ok(login_screen)
}

fn create_input_group<F>(
    id: &str,
    label_text: &str,
    input_type: &str,
    value: &str,
    disabled: bool,
    on_change: F,
    listeners: &mut Listeners,
) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", input_type)?
        .attr("id", id)?
        .attr("name", id)?
        .attr("placeholder", id)?
        .attr("required", "")?
        .attr_if(disabled, "disabled", "")?
        .build();

    // Property, not attribute: keeps the password out of the markup
    if let Some(input_el) = input.dyn_ref::<HtmlInputElement>() {
        input_el.set_value(value);
    }

    listeners.on_input_value(&input, on_change)?;

    ElementBuilder::new("div")?
        .class("form-group")
        .child(label)?
        .child(input)
        .map(ElementBuilder::build)
}
