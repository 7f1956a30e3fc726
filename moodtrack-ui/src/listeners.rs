//! Event Listeners
//!
//! Attaches one DOM listener per binding the bootstrap enabled. Handlers
//! share the controller through `Rc`; each async handler runs on
//! `spawn_local` and owns its own clone.

use std::rc::Rc;

use moodtrack::{Bindings, Element, FormController};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Event;

use crate::dom::DomPage;
use crate::fetch::FetchTransport;

pub type Controller = FormController<DomPage, FetchTransport>;

/// Wire every enabled binding
pub fn attach(controller: Rc<Controller>, bindings: Bindings) -> Result<(), JsValue> {
    if bindings.logout {
        let ctl = Rc::clone(&controller);
        listen(&controller, Element::LogoutButton, "click", move |_| {
            web_sys::console::log_1(&"Logout button clicked".into());
            let ctl = Rc::clone(&ctl);
            spawn_local(async move { ctl.logout().await });
        })?;
    }

    if bindings.mood_mirror {
        let ctl = Rc::clone(&controller);
        listen(&controller, Element::Mood, "input", move |_| ctl.mirror_mood())?;
    }

    if bindings.mood_form {
        let ctl = Rc::clone(&controller);
        listen_submit(&controller, Element::DataForm, move || {
            let ctl = Rc::clone(&ctl);
            spawn_local(async move { ctl.submit_mood().await });
        })?;
    }

    if bindings.signup_form {
        let ctl = Rc::clone(&controller);
        listen_submit(&controller, Element::SignupForm, move || {
            let ctl = Rc::clone(&ctl);
            spawn_local(async move { ctl.submit_signup().await });
        })?;
    }

    if bindings.login_form {
        let ctl = Rc::clone(&controller);
        listen_submit(&controller, Element::LoginForm, move || {
            let ctl = Rc::clone(&ctl);
            spawn_local(async move { ctl.submit_login().await });
        })?;
    }

    // Once per load, not tied to any element
    if bindings.timezone {
        spawn_local(async move { controller.report_timezone().await });
    }

    Ok(())
}

/// Submit listener that keeps the browser from doing a full-page POST
fn listen_submit<F>(controller: &Controller, el: Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen(controller, el, "submit", move |event| {
        event.prevent_default();
        handler();
    })
}

fn listen<F>(controller: &Controller, el: Element, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let Some(target) = controller.page().element(el) else {
        return Ok(());
    };

    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}
