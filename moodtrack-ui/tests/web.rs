//! Browser tests for the DOM page and the bootstrap, run with
//! `wasm-pack test --headless --firefox moodtrack-ui`.

use moodtrack::{Bindings, Config, Element, FormController, Page};
use moodtrack_ui::dom::DomPage;
use moodtrack_ui::fetch::{self, FetchTransport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlButtonElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Replace the body with the mood entry template
fn mount_mood_form() {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(
        r#"
        <div id="appContent" style="display: none">
            <button id="logoutButton">Logout</button>
            <form id="dataForm">
                <input type="range" id="mood" min="0" max="10" step="0.5" value="7">
                <output id="moodOutput">7</output>
                <textarea id="description">Long walk</textarea>
                <button type="submit">Submit</button>
            </form>
            <p id="responseMessage"></p>
        </div>
        "#,
    );
}

/// Replace the body with the login template
fn mount_login_form() {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(
        r#"
        <form id="loginForm">
            <input type="email" id="email" value="me@example.com">
            <input type="password" id="password" value="hunter2">
            <button type="submit">Log in</button>
        </form>
        <p id="loginResponse"></p>
        "#,
    );
}

/// Fire a cancelable `submit` at the element, returning the event
fn submit(page: &DomPage, el: Element) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();

    let not_cancelled = page.element(el).unwrap().dispatch_event(&event).unwrap();
    assert!(!not_cancelled);
    event
}

/// Let tasks queued with `spawn_local` run
async fn next_tick() {
    JsFuture::from(js_sys::Promise::resolve(&JsValue::NULL))
        .await
        .unwrap();
}

fn controller() -> FormController<DomPage, FetchTransport> {
    FormController::new(DomPage::new().unwrap(), FetchTransport, &Config::default())
}

#[wasm_bindgen_test]
fn test_reads_and_writes_form_values() {
    mount_mood_form();
    let page = DomPage::new().unwrap();

    assert_eq!(page.value(Element::Mood).as_deref(), Some("7"));
    assert_eq!(page.value(Element::Description).as_deref(), Some("Long walk"));

    page.set_value(Element::Mood, "5");
    page.set_value(Element::Description, "");
    page.set_value(Element::MoodOutput, "5");

    assert_eq!(page.value(Element::Mood).as_deref(), Some("5"));
    assert_eq!(page.value(Element::Description).as_deref(), Some(""));
    assert_eq!(page.value(Element::MoodOutput).as_deref(), Some("5"));
}

#[wasm_bindgen_test]
fn test_missing_elements_are_ignored() {
    mount_mood_form();
    let page = DomPage::new().unwrap();

    assert!(!page.exists(Element::LoginForm));
    assert_eq!(page.value(Element::Email), None);
    page.set_text(Element::LoginResponse, "nobody sees this");
    page.set_disabled(Element::LoginForm, true);
}

#[wasm_bindgen_test]
fn test_disable_submit_button() {
    mount_mood_form();
    let page = DomPage::new().unwrap();

    page.set_disabled(Element::SubmitButton, true);
    let button: HtmlButtonElement = page
        .element(Element::SubmitButton)
        .unwrap()
        .dyn_into()
        .unwrap();
    assert!(button.disabled());

    page.set_disabled(Element::SubmitButton, false);
    assert!(!button.disabled());
}

#[wasm_bindgen_test]
fn test_disable_plain_element_uses_attribute() {
    mount_mood_form();
    let page = DomPage::new().unwrap();
    let form = page.element(Element::DataForm).unwrap();

    page.set_disabled(Element::DataForm, true);
    assert!(form.has_attribute("disabled"));

    page.set_disabled(Element::DataForm, false);
    assert!(!form.has_attribute("disabled"));
}

#[wasm_bindgen_test]
fn test_reveal_missing_element_is_ignored() {
    mount_login_form();
    let page = DomPage::new().unwrap();
    page.reveal(Element::AppContent);
    assert!(!page.exists(Element::AppContent));
}

#[wasm_bindgen_test]
async fn test_mood_submit_is_intercepted() {
    mount_mood_form();
    fetch::set_api_base("");
    moodtrack_ui::init(DomPage::new().unwrap()).unwrap();

    let page = DomPage::new().unwrap();
    let event = submit(&page, Element::DataForm);
    assert!(event.default_prevented());

    next_tick().await;
    let button: HtmlButtonElement = page
        .element(Element::SubmitButton)
        .unwrap()
        .dyn_into()
        .unwrap();
    assert!(button.disabled());
}

#[wasm_bindgen_test]
async fn test_login_submit_is_intercepted() {
    mount_login_form();
    fetch::set_api_base("");
    moodtrack_ui::init(DomPage::new().unwrap()).unwrap();

    let page = DomPage::new().unwrap();
    let event = submit(&page, Element::LoginForm);
    assert!(event.default_prevented());

    next_tick().await;
    // Still on the test runner page: the browser did not post the form
    assert_eq!(page.value(Element::Email).as_deref(), Some("me@example.com"));
}

#[wasm_bindgen_test]
fn test_bootstrap_reveals_app() {
    mount_mood_form();
    let ctl = controller();

    let bindings = ctl.bootstrap();
    assert_eq!(
        bindings,
        Bindings {
            logout: true,
            timezone: true,
            mood_form: true,
            mood_mirror: true,
            signup_form: false,
            login_form: false,
        }
    );

    let app: HtmlElement = ctl
        .page()
        .element(Element::AppContent)
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(app.style().get_property_value("display").unwrap(), "block");
}

#[wasm_bindgen_test]
fn test_mirror_mood() {
    mount_mood_form();
    let ctl = controller();

    ctl.page().set_value(Element::Mood, "2.5");
    ctl.mirror_mood();
    assert_eq!(ctl.page().value(Element::MoodOutput).as_deref(), Some("2.5"));
}

#[wasm_bindgen_test]
fn test_locale_timezone_is_reported() {
    let page = DomPage::new().unwrap();
    let tz = page.locale_timezone().unwrap();
    assert!(!tz.is_empty());
    assert_eq!(controller().detected_timezone(), tz);
}

#[wasm_bindgen_test]
fn test_api_base_override() {
    fetch::set_api_base("http://localhost:5009/");
    assert_eq!(fetch::get_api_base(), "http://localhost:5009");

    fetch::set_api_base("");
    assert_eq!(fetch::get_api_base(), "");
}
