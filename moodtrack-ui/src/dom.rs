//! DOM Page
//!
//! [`Page`] over the live document. Elements are looked up on every call so
//! markup swapped in after load is still found.

use js_sys::{Array, Intl, Object, Reflect};
use moodtrack::{Element, Page};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlOutputElement,
    HtmlTextAreaElement, Window,
};

/// The current browser document
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    /// `None` outside a window context (e.g. a worker)
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// First element matching the selector, if present
    pub fn element(&self, el: Element) -> Option<web_sys::Element> {
        self.document.query_selector(el.selector()).ok().flatten()
    }
}

impl Page for DomPage {
    fn path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn exists(&self, el: Element) -> bool {
        self.element(el).is_some()
    }

    fn value(&self, el: Element) -> Option<String> {
        let node = self.element(el)?;

        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            Some(input.value())
        } else if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
            Some(area.value())
        } else if let Some(output) = node.dyn_ref::<HtmlOutputElement>() {
            Some(output.value())
        } else {
            node.text_content()
        }
    }

    fn set_value(&self, el: Element, value: &str) {
        let Some(node) = self.element(el) else {
            return;
        };

        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Some(output) = node.dyn_ref::<HtmlOutputElement>() {
            output.set_value(value);
        } else {
            node.set_text_content(Some(value));
        }
    }

    fn set_text(&self, el: Element, text: &str) {
        if let Some(node) = self.element(el) {
            node.set_text_content(Some(text));
        }
    }

    fn set_disabled(&self, el: Element, disabled: bool) {
        let Some(node) = self.element(el) else {
            return;
        };

        if let Some(button) = node.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(disabled);
        } else {
            let result = if disabled {
                node.set_attribute("disabled", "")
            } else {
                node.remove_attribute("disabled")
            };
            if let Err(e) = result {
                console_error(&format!("Toggling disabled on {} failed: {:?}", el.selector(), e));
            }
        }
    }

    fn reveal(&self, el: Element) {
        if let Some(node) = self.element(el).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            if let Err(e) = node.style().set_property("display", "block") {
                console_error(&format!("Revealing {} failed: {:?}", el.selector(), e));
            }
        }
    }

    fn locale_timezone(&self) -> Option<String> {
        let format = Intl::DateTimeFormat::new(&Array::new(), &Object::new());
        let options = format.resolved_options();
        Reflect::get(&options, &JsValue::from_str("timeZone"))
            .ok()
            .and_then(|tz| tz.as_string())
    }

    fn navigate(&self, url: &str) {
        if let Err(e) = self.window.location().set_href(url) {
            console_error(&format!("Navigation to {} failed: {:?}", url, e));
        }
    }
}

fn console_error(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}
