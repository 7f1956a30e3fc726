//! Page Abstraction
//!
//! The handful of elements the server-rendered templates expose, and the
//! operations the controller performs on them. The browser crate implements
//! [`Page`] over `web_sys::Document`; tests use an in-memory page.

/// Elements the controller reads or writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// Main app container, hidden until bootstrap reveals it
    AppContent,
    LogoutButton,
    /// Mood entry form
    DataForm,
    /// Mood slider
    Mood,
    /// Number shown next to the slider
    MoodOutput,
    Description,
    /// The mood form's submit button
    SubmitButton,
    ResponseMessage,
    SignupForm,
    SignupResponse,
    LoginForm,
    LoginResponse,
    Email,
    Password,
}

impl Element {
    /// CSS selector locating the element in the document
    pub fn selector(self) -> &'static str {
        match self {
            Element::AppContent => "#appContent",
            Element::LogoutButton => "#logoutButton",
            Element::DataForm => "#dataForm",
            Element::Mood => "#mood",
            Element::MoodOutput => "#moodOutput",
            Element::Description => "#description",
            Element::SubmitButton => "button[type=\"submit\"]",
            Element::ResponseMessage => "#responseMessage",
            Element::SignupForm => "#signupForm",
            Element::SignupResponse => "#signupResponse",
            Element::LoginForm => "#loginForm",
            Element::LoginResponse => "#loginResponse",
            Element::Email => "#email",
            Element::Password => "#password",
        }
    }
}

/// The document the controller drives.
///
/// Every accessor tolerates a missing element: reads return `None` and
/// writes are no-ops.
pub trait Page {
    /// Path component of the current location
    fn path(&self) -> String;

    fn exists(&self, el: Element) -> bool;

    /// Current value of an input, textarea or output element
    fn value(&self, el: Element) -> Option<String>;

    fn set_value(&self, el: Element, value: &str);

    fn set_text(&self, el: Element, text: &str);

    fn set_disabled(&self, el: Element, disabled: bool);

    /// Make a hidden element visible
    fn reveal(&self, el: Element);

    /// Zone name from the platform locale API, if it reported one
    fn locale_timezone(&self) -> Option<String>;

    /// Leave the page
    fn navigate(&self, url: &str);
}

/// Keeps an element disabled for as long as it lives
pub struct DisabledGuard<'a, P: Page + ?Sized> {
    page: &'a P,
    el: Element,
}

impl<'a, P: Page + ?Sized> DisabledGuard<'a, P> {
    pub fn new(page: &'a P, el: Element) -> Self {
        page.set_disabled(el, true);
        Self { page, el }
    }
}

impl<P: Page + ?Sized> Drop for DisabledGuard<'_, P> {
    fn drop(&mut self) {
        self.page.set_disabled(self.el, false);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};
    use std::rc::Rc;

    /// In-memory page
    pub struct FakePage {
        pub path: String,
        pub present: HashSet<Element>,
        pub values: RefCell<HashMap<Element, String>>,
        pub texts: RefCell<HashMap<Element, String>>,
        /// Shared so a transport can observe it mid-request
        pub disabled: Rc<RefCell<HashSet<Element>>>,
        /// Every `set_disabled` call in order
        pub disabled_log: RefCell<Vec<(Element, bool)>>,
        pub revealed: RefCell<HashSet<Element>>,
        pub timezone: Option<String>,
        pub navigated: RefCell<Option<String>>,
    }

    impl FakePage {
        pub fn new(path: &str, present: &[Element]) -> Self {
            Self {
                path: path.to_string(),
                present: present.iter().copied().collect(),
                values: RefCell::new(HashMap::new()),
                texts: RefCell::new(HashMap::new()),
                disabled: Rc::new(RefCell::new(HashSet::new())),
                disabled_log: RefCell::new(Vec::new()),
                revealed: RefCell::new(HashSet::new()),
                timezone: Some("Europe/Berlin".to_string()),
                navigated: RefCell::new(None),
            }
        }

        pub fn with_value(self, el: Element, value: &str) -> Self {
            self.values.borrow_mut().insert(el, value.to_string());
            self
        }

        pub fn text(&self, el: Element) -> Option<String> {
            self.texts.borrow().get(&el).cloned()
        }

        pub fn current(&self, el: Element) -> Option<String> {
            self.values.borrow().get(&el).cloned()
        }
    }

    impl Page for FakePage {
        fn path(&self) -> String {
            self.path.clone()
        }

        fn exists(&self, el: Element) -> bool {
            self.present.contains(&el)
        }

        fn value(&self, el: Element) -> Option<String> {
            if !self.exists(el) {
                return None;
            }
            Some(self.current(el).unwrap_or_default())
        }

        fn set_value(&self, el: Element, value: &str) {
            if self.exists(el) {
                self.values.borrow_mut().insert(el, value.to_string());
            }
        }

        fn set_text(&self, el: Element, text: &str) {
            if self.exists(el) {
                self.texts.borrow_mut().insert(el, text.to_string());
            }
        }

        fn set_disabled(&self, el: Element, disabled: bool) {
            if !self.exists(el) {
                return;
            }
            self.disabled_log.borrow_mut().push((el, disabled));
            if disabled {
                self.disabled.borrow_mut().insert(el);
            } else {
                self.disabled.borrow_mut().remove(&el);
            }
        }

        fn reveal(&self, el: Element) {
            if self.exists(el) {
                self.revealed.borrow_mut().insert(el);
            }
        }

        fn locale_timezone(&self) -> Option<String> {
            self.timezone.clone()
        }

        fn navigate(&self, url: &str) {
            *self.navigated.borrow_mut() = Some(url.to_string());
        }
    }

    #[test]
    fn test_disabled_guard_restores_on_drop() {
        let page = FakePage::new("/", &[Element::SubmitButton]);
        {
            let _guard = DisabledGuard::new(&page, Element::SubmitButton);
            assert!(page.disabled.borrow().contains(&Element::SubmitButton));
        }
        assert!(page.disabled.borrow().is_empty());
        assert_eq!(
            *page.disabled_log.borrow(),
            vec![(Element::SubmitButton, true), (Element::SubmitButton, false)]
        );
    }

    #[test]
    fn test_selectors() {
        assert_eq!(Element::Mood.selector(), "#mood");
        assert_eq!(Element::SubmitButton.selector(), "button[type=\"submit\"]");
    }
}
