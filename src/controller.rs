//! Form Controller
//!
//! Everything that happens on a page after it loads: decide which listeners
//! to attach, then run the matching handler each time one fires.
//!
//! Handlers never return errors. A failed request is logged and the form
//! shows its fixed fallback message.

use crate::api::MoodApi;
use crate::config::{Config, MessageConfig, PageConfig};
use crate::page::{DisabledGuard, Element, Page};
use crate::payload::{Credentials, LoginOutcome, MoodEntry, TimezoneReport, MOOD_MIDPOINT};
use crate::timezone;
use crate::transport::Transport;

/// Listeners the bootstrap decided to attach
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bindings {
    /// Click on the logout button
    pub logout: bool,
    /// One timezone report for this load
    pub timezone: bool,
    /// Submit on the mood form
    pub mood_form: bool,
    /// Slider input mirrored into the output element
    pub mood_mirror: bool,
    /// Submit on the signup form
    pub signup_form: bool,
    /// Submit on the login form
    pub login_form: bool,
}

/// Drives one page
pub struct FormController<P, T> {
    page: P,
    api: MoodApi<T>,
    pages: PageConfig,
    messages: MessageConfig,
}

impl<P: Page, T: Transport> FormController<P, T> {
    pub fn new(page: P, transport: T, config: &Config) -> Self {
        Self {
            page,
            api: MoodApi::new(
                transport,
                config.client.clone(),
                config.endpoints.clone(),
            ),
            pages: config.pages.clone(),
            messages: config.messages.clone(),
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn api(&self) -> &MoodApi<T> {
        &self.api
    }

    /// Inspect the page once after load.
    ///
    /// Off the auth pages the app container is revealed and the logout and
    /// timezone bindings are enabled. Form bindings depend only on whether
    /// the form is in the document.
    pub fn bootstrap(&self) -> Bindings {
        let path = self.page.path();
        let app_page = !self.pages.is_auth_page(&path);

        if app_page {
            self.page.reveal(Element::AppContent);
        }

        let bindings = Bindings {
            logout: app_page && self.page.exists(Element::LogoutButton),
            timezone: app_page,
            mood_form: self.page.exists(Element::DataForm),
            mood_mirror: self.page.exists(Element::Mood) && self.page.exists(Element::MoodOutput),
            signup_form: self.page.exists(Element::SignupForm),
            login_form: self.page.exists(Element::LoginForm),
        };

        tracing::debug!(path = %path, ?bindings, "Bootstrapped page");
        bindings
    }

    /// Zone from the platform, or UTC
    pub fn detected_timezone(&self) -> String {
        timezone::resolve(self.page.locale_timezone().as_deref())
    }

    /// Send the detected zone to the backend. Fire and forget: the outcome
    /// is only logged.
    pub async fn report_timezone(&self) {
        let tz = self.detected_timezone();
        tracing::info!("Detected timezone: {}", tz);

        let report = TimezoneReport { timezone: tz };
        match self.api.report_timezone(&report).await {
            Ok(true) => tracing::info!("Timezone successfully sent to backend"),
            Ok(false) => tracing::error!("Failed to send timezone to backend"),
            Err(e) => tracing::error!(error = %e, "Error sending timezone"),
        }
    }

    /// End the session and follow the server's redirect, if any
    pub async fn logout(&self) {
        tracing::info!("Logout requested");

        match self.api.logout().await {
            Ok(Some(target)) => self.page.navigate(&target),
            Ok(None) => tracing::debug!("Logout returned without redirect"),
            Err(e) => tracing::error!(error = %e, "Logout failed"),
        }
    }

    /// Show the slider's current value next to it
    pub fn mirror_mood(&self) {
        if let Some(value) = self.page.value(Element::Mood) {
            self.page.set_value(Element::MoodOutput, &value);
        }
    }

    /// Submit the mood form.
    ///
    /// The submit button stays disabled until the request settles, whatever
    /// the outcome. Fields are cleared only when the reply is exactly the
    /// success message.
    pub async fn submit_mood(&self) {
        let slider = self.page.value(Element::Mood).unwrap_or_default();
        let description = self.page.value(Element::Description).unwrap_or_default();
        let entry = MoodEntry::from_slider(&slider, description, self.detected_timezone());

        let _disabled = DisabledGuard::new(&self.page, Element::SubmitButton);

        match self.api.submit_entry(&entry).await {
            Ok(reply) => {
                self.page.set_text(Element::ResponseMessage, &reply.message);

                if reply.message == self.messages.entry_saved {
                    let midpoint = MOOD_MIDPOINT.to_string();
                    self.page.set_value(Element::Description, "");
                    self.page.set_value(Element::Mood, &midpoint);
                    self.page.set_value(Element::MoodOutput, &midpoint);
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Mood submission failed");
                self.page
                    .set_text(Element::ResponseMessage, &self.messages.entry_failed);
            }
        }
    }

    /// Submit the signup form
    pub async fn submit_signup(&self) {
        let credentials = self.credentials();

        match self.api.signup(&credentials).await {
            Ok(reply) => self.page.set_text(Element::SignupResponse, &reply.message),
            Err(e) => {
                tracing::error!(error = %e, "Signup failed");
                self.page
                    .set_text(Element::SignupResponse, &self.messages.signup_failed);
            }
        }
    }

    /// Submit the login form. Success leaves for the app root; rejection
    /// shows the server's message and stays.
    pub async fn submit_login(&self) {
        let credentials = self.credentials();

        match self.api.login(&credentials).await {
            Ok(LoginOutcome::Accepted) => {
                tracing::info!("Login accepted");
                self.page.navigate(&self.api.endpoints().root);
            }
            Ok(LoginOutcome::Rejected { message }) => {
                self.page.set_text(Element::LoginResponse, &message);
            }
            Err(e) => {
                tracing::error!(error = %e, "Login failed");
                self.page
                    .set_text(Element::LoginResponse, &self.messages.login_failed);
            }
        }
    }

    fn credentials(&self) -> Credentials {
        Credentials::new(
            self.page.value(Element::Email).unwrap_or_default(),
            self.page.value(Element::Password).unwrap_or_default(),
        )
        .with_timezone(self.detected_timezone())
    }
}
