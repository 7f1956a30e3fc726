//! # MoodTrack
//!
//! Client side of the MoodTrack mood journal: the forms that POST entries,
//! signups and logins to the backend, timezone reporting, and logout
//! handling.
//!
//! ## Modules
//!
//! - [`controller`]: page bootstrap and form handlers
//! - [`api`]: one typed call per backend endpoint
//! - [`page`] / [`transport`]: the seams the browser and native builds plug into
//! - [`config`]: endpoint paths, auth pages, messages
//! - [`http`]: `reqwest` transport (native only)
//!
//! The browser build lives in the `moodtrack-ui` crate and depends on this
//! one with default features off.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use moodtrack::{Config, Credentials, LoginOutcome, MoodApi, MoodEntry, ReqwestTransport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let transport = ReqwestTransport::new(&config.client)?;
//!     let api = MoodApi::new(transport, config.client.clone(), config.endpoints.clone());
//!
//!     let creds = Credentials::new("me@example.com", "secret");
//!     if api.login(&creds).await? == LoginOutcome::Accepted {
//!         let reply = api.submit_entry(&MoodEntry::new(7.0, "Sunny walk", "UTC")).await?;
//!         println!("{}", reply.message);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
#[cfg(feature = "native")]
pub mod http;
pub mod page;
pub mod payload;
pub mod timezone;
pub mod transport;

pub use api::MoodApi;
pub use config::{
    AccountConfig, ClientConfig, Config, EndpointConfig, LoggingConfig, MessageConfig, PageConfig,
};
#[cfg(feature = "native")]
pub use config::ConfigError;
pub use controller::{Bindings, FormController};
pub use error::{ClientError, ClientResult};
#[cfg(feature = "native")]
pub use http::ReqwestTransport;
pub use page::{DisabledGuard, Element, Page};
pub use payload::{
    Credentials, LoginOutcome, MoodEntry, ServerMessage, TimezoneReport, MOOD_MIDPOINT,
};
pub use transport::{HttpReply, Transport};
