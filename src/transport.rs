//! Transport Abstraction
//!
//! The controller is written against this trait so the same code runs on
//! `fetch` in the browser and on `reqwest` natively. Futures are `?Send`
//! because the browser side is single-threaded.

use async_trait::async_trait;

use crate::error::ClientResult;

/// A completed HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    /// Final status code after redirects
    pub status: u16,
    /// Final URL after redirects
    pub url: String,
    /// Whether any redirect was followed
    pub redirected: bool,
    /// Raw response body
    pub body: String,
}

impl HttpReply {
    /// 2xx
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> ClientResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Something that can issue requests against the backend
#[async_trait(?Send)]
pub trait Transport {
    /// `GET url`
    async fn get(&self, url: &str) -> ClientResult<HttpReply>;

    /// `POST url` with an already-serialized JSON body
    async fn post_json(&self, url: &str, body: String) -> ClientResult<HttpReply>;
}
