//! Fetch Transport
//!
//! [`Transport`] over the browser's `fetch`, via `gloo-net`. Cookies go with
//! every same-origin request, so the Flask session works unchanged.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use moodtrack::{ClientError, ClientResult, HttpReply, Transport};

/// Same-origin unless overridden in local storage
pub const DEFAULT_API_BASE: &str = "";

const API_BASE_KEY: &str = "moodtrack_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(API_BASE_KEY, url);
    }
}

/// `fetch`-backed transport
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl FetchTransport {
    async fn finish(response: Response) -> ClientResult<HttpReply> {
        let status = response.status();
        let url = response.url();
        let redirected = response.redirected();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(format!("Failed to read body: {}", e)))?;

        Ok(HttpReply {
            status,
            url,
            redirected,
            body,
        })
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn get(&self, url: &str) -> ClientResult<HttpReply> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Self::finish(response).await
    }

    async fn post_json(&self, url: &str, body: String) -> ClientResult<HttpReply> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ClientError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Self::finish(response).await
    }
}
