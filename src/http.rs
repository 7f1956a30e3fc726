//! Native HTTP Transport
//!
//! `reqwest` client with a cookie store, so the session cookie set by
//! `/login` rides along on every later request from the same process.

use async_trait::async_trait;
use reqwest::{header, Client, Response};
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::transport::{HttpReply, Transport};

/// [`Transport`] backed by `reqwest`
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client })
    }

    async fn finish(requested: &str, response: Response) -> ClientResult<HttpReply> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let redirected = !same_url(requested, &url);
        let body = response.text().await?;

        Ok(HttpReply {
            status,
            url,
            redirected,
            body,
        })
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> ClientResult<HttpReply> {
        let response = self.client.get(url).send().await?;
        Self::finish(url, response).await
    }

    async fn post_json(&self, url: &str, body: String) -> ClientResult<HttpReply> {
        let response = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        Self::finish(url, response).await
    }
}

/// `reqwest` normalizes URLs (`http://host` becomes `http://host/`), so
/// compare parsed forms rather than raw strings.
fn same_url(requested: &str, final_url: &str) -> bool {
    match reqwest::Url::parse(requested) {
        Ok(parsed) => parsed.as_str() == final_url,
        Err(_) => requested == final_url,
    }
}
