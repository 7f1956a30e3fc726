//! Backend API
//!
//! One method per endpoint the web app talks to:
//!
//! - `POST /submit_entry` - store a mood entry
//! - `POST /signup` - create an account
//! - `POST /login` - start a session
//! - `GET /logout` - end the session, answered with a redirect
//! - `POST /set_timezone` - remember the browser's zone for the session
//!
//! Every endpoint answers with a JSON body carrying at least `message`.

use serde::Serialize;

use crate::config::{ClientConfig, EndpointConfig};
use crate::error::{ClientError, ClientResult};
use crate::payload::{Credentials, LoginOutcome, MoodEntry, ServerMessage, TimezoneReport};
use crate::transport::{HttpReply, Transport};

/// Typed access to the backend over any [`Transport`]
pub struct MoodApi<T> {
    transport: T,
    client: ClientConfig,
    endpoints: EndpointConfig,
}

impl<T: Transport> MoodApi<T> {
    pub fn new(transport: T, client: ClientConfig, endpoints: EndpointConfig) -> Self {
        Self {
            transport,
            client,
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &EndpointConfig {
        &self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submit a mood entry. The message is returned whatever the status code;
    /// validation and auth failures come back as 4xx with a message.
    pub async fn submit_entry(&self, entry: &MoodEntry) -> ClientResult<ServerMessage> {
        let reply = self.post(&self.endpoints.submit_entry, entry).await?;
        reply.json()
    }

    /// Create an account
    pub async fn signup(&self, credentials: &Credentials) -> ClientResult<ServerMessage> {
        let reply = self.post(&self.endpoints.signup, credentials).await?;
        reply.json()
    }

    /// Log in. Only a non-2xx reply carries a message worth showing; on
    /// success the body is whatever page the redirect landed on.
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<LoginOutcome> {
        let reply = self.post(&self.endpoints.login, credentials).await?;

        if reply.ok() {
            return Ok(LoginOutcome::Accepted);
        }

        let msg: ServerMessage = reply.json()?;
        Ok(LoginOutcome::Rejected {
            message: msg.message,
        })
    }

    /// Log out. Returns the redirect target when the server sent one.
    pub async fn logout(&self) -> ClientResult<Option<String>> {
        let url = self.client.url_for(&self.endpoints.logout);
        let reply = self.transport.get(&url).await?;
        Ok(reply.redirected.then_some(reply.url))
    }

    /// Report the detected timezone. Returns whether the server accepted it.
    pub async fn report_timezone(&self, report: &TimezoneReport) -> ClientResult<bool> {
        let reply = self.post(&self.endpoints.set_timezone, report).await?;
        Ok(reply.ok())
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<HttpReply> {
        let body = serde_json::to_string(body).map_err(|e| ClientError::Encode(e.to_string()))?;
        let url = self.client.url_for(path);

        tracing::debug!(url = %url, "POST");
        let reply = self.transport.post_json(&url, body).await?;
        tracing::debug!(url = %url, status = reply.status, "response");

        Ok(reply)
    }
}
