//! Biblio API client and the session refresh coordinator

use std::sync::Arc;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use biblio_core::{MemorySessionStore, SessionStore, is_expired};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, ClientBuilder, Method, Request, RequestBuilder, Response, StatusCode};
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::navigator::{Navigator, NoopNavigator};
use crate::types::{RefreshResponse, ResponseStatus};

const REFRESH_PATH: &str = "/auth/refresh";

/// Biblio API client.
///
/// Every request built through [`request`](Self::request) and executed
/// through [`execute`](Self::execute) runs inside the session coordinator:
///
/// - pre-flight, the stored token is attached as a bearer credential; a token
///   that is already expired is exchanged at the refresh endpoint first, and
///   an absent token sends the request unauthenticated;
/// - post-flight, a 401 answer triggers one refresh followed by one retry of
///   the original request.
///
/// When a refresh fails the session store is cleared and the [`Navigator`] is
/// asked to redirect to the sign-in route with the current path, which is the
/// designed recovery for every authentication failure. Callers never set the
/// `Authorization` header themselves.
#[derive(Clone)]
pub struct BiblioClient {
    client: Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl BiblioClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> BiblioClientBuilder {
        BiblioClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Session store holding the current token and cached profile.
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Create a request builder.
    ///
    /// No `Authorization` header is set here; the coordinator owns that
    /// header and attaches the current token at send time.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request through the session coordinator and decode the body.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let request = request.build()?;
        let response = self.send_with_session(request).await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    /// Send a request with the session token attached, refreshing the token
    /// before the call when it is already expired and once more when the
    /// server answers 401.
    ///
    /// At most one refresh and one retry happen per request; a 401 on the
    /// retried request is returned as-is.
    async fn send_with_session(&self, mut request: Request) -> Result<Response, ClientError> {
        let mut token = self.store.token();
        let mut refreshed = false;

        // Pre-flight. An absent token means the request goes out
        // unauthenticated; a token known to be expired is exchanged before
        // the request is sent at all.
        if let Some(current) = token.as_deref() {
            if is_expired(current) {
                debug!("access token expired, refreshing before request");
                match self.refresh(current).await {
                    Ok(new_token) => {
                        self.store.set_token(&new_token);
                        token = Some(new_token);
                        refreshed = true;
                    }
                    Err(err) => {
                        warn!(error = %err, "pre-flight token refresh failed, signing out");
                        self.force_sign_out();
                        return Err(ClientError::SessionExpired(err.to_string()));
                    }
                }
            }
        }

        // Streaming bodies cannot be replayed; such requests skip the 401
        // retry and surface the response as-is.
        let retry = request.try_clone();

        if let Some(current) = token.as_deref() {
            request.headers_mut().insert(AUTHORIZATION, bearer(current)?);
        }

        let response = self.client.execute(request).await?;

        // Post-flight. The server rejected a token that looked live locally;
        // one refresh, one retry. A refresh already performed pre-flight
        // counts as this request's refresh.
        if response.status() == StatusCode::UNAUTHORIZED && !refreshed {
            if let (Some(current), Some(mut retry_request)) = (token.as_deref(), retry) {
                debug!("request rejected with 401, refreshing token");
                match self.refresh(current).await {
                    Ok(new_token) => {
                        self.store.set_token(&new_token);
                        retry_request
                            .headers_mut()
                            .insert(AUTHORIZATION, bearer(&new_token)?);
                        return Ok(self.client.execute(retry_request).await?);
                    }
                    Err(err) => {
                        // The caller sees the original 401, not the refresh
                        // failure.
                        warn!(error = %err, "token refresh after 401 failed, signing out");
                        self.force_sign_out();
                    }
                }
            }
        }

        Ok(response)
    }

    /// Exchange the current (possibly expired) token for a fresh one.
    ///
    /// Goes straight through the underlying transport: a refresh call must
    /// never re-enter the coordinator or trigger a refresh of its own, and no
    /// transport-level retry is applied.
    async fn refresh(&self, current: &str) -> Result<String, ClientError> {
        let url = format!("{}{}", self.base_url, REFRESH_PATH);
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {current}"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(ClientError::from_status(status, message));
        }

        let body: RefreshResponse = response.json().await?;
        match body.access_token {
            Some(new_token) if body.status == ResponseStatus::Success => Ok(new_token),
            // A success envelope without a token is still a failed refresh.
            _ => Err(ClientError::AuthenticationFailed(body.message)),
        }
    }

    /// Tear the session down and ask the host router for the sign-in page,
    /// carrying the path the user was on.
    pub(crate) fn force_sign_out(&self) {
        self.store.clear();
        let from = self.navigator.current_path();
        self.navigator.redirect_to_sign_in(&from);
    }
}

fn bearer(token: &str) -> Result<HeaderValue, ClientError> {
    HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| ClientError::Configuration("token is not a valid header value".into()))
}

/// Builder for [`BiblioClient`]
pub struct BiblioClientBuilder {
    base_url: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    timeout: Option<Duration>,
    user_agent: Option<String>,
    store: Option<Arc<dyn SessionStore>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl Default for BiblioClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            #[cfg(not(target_arch = "wasm32"))]
            timeout: None,
            user_agent: None,
            store: None,
            navigator: None,
        }
    }
}

impl BiblioClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set the session store backing the client.
    ///
    /// Defaults to an in-memory store.
    pub fn store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the navigator invoked on forced sign-out.
    ///
    /// Defaults to a no-op.
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<BiblioClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder = client_builder.user_agent("biblio-client/0.1.0");
        }

        let client = client_builder.build()?;

        Ok(BiblioClient {
            client,
            base_url,
            store: self
                .store
                .unwrap_or_else(|| Arc::new(MemorySessionStore::new())),
            navigator: self.navigator.unwrap_or_else(|| Arc::new(NoopNavigator)),
        })
    }
}
