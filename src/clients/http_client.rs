//! Authenticated HTTP client for the booking API.
//!
//! This module provides the [`HttpClient`] type, which attaches the session's
//! bearer credential to every request and recovers from an expired
//! credential with a single refresh-and-retry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::auth::{
    login_location, AccessToken, AuthError, CredentialRefresher, HttpCredentialRefresher,
    HttpLogoutCleanup, LogoutCleanup, Navigator, Role, Session, SessionStore, TracingNavigator,
};
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::{HttpResponse, RAW_BODY_FIELD};
use crate::config::ClientConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making authenticated requests to the booking API.
///
/// The client handles:
/// - Attaching `Authorization: Bearer <token>` when the session holds a credential
/// - One refresh-and-retry per request on a 401 (never for login endpoints)
/// - Session teardown, logout cleanup, and a hard reset when refresh fails
///
/// The session store is shared, not owned: pass the same
/// `Arc<SessionStore>` to every component that needs to read who is logged in.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use booking_api::{BaseUrl, ClientConfig, HttpClient, HttpMethod, HttpRequest, SessionStore};
///
/// let config = ClientConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com")?)
///     .build()?;
/// let session = Arc::new(SessionStore::new());
/// let client = HttpClient::new(&config, Arc::clone(&session))?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/customer/reservations").build()?;
/// let response = client.request(request).await?;
/// ```
pub struct HttpClient {
    client: reqwest::Client,
    config: ClientConfig,
    session: Arc<SessionStore>,
    refresher: Arc<dyn CredentialRefresher>,
    logout_cleanup: Arc<dyn LogoutCleanup>,
    navigator: Arc<dyn Navigator>,
    default_headers: HashMap<String, String>,
    refresh_gate: Mutex<()>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", self.config.base_url())
            .field("coalesce_refresh", &self.config.coalesce_refresh())
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a client with the default collaborators.
    ///
    /// Refresh and logout cleanup go to the backend over the same transport
    /// (sharing its cookie store); hard resets are only logged. Replace them
    /// with [`with_refresher`](Self::with_refresher),
    /// [`with_logout_cleanup`](Self::with_logout_cleanup) and
    /// [`with_navigator`](Self::with_navigator).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying transport cannot be
    /// built (e.g., TLS initialization failure).
    pub fn new(config: &ClientConfig, session: Arc<SessionStore>) -> Result<Self, HttpError> {
        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .cookie_store(true);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Booking API Client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let base_url = config.base_url().clone();
        Ok(Self {
            refresher: Arc::new(HttpCredentialRefresher::new(
                client.clone(),
                base_url.clone(),
            )),
            logout_cleanup: Arc::new(HttpLogoutCleanup::new(client.clone(), base_url)),
            navigator: Arc::new(TracingNavigator),
            client,
            config: config.clone(),
            session,
            default_headers,
            refresh_gate: Mutex::new(()),
        })
    }

    /// Replaces the credential refresh operation.
    #[must_use]
    pub fn with_refresher(mut self, refresher: impl CredentialRefresher + 'static) -> Self {
        self.refresher = Arc::new(refresher);
        self
    }

    /// Replaces the best-effort logout cleanup.
    #[must_use]
    pub fn with_logout_cleanup(mut self, cleanup: impl LogoutCleanup + 'static) -> Self {
        self.logout_cleanup = Arc::new(cleanup);
        self
    }

    /// Replaces the hard-reset navigator.
    #[must_use]
    pub fn with_navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Arc::new(navigator);
        self
    }

    /// Returns the session store this client reads from.
    #[must_use]
    pub const fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the default headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns `true` if a 401 on this request may trigger a refresh.
    ///
    /// Requests already retried once, and requests to a login endpoint, are
    /// never refreshed.
    #[must_use]
    pub fn is_retry_eligible(request: &HttpRequest) -> bool {
        !request.retried && !Role::is_login_path(&request.path)
    }

    /// Sends a request with the current session credential.
    ///
    /// A 2xx response is returned as-is. A retry-eligible 401 refreshes the
    /// credential and re-issues the request exactly once, returning that
    /// attempt's outcome. If the refresh fails the session is cleared, logout
    /// cleanup runs, the navigator is hard-reset to the role's login page,
    /// and the refresh error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received, including a 401 that was not recovered (`Response`)
    /// - Credential refresh failed (`Auth`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let sent = self.session.snapshot();
        let response = self.send(&request, sent.access_token.as_ref()).await?;

        if response.is_ok() {
            return Ok(response);
        }

        if response.is_unauthorized() && Self::is_retry_eligible(&request) {
            return self.refresh_and_retry(request, &sent).await;
        }

        Err(Self::response_error(response).into())
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn get(&self, path: impl Into<String>) -> Result<HttpResponse, HttpError> {
        self.request(HttpRequest::builder(HttpMethod::Get, path).build()?)
            .await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn post(
        &self,
        path: impl Into<String>,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        self.request(Self::json_request(HttpMethod::Post, path, body)?)
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn put(
        &self,
        path: impl Into<String>,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        self.request(Self::json_request(HttpMethod::Put, path, body)?)
            .await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn patch(
        &self,
        path: impl Into<String>,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        self.request(Self::json_request(HttpMethod::Patch, path, body)?)
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn delete(&self, path: impl Into<String>) -> Result<HttpResponse, HttpError> {
        self.request(HttpRequest::builder(HttpMethod::Delete, path).build()?)
            .await
    }

    /// Ends the session the same way a failed refresh does.
    ///
    /// Clears the store, runs logout cleanup, and hard-resets to the login
    /// page of the role that was logged in. Waits for an in-flight coalesced
    /// refresh to settle first, so the refreshed credential cannot land in
    /// the store after it was cleared.
    pub async fn logout(&self) {
        let _gate = self.refresh_gate.lock().await;
        let role = self.session.role();
        self.session.clear();
        self.finish_teardown(role).await;
    }

    fn json_request(
        method: HttpMethod,
        path: impl Into<String>,
        body: serde_json::Value,
    ) -> Result<HttpRequest, HttpError> {
        Ok(HttpRequest::builder(method, path)
            .body(body)
            .body_type(crate::clients::DataType::Json)
            .build()?)
    }

    async fn refresh_and_retry(
        &self,
        mut request: HttpRequest,
        sent: &Session,
    ) -> Result<HttpResponse, HttpError> {
        request.retried = true;

        let credential = self.fresh_credential(sent).await?;

        tracing::debug!(
            "Retrying {} {} with refreshed credential",
            request.http_method,
            request.path
        );
        let response = self.send(&request, Some(&credential)).await?;

        if response.is_ok() {
            Ok(response)
        } else {
            Err(Self::response_error(response).into())
        }
    }

    /// Obtains a credential to replace the one in `sent`, refreshing if needed.
    ///
    /// With coalescing on, callers queue on the refresh gate; whoever finds
    /// the session already moved on from `sent` does not call the refresh
    /// endpoint again. Every write back to the store is conditional on the
    /// store still holding `sent`, so a logout or a new login that happens
    /// during the refresh wins.
    async fn fresh_credential(&self, sent: &Session) -> Result<AccessToken, HttpError> {
        let _gate = if self.config.coalesce_refresh() {
            let gate = self.refresh_gate.lock().await;
            if !self.session.snapshot().same_login(sent) {
                tracing::debug!("Session changed while waiting on a concurrent refresh");
                return self.credential_after_change(sent);
            }
            Some(gate)
        } else {
            None
        };

        let Some(role) = sent.role else {
            tracing::warn!("Received 401 with no active role, ending session");
            if self.session.clear_if_current(sent) {
                self.finish_teardown(None).await;
                return Err(AuthError::NoActiveRole.into());
            }
            return self.credential_after_change(sent);
        };

        tracing::debug!("Refreshing credential for {}", role);
        match self
            .refresher
            .refresh(role, sent.refresh_token.as_ref())
            .await
        {
            Ok(refreshed) => {
                let token = refreshed.access_token.clone();
                if self.session.replace_credential(sent, refreshed) {
                    Ok(token)
                } else {
                    tracing::debug!(
                        "Discarding credential refreshed for {}, session changed during refresh",
                        role
                    );
                    self.credential_after_change(sent)
                }
            }
            Err(err) => {
                tracing::warn!("Credential refresh for {} failed: {}", role, err);
                if self.session.clear_if_current(sent) {
                    self.finish_teardown(Some(role)).await;
                } else {
                    tracing::debug!("Session changed during refresh, skipping teardown");
                }
                Err(err.into())
            }
        }
    }

    /// Picks the credential to retry with once the store no longer holds `sent`.
    ///
    /// A newer credential for the same role is reused. A cleared session, or
    /// one now logged in as a different role, fails the request.
    fn credential_after_change(&self, sent: &Session) -> Result<AccessToken, HttpError> {
        let Session {
            access_token, role, ..
        } = self.session.snapshot();
        match access_token {
            Some(token) if role == sent.role => Ok(token),
            _ => Err(AuthError::SessionCleared.into()),
        }
    }

    /// Runs logout cleanup and the hard reset for a session already cleared.
    async fn finish_teardown(&self, role: Option<Role>) {
        if let Err(err) = self.logout_cleanup.logout(role).await {
            tracing::debug!("Ignoring logout cleanup failure: {}", err);
        }

        let location = login_location(&self.config, role);
        self.navigator.hard_reset(&location);
    }

    async fn send(
        &self,
        request: &HttpRequest,
        credential: Option<&AccessToken>,
    ) -> Result<HttpResponse, HttpError> {
        let url = self.config.base_url().join(&request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }
        if let Some(token) = credential {
            headers.insert("Authorization".to_string(), token.bearer());
        }

        let mut req_builder = self.client.request(request.http_method.into(), &url);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }
        if let Some(body) = request.body_text() {
            req_builder = req_builder.body(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                let mut raw = serde_json::Map::new();
                raw.insert(
                    RAW_BODY_FIELD.to_string(),
                    serde_json::Value::String(body_text),
                );
                serde_json::Value::Object(raw)
            })
        };

        Ok(HttpResponse::new(code, res_headers, body))
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    fn response_error(response: HttpResponse) -> HttpResponseError {
        HttpResponseError {
            code: response.code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
            response,
        }
    }

    /// Serializes the error fields of a response body to a JSON string.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for field in ["errors", "error", "message", "code", RAW_BODY_FIELD] {
            if let Some(value) = response.body.get(field) {
                error_body.insert(field.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
