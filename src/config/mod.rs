//! Configuration types for the booking API client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: The configuration consumed by [`HttpClient`](crate::HttpClient)
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`BaseUrl`]: A validated absolute URL
//!
//! # Example
//!
//! ```rust
//! use booking_api::{BaseUrl, ClientConfig};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert!(config.coalesce_refresh());
//! assert_eq!(config.fallback_redirect(), "/");
//! ```

mod newtypes;

pub use newtypes::BaseUrl;

use std::time::Duration;

use crate::error::ConfigError;

/// Default location for the hard reset when no role is known.
pub const DEFAULT_FALLBACK_REDIRECT: &str = "/";

/// Configuration for the authenticated request client.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: BaseUrl,
    app_url: Option<BaseUrl>,
    fallback_redirect: String,
    coalesce_refresh: bool,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the REST backend base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the front-end application URL used for redirects, if configured.
    #[must_use]
    pub const fn app_url(&self) -> Option<&BaseUrl> {
        self.app_url.as_ref()
    }

    /// Returns the redirect location used when the role is unknown.
    #[must_use]
    pub fn fallback_redirect(&self) -> &str {
        &self.fallback_redirect
    }

    /// Returns whether concurrent refreshes are coalesced into one.
    #[must_use]
    pub const fn coalesce_refresh(&self) -> bool {
        self.coalesce_refresh
    }

    /// Returns the request timeout, if one overrides the transport default.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// `base_url` is required. Defaults:
///
/// - `app_url`: `None` (redirects use bare paths)
/// - `fallback_redirect`: `"/"`
/// - `coalesce_refresh`: `true`
/// - `timeout`: `None` (transport default)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use booking_api::{BaseUrl, ClientConfig};
///
/// let config = ClientConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .app_url(BaseUrl::new("https://book.example.com").unwrap())
///     .fallback_redirect("/welcome")
///     .coalesce_refresh(false)
///     .timeout(Duration::from_secs(10))
///     .user_agent_prefix("BookingWeb/2.1")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<BaseUrl>,
    app_url: Option<BaseUrl>,
    fallback_redirect: Option<String>,
    coalesce_refresh: Option<bool>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the REST backend base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the front-end application URL prefixed to redirect locations.
    #[must_use]
    pub fn app_url(mut self, url: BaseUrl) -> Self {
        self.app_url = Some(url);
        self
    }

    /// Sets the redirect location used when no role is known.
    #[must_use]
    pub fn fallback_redirect(mut self, location: impl Into<String>) -> Self {
        self.fallback_redirect = Some(location.into());
        self
    }

    /// Sets whether concurrent refreshes share a single in-flight refresh.
    #[must_use]
    pub const fn coalesce_refresh(mut self, coalesce: bool) -> Self {
        self.coalesce_refresh = Some(coalesce);
        self
    }

    /// Sets a request timeout for every outbound call.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set,
    /// or [`ConfigError::EmptyFallbackRedirect`] if the fallback is blank.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        let fallback_redirect = self
            .fallback_redirect
            .unwrap_or_else(|| DEFAULT_FALLBACK_REDIRECT.to_string());
        if fallback_redirect.trim().is_empty() {
            return Err(ConfigError::EmptyFallbackRedirect);
        }

        Ok(ClientConfig {
            base_url,
            app_url: self.app_url,
            fallback_redirect,
            coalesce_refresh: self.coalesce_refresh.unwrap_or(true),
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> BaseUrl {
        BaseUrl::new("https://api.example.com").unwrap()
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = ClientConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ClientConfig::builder().base_url(base_url()).build().unwrap();

        assert_eq!(config.base_url().as_ref(), "https://api.example.com");
        assert!(config.app_url().is_none());
        assert_eq!(config.fallback_redirect(), "/");
        assert!(config.coalesce_refresh());
        assert!(config.timeout().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_rejects_blank_fallback() {
        let result = ClientConfig::builder()
            .base_url(base_url())
            .fallback_redirect("  ")
            .build();

        assert!(matches!(result, Err(ConfigError::EmptyFallbackRedirect)));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let app_url = BaseUrl::new("https://book.example.com").unwrap();

        let config = ClientConfig::builder()
            .base_url(base_url())
            .app_url(app_url.clone())
            .fallback_redirect("/welcome")
            .coalesce_refresh(false)
            .timeout(Duration::from_secs(5))
            .user_agent_prefix("BookingWeb/2.1")
            .build()
            .unwrap();

        assert_eq!(config.app_url(), Some(&app_url));
        assert_eq!(config.fallback_redirect(), "/welcome");
        assert!(!config.coalesce_refresh());
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent_prefix(), Some("BookingWeb/2.1"));
    }
}
