//! Best-effort logout cleanup run during session teardown.

use async_trait::async_trait;
use thiserror::Error;

use crate::auth::Role;
use crate::config::BaseUrl;

/// Errors reported by a [`LogoutCleanup`]. The client logs them and moves on.
#[derive(Debug, Error)]
pub enum LogoutError {
    /// The logout endpoint could not be reached.
    #[error("Logout request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The logout endpoint answered with a non-2xx status.
    #[error("Logout returned status {status}")]
    Status {
        /// The HTTP status code returned.
        status: u16,
    },
}

/// Notifies the backend that a session is ending.
///
/// Called after the session store has been cleared. Failures are logged and
/// never block the teardown, so implementations should not retry.
#[async_trait]
pub trait LogoutCleanup: Send + Sync {
    /// Performs the cleanup for the role that was active before clearing.
    ///
    /// # Errors
    ///
    /// Returns [`LogoutError`]; the caller only logs it.
    async fn logout(&self, role: Option<Role>) -> Result<(), LogoutError>;
}

/// Posts to `{base_url}/{role}/logout` so the backend can drop its refresh cookie.
///
/// Does nothing when no role was active.
#[derive(Clone, Debug)]
pub struct HttpLogoutCleanup {
    client: reqwest::Client,
    base_url: BaseUrl,
}

impl HttpLogoutCleanup {
    /// Creates a cleanup sharing the given transport.
    #[must_use]
    pub const fn new(client: reqwest::Client, base_url: BaseUrl) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl LogoutCleanup for HttpLogoutCleanup {
    async fn logout(&self, role: Option<Role>) -> Result<(), LogoutError> {
        let Some(role) = role else {
            return Ok(());
        };

        let response = self
            .client
            .post(self.base_url.join(role.logout_path()))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(LogoutError::Status {
                status: response.status().as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_logout_posts_to_role_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/logout"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let cleanup = HttpLogoutCleanup::new(
            reqwest::Client::new(),
            BaseUrl::new(server.uri()).unwrap(),
        );

        assert!(cleanup.logout(Some(Role::Admin)).await.is_ok());
    }

    #[tokio::test]
    async fn test_logout_without_role_is_noop() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let cleanup = HttpLogoutCleanup::new(
            reqwest::Client::new(),
            BaseUrl::new(server.uri()).unwrap(),
        );

        assert!(cleanup.logout(None).await.is_ok());
    }

    #[tokio::test]
    async fn test_logout_reports_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/customer/logout"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let cleanup = HttpLogoutCleanup::new(
            reqwest::Client::new(),
            BaseUrl::new(server.uri()).unwrap(),
        );

        let result = cleanup.logout(Some(Role::Customer)).await;
        assert!(matches!(result, Err(LogoutError::Status { status: 500 })));
    }

    #[tokio::test]
    async fn test_logout_reports_network_failure() {
        let cleanup = HttpLogoutCleanup::new(
            reqwest::Client::new(),
            BaseUrl::new("http://127.0.0.1:9").unwrap(),
        );

        let result = cleanup.logout(Some(Role::Manager)).await;
        assert!(matches!(result, Err(LogoutError::Network(_))));
    }
}
