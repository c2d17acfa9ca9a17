//! The credential refresh operation.
//!
//! [`CredentialRefresher`] is the seam the [`HttpClient`](crate::HttpClient)
//! calls after a retry-eligible 401. Implementations are stateless with
//! respect to the client: they make one attempt, never retry, and never
//! interpret a 401 from the refresh endpoint as anything but failure.
//!
//! [`HttpCredentialRefresher`] is the default implementation, posting to the
//! role's refresh endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::auth::{AccessToken, AuthError, RefreshToken, Role};
use crate::config::BaseUrl;

/// A freshly issued credential pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshedCredential {
    /// The new access credential.
    pub access_token: AccessToken,
    /// A rotated refresh credential, when the backend issues one.
    pub refresh_token: Option<RefreshToken>,
}

/// Obtains a new access credential for a role.
#[async_trait]
pub trait CredentialRefresher: Send + Sync {
    /// Calls the role's refresh endpoint once.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::RefreshFailed`] for any non-success status,
    /// network failure, or malformed response.
    async fn refresh(
        &self,
        role: Role,
        refresh_token: Option<&RefreshToken>,
    ) -> Result<RefreshedCredential, AuthError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<&'a str>,
}

/// Token payload returned by the login and refresh endpoints.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// The new access credential.
    #[serde(alias = "access_token")]
    pub access_token: String,
    /// A rotated refresh credential, if any.
    #[serde(default, alias = "refresh_token")]
    pub refresh_token: Option<String>,
}

impl From<TokenResponse> for RefreshedCredential {
    fn from(response: TokenResponse) -> Self {
        Self {
            access_token: AccessToken::new(response.access_token),
            refresh_token: response.refresh_token.map(RefreshToken::new),
        }
    }
}

/// Refreshes credentials against `POST {base_url}/{role}/reissue`.
///
/// The stored refresh credential is sent as `{"refreshToken": ...}`. When
/// none is stored the body is `{}` and the backend is expected to read the
/// refresh cookie, which the shared `reqwest` cookie store carries.
///
/// # Example
///
/// ```rust
/// use booking_api::{BaseUrl, HttpCredentialRefresher};
///
/// let refresher = HttpCredentialRefresher::new(
///     reqwest::Client::new(),
///     BaseUrl::new("https://api.example.com").unwrap(),
/// );
/// ```
#[derive(Clone, Debug)]
pub struct HttpCredentialRefresher {
    client: reqwest::Client,
    base_url: BaseUrl,
}

impl HttpCredentialRefresher {
    /// Creates a refresher sharing the given transport.
    #[must_use]
    pub const fn new(client: reqwest::Client, base_url: BaseUrl) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl CredentialRefresher for HttpCredentialRefresher {
    async fn refresh(
        &self,
        role: Role,
        refresh_token: Option<&RefreshToken>,
    ) -> Result<RefreshedCredential, AuthError> {
        let url = self.base_url.join(role.refresh_path());
        let body = RefreshRequest {
            refresh_token: refresh_token.map(AsRef::as_ref),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AuthError::RefreshFailed {
                status: 0,
                message: format!("Network error: {e}"),
            })?;

        let status = response.status().as_u16();

        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(AuthError::RefreshFailed {
                status,
                message: error_body,
            });
        }

        let token_response: TokenResponse =
            response
                .json()
                .await
                .map_err(|e| AuthError::RefreshFailed {
                    status,
                    message: format!("Failed to parse token response: {e}"),
                })?;

        Ok(token_response.into())
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpCredentialRefresher>();
    assert_send_sync::<RefreshRequest<'_>>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn refresher_for(server: &MockServer) -> HttpCredentialRefresher {
        HttpCredentialRefresher::new(
            reqwest::Client::new(),
            BaseUrl::new(server.uri()).unwrap(),
        )
    }

    #[test]
    fn test_refresh_request_serializes_token() {
        let json = serde_json::to_string(&RefreshRequest {
            refresh_token: Some("r1"),
        })
        .unwrap();
        assert_eq!(json, r#"{"refreshToken":"r1"}"#);

        let json = serde_json::to_string(&RefreshRequest {
            refresh_token: None,
        })
        .unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_token_response_accepts_snake_case() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"access_token":"a","refresh_token":"r"}"#).unwrap();
        assert_eq!(response.access_token, "a");
        assert_eq!(response.refresh_token.as_deref(), Some("r"));
    }

    #[tokio::test]
    async fn test_refresh_posts_to_role_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/manager/reissue"))
            .and(body_json(serde_json::json!({"refreshToken": "r1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "accessToken": "fresh",
                "refreshToken": "r2"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let refreshed = refresher_for(&server)
            .refresh(Role::Manager, Some(&RefreshToken::new("r1")))
            .await
            .unwrap();

        assert_eq!(refreshed.access_token, AccessToken::new("fresh"));
        assert_eq!(refreshed.refresh_token, Some(RefreshToken::new("r2")));
    }

    #[tokio::test]
    async fn test_refresh_maps_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/customer/reissue"))
            .respond_with(ResponseTemplate::new(401).set_body_string("expired"))
            .mount(&server)
            .await;

        let result = refresher_for(&server).refresh(Role::Customer, None).await;

        assert_eq!(
            result,
            Err(AuthError::RefreshFailed {
                status: 401,
                message: "expired".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_refresh_rejects_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/reissue"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = refresher_for(&server).refresh(Role::Admin, None).await;

        assert!(matches!(
            result,
            Err(AuthError::RefreshFailed { status: 200, .. })
        ));
    }

    #[tokio::test]
    async fn test_refresh_network_failure_has_status_zero() {
        let refresher = HttpCredentialRefresher::new(
            reqwest::Client::new(),
            BaseUrl::new("http://127.0.0.1:9").unwrap(),
        );

        let result = refresher.refresh(Role::Customer, None).await;

        assert!(matches!(
            result,
            Err(AuthError::RefreshFailed { status: 0, .. })
        ));
    }
}
