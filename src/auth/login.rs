//! Role-specific login.
//!
//! Login goes through the same [`HttpClient`] as every other call, but its
//! endpoints are exempt from refresh-and-retry: a 401 here means bad
//! credentials, not an expired session.

use serde::Serialize;

use crate::auth::refresh::{RefreshedCredential, TokenResponse};
use crate::auth::{AuthError, Role, Session};
use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest};

/// Credentials posted to a login endpoint.
#[derive(Clone, Serialize)]
pub struct LoginCredentials {
    /// The account e-mail.
    pub email: String,
    /// The account password.
    pub password: String,
}

impl LoginCredentials {
    /// Creates login credentials.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"*****")
            .finish()
    }
}

/// Logs in as `role` and begins a new session in the client's store.
///
/// Any previous session is replaced wholesale.
///
/// # Errors
///
/// - [`AuthError::LoginFailed`] (wrapped in [`HttpError::Auth`]) for a non-2xx
///   response or a body without an access token
/// - [`HttpError::Network`] if the login endpoint is unreachable
///
/// # Example
///
/// ```rust,ignore
/// use booking_api::{login, LoginCredentials, Role};
///
/// let session = login(&client, Role::Customer, &LoginCredentials::new("a@b.c", "pw")).await?;
/// assert_eq!(session.role, Some(Role::Customer));
/// ```
pub async fn login(
    client: &HttpClient,
    role: Role,
    credentials: &LoginCredentials,
) -> Result<Session, HttpError> {
    let body = serde_json::to_value(credentials).map_err(|e| AuthError::LoginFailed {
        status: 0,
        message: format!("Failed to encode credentials: {e}"),
    })?;
    let request = HttpRequest::builder(HttpMethod::Post, role.login_path())
        .body(body)
        .body_type(DataType::Json)
        .build()?;

    let response = match client.request(request).await {
        Ok(response) => response,
        Err(HttpError::Response(e)) => {
            return Err(AuthError::LoginFailed {
                status: e.code,
                message: e.message,
            }
            .into())
        }
        Err(other) => return Err(other),
    };

    let token_response: TokenResponse =
        response.json().map_err(|e| AuthError::LoginFailed {
            status: response.code,
            message: format!("Failed to parse login response: {e}"),
        })?;
    let credential = RefreshedCredential::from(token_response);

    let mut session = Session::new(credential.access_token, role);
    session.refresh_token = credential.refresh_token;

    client.session().begin(session.clone());
    tracing::debug!("Logged in as {}", role);

    Ok(session)
}
