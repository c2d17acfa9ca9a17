//! Authentication error types.
//!
//! # Error Types
//!
//! - [`AuthError::RefreshFailed`]: The refresh endpoint rejected the call or was unreachable
//! - [`AuthError::NoActiveRole`]: A refresh was needed but no role is stored
//! - [`AuthError::SessionCleared`]: The session was logged out or replaced while this request was refreshing
//! - [`AuthError::LoginFailed`]: The login endpoint rejected the credentials
//!
//! # Example
//!
//! ```rust
//! use booking_api::AuthError;
//!
//! let error = AuthError::RefreshFailed {
//!     status: 401,
//!     message: "refresh token expired".to_string(),
//! };
//! assert!(error.to_string().contains("401"));
//! ```

use thiserror::Error;

/// Errors raised by credential refresh and login.
///
/// `status` is `0` when the failure happened below HTTP (connection refused,
/// TLS, timeout).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Credential refresh failed.
    #[error("Credential refresh failed with status {status}: {message}")]
    RefreshFailed {
        /// The HTTP status code returned, or `0` for network failures.
        status: u16,
        /// The error message from the response.
        message: String,
    },

    /// No role is stored, so there is no refresh endpoint to call.
    #[error("No active role in session; cannot refresh credential")]
    NoActiveRole,

    /// The session was cleared or replaced by another login before this
    /// request's refreshed credential could be used.
    #[error("Session was cleared or replaced during credential refresh")]
    SessionCleared,

    /// Login failed.
    #[error("Login failed with status {status}: {message}")]
    LoginFailed {
        /// The HTTP status code returned, or `0` for network failures.
        status: u16,
        /// The error message from the response.
        message: String,
    },
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_failed_includes_status_and_message() {
        let error = AuthError::RefreshFailed {
            status: 0,
            message: "Network error: connection refused".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("status 0"));
        assert!(message.contains("connection refused"));
    }

    #[test]
    fn test_login_failed_includes_status() {
        let error = AuthError::LoginFailed {
            status: 401,
            message: "bad password".to_string(),
        };
        assert_eq!(error.to_string(), "Login failed with status 401: bad password");
    }

    #[test]
    fn test_auth_error_implements_std_error() {
        let error: &dyn std::error::Error = &AuthError::NoActiveRole;
        let _ = error;
    }
}
