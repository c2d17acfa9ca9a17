//! HTTP-specific error types for the booking API client.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use booking_api::{AuthError, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Auth(e)) => println!("Signed out: {}", e),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::auth::AuthError;
use crate::clients::http_response::HttpResponse;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The full response is kept in `response` so callers can read any body
/// field or header. `message` is a display summary: JSON with any of the
/// `errors`, `error`, `message`, `code` and `raw_body` fields, plus an
/// `error_reference` built from the `X-Request-Id` header.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use booking_api::{HttpResponse, HttpResponseError};
/// use serde_json::json;
///
/// let body = json!({"fieldErrors": [{"field": "date", "reason": "past"}]});
/// let error = HttpResponseError {
///     code: 422,
///     message: "{}".to_string(),
///     error_reference: None,
///     response: HttpResponse::new(422, HashMap::new(), body),
/// };
///
/// assert_eq!(error.response.body["fieldErrors"][0]["field"], "date");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
    /// The response exactly as received.
    pub response: HttpResponse,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST, PUT or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Credential recovery failed and the session was torn down.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl HttpError {
    /// Returns the HTTP status code if the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
