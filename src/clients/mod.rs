//! HTTP client types for booking API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: The authenticated async HTTP client
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`DataType`]: Content types for request bodies
//!
//! # Authorization Recovery
//!
//! - **2xx**: Returned unchanged
//! - **401 (not a login endpoint, not yet retried)**: Refresh the credential
//!   once and re-issue the request once
//! - **401 after refresh failure**: Session cleared, hard reset to the
//!   role's login page, [`HttpError::Auth`] returned
//! - **Other errors**: Returned as [`HttpError::Response`] without retry,
//!   carrying the complete [`HttpResponse`]

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RAW_BODY_FIELD, UNAUTHORIZED};
