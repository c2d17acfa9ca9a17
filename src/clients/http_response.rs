//! HTTP response type for the booking API client.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// Status code the client treats as an expired credential.
pub const UNAUTHORIZED: u16 = 401;

/// Body field holding the response text when it is not valid JSON.
pub const RAW_BODY_FIELD: &str = "raw_body";

/// An HTTP response from the booking API.
///
/// # Example
///
/// ```rust
/// use booking_api::HttpResponse;
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-request-id".to_string(), vec!["req-1".to_string()]);
///
/// let response = HttpResponse::new(200, headers, json!({"id": 7}));
/// assert!(response.is_ok());
/// assert_eq!(response.request_id(), Some("req-1"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lower-cased name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` for an authorization failure (HTTP 401).
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        self.code == UNAUTHORIZED
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the undecoded response text when the body was not JSON.
    #[must_use]
    pub fn raw_body(&self) -> Option<&str> {
        self.body.get(RAW_BODY_FIELD).and_then(serde_json::Value::as_str)
    }

    /// Deserializes the body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_is_ok_covers_2xx_only() {
        assert!(HttpResponse::new(200, HashMap::new(), json!({})).is_ok());
        assert!(HttpResponse::new(204, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(301, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(401, HashMap::new(), json!({})).is_ok());
    }

    #[test]
    fn test_is_unauthorized() {
        assert!(HttpResponse::new(401, HashMap::new(), json!({})).is_unauthorized());
        assert!(!HttpResponse::new(403, HashMap::new(), json!({})).is_unauthorized());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), vec!["application/json".to_string()]);
        let response = HttpResponse::new(200, headers, json!({}));

        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn test_raw_body_only_for_undecoded_text() {
        let response = HttpResponse::new(400, HashMap::new(), json!({"raw_body": "Bad date"}));
        assert_eq!(response.raw_body(), Some("Bad date"));

        let response = HttpResponse::new(400, HashMap::new(), json!({"message": "Bad date"}));
        assert_eq!(response.raw_body(), None);
    }

    #[test]
    fn test_json_deserializes_body() {
        #[derive(Deserialize)]
        struct Reservation {
            id: u64,
            status: String,
        }

        let response = HttpResponse::new(
            200,
            HashMap::new(),
            json!({"id": 12, "status": "CONFIRMED"}),
        );
        let reservation: Reservation = response.json().unwrap();

        assert_eq!(reservation.id, 12);
        assert_eq!(reservation.status, "CONFIRMED");
    }
}
