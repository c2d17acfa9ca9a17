//! Credential newtypes.
//!
//! Both types mask their value in `Debug` output so sessions can be logged
//! without leaking bearer tokens.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A short-lived bearer token authorizing API calls.
///
/// # Example
///
/// ```rust
/// use booking_api::AccessToken;
///
/// let token = AccessToken::new("eyJhbGciOi");
/// assert_eq!(token.bearer(), "Bearer eyJhbGciOi");
/// assert_eq!(format!("{token:?}"), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A longer-lived token used solely to obtain a new [`AccessToken`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefreshToken(String);

impl RefreshToken {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl AsRef<str> for RefreshToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RefreshToken(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_masks_token_values() {
        let access = AccessToken::new("secret-access");
        let refresh = RefreshToken::new("secret-refresh");

        assert!(!format!("{access:?}").contains("secret-access"));
        assert!(!format!("{refresh:?}").contains("secret-refresh"));
    }

    #[test]
    fn test_tokens_serialize_as_plain_strings() {
        let access = AccessToken::new("abc");
        assert_eq!(serde_json::to_string(&access).unwrap(), r#""abc""#);

        let refresh: RefreshToken = serde_json::from_str(r#""def""#).unwrap();
        assert_eq!(refresh.as_ref(), "def");
    }
}
