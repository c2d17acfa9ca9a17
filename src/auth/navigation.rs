//! Hard-reset navigation after a forced logout.
//!
//! When a session is torn down the in-memory application state may no longer
//! be consistent, so the client asks the host application for a full reload
//! at the login location instead of an in-app route change.

use crate::auth::Role;
use crate::config::ClientConfig;

/// Performs a full reset of the host application at a new location.
pub trait Navigator: Send + Sync {
    /// Discards all in-memory client state and loads `location`.
    fn hard_reset(&self, location: &str);
}

/// A [`Navigator`] that only logs the reset.
///
/// Suitable for headless hosts (CLIs, services) that have no page to reload.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn hard_reset(&self, location: &str) {
        tracing::warn!("Session ended, hard reset to {}", location);
    }
}

/// Resolves where a hard reset should land for the role that was active.
///
/// Each role goes to its own login page; an unknown role goes to the
/// configured fallback. The configured app URL, if any, is prefixed.
///
/// # Example
///
/// ```rust
/// use booking_api::{login_location, BaseUrl, ClientConfig, Role};
///
/// let config = ClientConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .app_url(BaseUrl::new("https://book.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     login_location(&config, Some(Role::Admin)),
///     "https://book.example.com/admin/login"
/// );
/// assert_eq!(login_location(&config, None), "https://book.example.com/");
/// ```
#[must_use]
pub fn login_location(config: &ClientConfig, role: Option<Role>) -> String {
    let path = match role {
        Some(role) => role.login_path(),
        None => config.fallback_redirect(),
    };
    match config.app_url() {
        Some(app_url) => app_url.join(path),
        None => path.to_string(),
    }
}
