//! Session state and its single owning store.
//!
//! A [`Session`] is a plain snapshot of who is logged in. The
//! [`SessionStore`] owns the live session for the process and is handed to
//! the [`HttpClient`](crate::HttpClient) explicitly at construction; the
//! client reads it on every outbound call. After a refresh it writes through
//! [`SessionStore::replace_credential`] and [`SessionStore::clear_if_current`],
//! which refuse to touch a session that was logged out or replaced while the
//! refresh was in flight.

use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::auth::{AccessToken, RefreshToken, RefreshedCredential, Role};

/// A snapshot of the authenticated session.
///
/// Every field is optional: the default value is the cleared, logged-out
/// state.
///
/// # Example
///
/// ```rust
/// use booking_api::{AccessToken, Role, Session};
///
/// let session = Session::new(AccessToken::new("token"), Role::Customer);
/// assert!(session.is_authenticated());
///
/// let json = serde_json::to_string(&session).unwrap();
/// let restored: Session = serde_json::from_str(&json).unwrap();
/// assert_eq!(session, restored);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The bearer credential attached to API calls.
    pub access_token: Option<AccessToken>,

    /// The role the session was logged in as.
    pub role: Option<Role>,

    /// The credential consumed by the refresh endpoint, if the backend issued one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<RefreshToken>,
}

impl Session {
    /// Creates a logged-in session without a refresh credential.
    #[must_use]
    pub const fn new(access_token: AccessToken, role: Role) -> Self {
        Self {
            access_token: Some(access_token),
            role: Some(role),
            refresh_token: None,
        }
    }

    /// Sets the refresh credential.
    #[must_use]
    pub fn with_refresh_token(mut self, refresh_token: RefreshToken) -> Self {
        self.refresh_token = Some(refresh_token);
        self
    }

    /// Returns `true` if an access credential is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Returns `true` if both sessions hold the same access credential and role.
    ///
    /// The refresh credential is ignored, since rotating it does not start a
    /// new login.
    #[must_use]
    pub fn same_login(&self, other: &Self) -> bool {
        self.access_token == other.access_token && self.role == other.role
    }
}

/// The process-wide owner of the live [`Session`].
///
/// Share it with `Arc<SessionStore>`; every method takes `&self`. A poisoned
/// lock is recovered rather than propagated, since the guarded value is a
/// plain snapshot that cannot be left half-written.
///
/// # Example
///
/// ```rust
/// use booking_api::{AccessToken, Role, SessionStore};
///
/// let store = SessionStore::new();
/// assert!(store.credential().is_none());
///
/// store.set_credential(AccessToken::new("t1"), Some(Role::Admin));
/// assert_eq!(store.credential(), Some(AccessToken::new("t1")));
/// assert_eq!(store.role(), Some(Role::Admin));
///
/// store.clear();
/// assert!(!store.is_authenticated());
/// ```
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<Session>,
}

impl SessionStore {
    /// Creates an empty (logged-out) store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a previously persisted session.
    #[must_use]
    pub const fn from_session(session: Session) -> Self {
        Self {
            inner: RwLock::new(session),
        }
    }

    /// Returns the current access credential.
    #[must_use]
    pub fn credential(&self) -> Option<AccessToken> {
        self.read(|s| s.access_token.clone())
    }

    /// Returns the current role.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.read(|s| s.role)
    }

    /// Returns the current refresh credential.
    #[must_use]
    pub fn refresh_credential(&self) -> Option<RefreshToken> {
        self.read(|s| s.refresh_token.clone())
    }

    /// Returns `true` if an access credential is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read(Session::is_authenticated)
    }

    /// Returns a copy of the whole session, e.g. for persistence.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.read(Session::clone)
    }

    /// Replaces the session wholesale, as after a successful login.
    pub fn begin(&self, session: Session) {
        self.write(|s| *s = session);
    }

    /// Stores a new access credential and role.
    ///
    /// The refresh credential is kept.
    pub fn set_credential(&self, token: AccessToken, role: Option<Role>) {
        self.write(|s| {
            s.access_token = Some(token);
            s.role = role;
        });
    }

    /// Stores a rotated refresh credential.
    pub fn set_refresh_credential(&self, token: RefreshToken) {
        self.write(|s| s.refresh_token = Some(token));
    }

    /// Clears every field, returning the store to the logged-out state.
    pub fn clear(&self) {
        self.write(|s| *s = Session::default());
    }

    /// Stores a refreshed credential only if the session is still the login
    /// `expected` was taken from.
    ///
    /// Returns `false`, leaving the store untouched, when the session was
    /// cleared or replaced in the meantime.
    pub fn replace_credential(&self, expected: &Session, refreshed: RefreshedCredential) -> bool {
        self.write(|s| {
            if !s.same_login(expected) {
                return false;
            }
            s.access_token = Some(refreshed.access_token);
            if let Some(rotated) = refreshed.refresh_token {
                s.refresh_token = Some(rotated);
            }
            true
        })
    }

    /// Clears the store only if it still holds the login `expected` was taken from.
    pub fn clear_if_current(&self, expected: &Session) -> bool {
        self.write(|s| {
            if !s.same_login(expected) {
                return false;
            }
            *s = Session::default();
            true
        })
    }

    fn read<T>(&self, f: impl FnOnce(&Session) -> T) -> T {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write<T>(&self, f: impl FnOnce(&mut Session) -> T) -> T {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
    assert_send_sync::<SessionStore>();
};
