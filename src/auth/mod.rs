//! Authentication types for the booking API client.
//!
//! # Overview
//!
//! - [`Role`]: The three platform roles and their endpoints
//! - [`AccessToken`] / [`RefreshToken`]: Credential newtypes with masked `Debug`
//! - [`Session`] / [`SessionStore`]: The session snapshot and its single owner
//! - [`CredentialRefresher`]: The refresh operation called after a 401
//! - [`LogoutCleanup`]: Best-effort cleanup during teardown
//! - [`Navigator`]: The hard reset performed after a forced logout
//! - [`login`]: Role-specific login that begins a session
//!
//! # Example
//!
//! ```rust
//! use booking_api::{AccessToken, Role, Session, SessionStore};
//!
//! let store = SessionStore::from_session(Session::new(AccessToken::new("t"), Role::Manager));
//! assert_eq!(store.role(), Some(Role::Manager));
//! ```

mod error;
mod login;
mod logout;
mod navigation;
pub mod refresh;
mod role;
pub mod session;
mod token;

pub use error::AuthError;
pub use login::{login, LoginCredentials};
pub use logout::{HttpLogoutCleanup, LogoutCleanup, LogoutError};
pub use navigation::{login_location, Navigator, TracingNavigator};
pub use refresh::{CredentialRefresher, HttpCredentialRefresher, RefreshedCredential};
pub use role::{ParseRoleError, Role};
pub use session::{Session, SessionStore};
pub use token::{AccessToken, RefreshToken};
