//! # Booking API Client
//!
//! An authenticated REST client for the multi-role (customer / manager /
//! admin) service booking platform.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - An explicit, shareable [`SessionStore`] owning the logged-in [`Session`]
//! - An async [`HttpClient`] that attaches the bearer credential to every call
//!   and recovers from an expired credential with one refresh-and-retry
//! - Role-specific [`login`] and forced-logout teardown with a hard reset
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use booking_api::{login, BaseUrl, ClientConfig, HttpClient, LoginCredentials, Role, SessionStore};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com")?)
//!     .build()?;
//! let session = Arc::new(SessionStore::new());
//! let client = HttpClient::new(&config, Arc::clone(&session))?;
//!
//! login(&client, Role::Customer, &LoginCredentials::new("kim@example.com", "pw")).await?;
//!
//! // Expired credentials are refreshed transparently.
//! let reservations = client.get("/customer/reservations").await?;
//! ```
//!
//! ## Hooking Into the Host Application
//!
//! When a refresh fails the client clears the session and asks a
//! [`Navigator`] for a hard reset to the role's login page:
//!
//! ```rust,ignore
//! use booking_api::Navigator;
//!
//! struct Reload;
//!
//! impl Navigator for Reload {
//!     fn hard_reset(&self, location: &str) {
//!         // e.g. window.location.assign(location) through your UI bridge
//!     }
//! }
//!
//! let client = HttpClient::new(&config, session)?.with_navigator(Reload);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: The session store is passed explicitly
//! - **Fail-fast validation**: Configuration newtypes validate on construction
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

pub use auth::{
    login, login_location, AccessToken, AuthError, CredentialRefresher, HttpCredentialRefresher,
    HttpLogoutCleanup, LoginCredentials, LogoutCleanup, LogoutError, Navigator, RefreshToken,
    RefreshedCredential, Role, Session, SessionStore, TracingNavigator,
};
pub use config::{BaseUrl, ClientConfig, ClientConfigBuilder};
pub use error::ConfigError;

pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};
