//! Platform roles and the endpoints namespaced under them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The role a session is logged in as.
///
/// Every role owns its own login, refresh, and logout endpoints, namespaced
/// by [`Role::namespace`].
///
/// # Example
///
/// ```rust
/// use booking_api::Role;
///
/// let role: Role = "MANAGER".parse().unwrap();
/// assert_eq!(role, Role::Manager);
/// assert_eq!(role.login_path(), "/manager/login");
/// assert_eq!(role.refresh_path(), "/manager/reissue");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// A customer booking services.
    Customer,
    /// A manager fulfilling reservations.
    Manager,
    /// A platform administrator.
    Admin,
}

impl Role {
    /// All roles, in a stable order.
    pub const ALL: [Self; 3] = [Self::Customer, Self::Manager, Self::Admin];

    /// Returns the path segment the role's endpoints live under.
    #[must_use]
    pub const fn namespace(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }

    /// Returns the role's login endpoint, which is also its login page.
    #[must_use]
    pub const fn login_path(self) -> &'static str {
        match self {
            Self::Customer => "/customer/login",
            Self::Manager => "/manager/login",
            Self::Admin => "/admin/login",
        }
    }

    /// Returns the role's credential refresh endpoint.
    #[must_use]
    pub const fn refresh_path(self) -> &'static str {
        match self {
            Self::Customer => "/customer/reissue",
            Self::Manager => "/manager/reissue",
            Self::Admin => "/admin/reissue",
        }
    }

    /// Returns the role's logout endpoint.
    #[must_use]
    pub const fn logout_path(self) -> &'static str {
        match self {
            Self::Customer => "/customer/logout",
            Self::Manager => "/manager/logout",
            Self::Admin => "/admin/logout",
        }
    }

    /// Returns `true` if `path` targets any role's login endpoint.
    ///
    /// Query strings and a missing leading slash are ignored.
    #[must_use]
    pub fn is_login_path(path: &str) -> bool {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_start_matches('/').trim_end_matches('/');
        Self::ALL
            .iter()
            .any(|role| role.login_path().trim_start_matches('/') == path)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Customer => write!(f, "CUSTOMER"),
            Self::Manager => write!(f, "MANAGER"),
            Self::Admin => write!(f, "ADMIN"),
        }
    }
}

/// Error returned when parsing an unknown role name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role '{0}'. Expected one of CUSTOMER, MANAGER, ADMIN.")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CUSTOMER" => Ok(Self::Customer),
            "MANAGER" => Ok(Self::Manager),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}
