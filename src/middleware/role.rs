//! Role-based authorization for routes.
//!
//! Each protected route group declares an [`AuthorizationPolicy`] when it is
//! mounted; [`authorize`] is the pure membership test the auth gate runs once
//! the request's [`Identity`] has been resolved.

use std::fmt;
use std::str::FromStr;

use marquee_auth::AuthFailure;
use marquee_models::{Identity, Role, UnknownRole};

/// Roles a route permits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthorizationPolicy {
    /// Any resolved identity may proceed.
    #[default]
    AnyAuthenticated,
    /// Only identities whose role is listed may proceed.
    Roles(Vec<Role>),
}

impl AuthorizationPolicy {
    pub fn any() -> Self {
        AuthorizationPolicy::AnyAuthenticated
    }

    pub fn admin() -> Self {
        AuthorizationPolicy::Roles(vec![Role::Admin])
    }

    /// An empty role list means "any authenticated identity".
    pub fn roles<I>(roles: I) -> Self
    where
        I: IntoIterator<Item = Role>,
    {
        let mut roles: Vec<Role> = roles.into_iter().collect();
        roles.dedup();
        if roles.is_empty() {
            AuthorizationPolicy::AnyAuthenticated
        } else {
            AuthorizationPolicy::Roles(roles)
        }
    }

    pub fn permits(&self, role: Role) -> bool {
        match self {
            AuthorizationPolicy::AnyAuthenticated => true,
            AuthorizationPolicy::Roles(roles) => roles.contains(&role),
        }
    }
}

/// Parses a comma-separated role list. `any` (or `*`) anywhere in the list,
/// or an empty list, yields [`AuthorizationPolicy::AnyAuthenticated`].
impl FromStr for AuthorizationPolicy {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut roles = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            if part == "any" || part == "*" {
                return Ok(AuthorizationPolicy::AnyAuthenticated);
            }
            roles.push(part.parse::<Role>()?);
        }
        Ok(AuthorizationPolicy::roles(roles))
    }
}

impl fmt::Display for AuthorizationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorizationPolicy::AnyAuthenticated => f.write_str("any"),
            AuthorizationPolicy::Roles(roles) => {
                let names: Vec<&str> = roles.iter().map(|r| r.as_str()).collect();
                f.write_str(&names.join(","))
            }
        }
    }
}

/// Allows the request when the identity's role is permitted by `policy`.
pub fn authorize(identity: &Identity, policy: &AuthorizationPolicy) -> Result<(), AuthFailure> {
    if policy.permits(identity.role()) {
        Ok(())
    } else {
        Err(AuthFailure::InsufficientRole)
    }
}
