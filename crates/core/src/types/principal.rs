//! Caller identity types.
//!
//! A [`Principal`] is the opaque identifier the upstream authentication
//! layer assigns to a caller. This core never mints principals; it only
//! compares and stores them. [`Caller`] is the result of identity
//! resolution: either an authenticated principal or anonymous.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An opaque, globally unique caller identifier.
///
/// Assigned by the authentication layer, never by this core. Principals are
/// compared byte-for-byte; no structure beyond uniqueness is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Wrap an identity token received from the authentication layer.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the identity token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Principal {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Principal {
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

impl AsRef<str> for Principal {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The resolved identity of a caller.
///
/// Identity resolution never fails: a request without credentials resolves
/// to [`Caller::Anonymous`], which gates public operations and denies
/// private ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    /// No identity was presented.
    Anonymous,
    /// An authenticated principal.
    Authenticated(Principal),
}

impl Caller {
    /// Returns the principal if the caller is authenticated.
    #[must_use]
    pub const fn principal(&self) -> Option<&Principal> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(principal) => Some(principal),
        }
    }

    /// Returns `true` for anonymous callers.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}

impl From<Principal> for Caller {
    fn from(principal: Principal) -> Self {
        Self::Authenticated(principal)
    }
}
