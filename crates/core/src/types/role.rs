//! Caller roles.

use serde::{Deserialize, Serialize};

/// Role attached to a user profile, gating operation visibility.
///
/// `Guest` is the role of any principal without a saved profile; it is a
/// normal value, not an error, so callers can distinguish "needs
/// onboarding" from "is a normal user".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access: status transitions, contact-form reads, role assignment.
    Admin,
    /// A registered agent.
    User,
    /// No profile saved yet.
    #[default]
    Guest,
}

impl Role {
    /// Returns `true` for the admin role.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::User => write!(f, "user"),
            Self::Guest => write!(f, "guest"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "guest" => Ok(Self::Guest),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_roundtrip() {
        for role in [Role::Admin, Role::User, Role::Guest] {
            let s = role.to_string();
            assert_eq!(s.parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_rejects_unknown() {
        assert!("superuser".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_serde_strings() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let parsed: Role = serde_json::from_str("\"guest\"").unwrap();
        assert_eq!(parsed, Role::Guest);
    }

    #[test]
    fn test_default_is_guest() {
        assert_eq!(Role::default(), Role::Guest);
    }
}
