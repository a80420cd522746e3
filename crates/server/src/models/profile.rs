//! User profile domain type.

use serde::{Deserialize, Serialize};

use makeready_core::{DisplayName, Role};

/// A caller's profile: display name plus role.
///
/// Exactly one profile exists per principal. The profile is created
/// self-service on first login; the role field changes only through admin
/// assignment or bootstrap seeding, never through the owner's own saves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name, non-empty after trimming.
    pub name: DisplayName,
    /// Role gating operation visibility.
    pub role: Role,
}

impl UserProfile {
    /// Create a profile.
    #[must_use]
    pub const fn new(name: DisplayName, role: Role) -> Self {
        Self { name, role }
    }
}
