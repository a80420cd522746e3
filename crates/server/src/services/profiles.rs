//! Profile and role service.

use makeready_core::{Caller, DisplayName, Principal, Role};

use super::ServiceError;
use crate::auth::{Operation, RoleAuthority};
use crate::models::UserProfile;
use crate::state::AppState;
use crate::store::ProfileStore;

/// Service for profile reads/writes and role assignment.
pub struct ProfileService<'a> {
    authority: &'a RoleAuthority,
    profiles: &'a ProfileStore,
}

impl<'a> ProfileService<'a> {
    /// Create a profile service borrowing from the application state.
    #[must_use]
    pub fn new(state: &'a AppState) -> Self {
        Self {
            authority: state.authority(),
            profiles: state.profiles(),
        }
    }

    /// Get the caller's own profile.
    ///
    /// Never fails: anonymous callers and principals without a profile
    /// read `None` ("needs onboarding").
    #[must_use]
    pub fn get_own_profile(&self, caller: &Caller) -> Option<UserProfile> {
        caller
            .principal()
            .and_then(|principal| self.profiles.get(principal))
    }

    /// Get the caller's effective role.
    ///
    /// Never fails: `Guest` until a profile is saved.
    #[must_use]
    pub fn get_own_role(&self, caller: &Caller) -> Role {
        self.authority.role_of(caller)
    }

    /// Whether the caller holds the admin role. Never fails.
    #[must_use]
    pub fn is_admin(&self, caller: &Caller) -> bool {
        self.authority.is_admin(caller)
    }

    /// Save the caller's own profile.
    ///
    /// First save creates the record; a later save updates the name in
    /// place. The payload carries a role field for contract compatibility,
    /// but it never grants privilege: the stored role starts at `user` and
    /// changes only through [`assign_role`](Self::assign_role) or bootstrap
    /// seeding.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Unauthenticated` for anonymous callers and
    /// `ServiceError::InvalidInput` when the name is empty after trimming.
    pub fn save_own_profile(
        &self,
        caller: &Caller,
        name: &str,
        _requested_role: Role,
    ) -> Result<UserProfile, ServiceError> {
        self.authority.authorize(caller, Operation::SaveOwnProfile)?;
        let principal = caller.principal().ok_or(ServiceError::Unauthenticated)?;

        let name = DisplayName::parse(name)
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;

        Ok(self.profiles.save_name(principal, name))
    }

    /// Get another principal's profile.
    ///
    /// Readable by the principal itself or an admin; `None` when no
    /// profile exists.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Unauthenticated` for anonymous callers and
    /// `ServiceError::Forbidden` for non-admin reads of other principals.
    pub fn get_user_profile(
        &self,
        caller: &Caller,
        target: &Principal,
    ) -> Result<Option<UserProfile>, ServiceError> {
        self.authority
            .authorize(caller, Operation::ReadUserProfile { target })?;
        Ok(self.profiles.get(target))
    }

    /// Assign a role to a principal (admin-only).
    ///
    /// There is no self-demotion guard: an admin may change any principal's
    /// role, including their own.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Forbidden` unless the caller is an admin and
    /// `ServiceError::NotFound` if the target has no profile yet.
    pub fn assign_role(
        &self,
        caller: &Caller,
        target: &Principal,
        role: Role,
    ) -> Result<(), ServiceError> {
        self.authority.authorize(caller, Operation::AssignRole)?;
        self.profiles
            .set_role(target, role)
            .map_err(|_| ServiceError::NotFound(format!("profile for {target}")))
    }
}
