//! Profile store: principal → user profile.
//!
//! This mapping is the source of truth for "who is this caller" and, via
//! the stored role, for every authorization decision. Profiles are created
//! self-service, never deleted. The owner's saves can only touch the name;
//! role changes flow through [`ProfileStore::set_role`] (admin assignment)
//! and [`ProfileStore::seed_admin`] (startup bootstrap).

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use makeready_core::{DisplayName, Principal, Role};

use super::StoreError;
use crate::models::UserProfile;

/// Keyed store of user profiles.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: RwLock<HashMap<Principal, UserProfile>>,
}

impl ProfileStore {
    /// Create an empty profile store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the profile saved for a principal.
    #[must_use]
    pub fn get(&self, principal: &Principal) -> Option<UserProfile> {
        self.profiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(principal)
            .cloned()
    }

    /// Effective role of a principal: the stored role, or `Guest` when no
    /// profile exists yet.
    #[must_use]
    pub fn role_of(&self, principal: &Principal) -> Role {
        self.profiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(principal)
            .map_or(Role::Guest, |profile| profile.role)
    }

    /// Save the caller's display name.
    ///
    /// First save creates the record with role `User`; a later save updates
    /// the name in place and preserves the stored role. Returns the stored
    /// profile.
    pub fn save_name(&self, principal: &Principal, name: DisplayName) -> UserProfile {
        let mut profiles = self
            .profiles
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let profile = profiles
            .entry(principal.clone())
            .and_modify(|existing| existing.name = name.clone())
            .or_insert_with(|| UserProfile::new(name, Role::User));
        profile.clone()
    }

    /// Assign a role to an existing profile.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the principal has no profile yet.
    pub fn set_role(&self, principal: &Principal, role: Role) -> Result<(), StoreError> {
        let mut profiles = self
            .profiles
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let profile = profiles.get_mut(principal).ok_or(StoreError::NotFound)?;
        profile.role = role;
        Ok(())
    }

    /// Seed a principal as an admin at startup (out-of-band bootstrap).
    ///
    /// Creates the profile if absent; promotes the stored role if present.
    pub fn seed_admin(&self, principal: Principal, name: DisplayName) {
        let mut profiles = self
            .profiles
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        profiles
            .entry(principal)
            .and_modify(|existing| existing.role = Role::Admin)
            .or_insert_with(|| UserProfile::new(name, Role::Admin));
    }
}
