//! Role authority: the authorization decision function.

use std::sync::Arc;

use thiserror::Error;

use makeready_core::{Caller, Principal, Role};

use crate::store::ProfileStore;

/// Authorization failures.
///
/// `Unauthenticated` and `Forbidden` are distinct from `NotFound` so
/// clients can present "access denied" vs "does not exist" differently.
#[derive(Debug, Error)]
pub enum AccessError {
    /// No identity where one is required.
    #[error("caller is not authenticated")]
    Unauthenticated,

    /// Identity present, role insufficient.
    #[error("{0}")]
    Forbidden(String),
}

/// An operation a caller is attempting, as seen by the authority.
///
/// Variants carry only what the decision needs; `ReadUserProfile` names its
/// target because cross-principal profile reads are admin territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    SubmitContactForm,
    ReadPlanCatalog,
    ReadOwnProfile,
    SaveOwnProfile,
    ReadUserProfile { target: &'a Principal },
    AssignRole,
    AddProperty,
    ReadProperty,
    ListProperties,
    CreateServiceRequest,
    ReadServiceRequest,
    ListServiceRequests,
    UploadPhoto,
    UpdateRequestStatus,
    ListContactForms,
    ReadContactForm,
}

impl Operation<'_> {
    /// Operations an anonymous caller may perform.
    const fn is_public(self) -> bool {
        matches!(self, Self::SubmitContactForm | Self::ReadPlanCatalog)
    }

    /// Operations reserved for admins.
    const fn is_admin_only(self) -> bool {
        matches!(
            self,
            Self::UpdateRequestStatus
                | Self::ListContactForms
                | Self::ReadContactForm
                | Self::AssignRole
        )
    }
}

/// Decides, for a caller and requested operation, whether the operation is
/// permitted.
///
/// Constructed over an explicit profile store - no hidden global role
/// state - so tests can inject a fresh store per case.
#[derive(Debug, Clone)]
pub struct RoleAuthority {
    profiles: Arc<ProfileStore>,
}

impl RoleAuthority {
    /// Create an authority reading roles from the given profile store.
    #[must_use]
    pub const fn new(profiles: Arc<ProfileStore>) -> Self {
        Self { profiles }
    }

    /// Effective role of a caller: `Guest` for anonymous callers and
    /// principals without a profile.
    #[must_use]
    pub fn role_of(&self, caller: &Caller) -> Role {
        caller
            .principal()
            .map_or(Role::Guest, |principal| self.profiles.role_of(principal))
    }

    /// Whether the caller holds the admin role.
    #[must_use]
    pub fn is_admin(&self, caller: &Caller) -> bool {
        self.role_of(caller).is_admin()
    }

    /// Authorize an operation.
    ///
    /// Rules, evaluated in priority order:
    /// 1. Anonymous callers: only public operations (contact-form
    ///    submission, catalog reads) are allowed.
    /// 2. Admin-only operations require the stored role `admin`.
    /// 3. Cross-principal profile reads are allowed for the target
    ///    principal itself or an admin.
    /// 4. All other authenticated operations are allowed.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::Unauthenticated` for anonymous callers on
    /// non-public operations, `AccessError::Forbidden` when the role is
    /// insufficient.
    pub fn authorize(&self, caller: &Caller, operation: Operation<'_>) -> Result<(), AccessError> {
        let Some(principal) = caller.principal() else {
            if operation.is_public() {
                return Ok(());
            }
            return Err(AccessError::Unauthenticated);
        };

        if operation.is_admin_only() && !self.profiles.role_of(principal).is_admin() {
            return Err(AccessError::Forbidden(
                "admin role required".to_string(),
            ));
        }

        if let Operation::ReadUserProfile { target } = operation
            && target != principal
            && !self.profiles.role_of(principal).is_admin()
        {
            return Err(AccessError::Forbidden(
                "profiles of other users are admin-readable only".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use makeready_core::DisplayName;

    fn authority_with(roles: &[(&str, Role)]) -> RoleAuthority {
        let profiles = Arc::new(ProfileStore::new());
        for (token, role) in roles {
            let principal = Principal::from(*token);
            profiles.save_name(&principal, DisplayName::parse(token).unwrap());
            profiles.set_role(&principal, *role).unwrap();
        }
        RoleAuthority::new(profiles)
    }

    fn caller(token: &str) -> Caller {
        Caller::Authenticated(Principal::from(token))
    }

    #[test]
    fn test_anonymous_may_submit_contact_and_read_plans() {
        let authority = authority_with(&[]);
        assert!(authority
            .authorize(&Caller::Anonymous, Operation::SubmitContactForm)
            .is_ok());
        assert!(authority
            .authorize(&Caller::Anonymous, Operation::ReadPlanCatalog)
            .is_ok());
    }

    #[test]
    fn test_anonymous_denied_everything_else() {
        let authority = authority_with(&[]);
        for operation in [
            Operation::AddProperty,
            Operation::ListProperties,
            Operation::CreateServiceRequest,
            Operation::UpdateRequestStatus,
            Operation::ListContactForms,
            Operation::SaveOwnProfile,
        ] {
            assert!(matches!(
                authority.authorize(&Caller::Anonymous, operation),
                Err(AccessError::Unauthenticated)
            ));
        }
    }

    #[test]
    fn test_admin_only_operations_require_admin() {
        let authority = authority_with(&[("admin-a", Role::Admin), ("agent-b", Role::User)]);

        for operation in [
            Operation::UpdateRequestStatus,
            Operation::ListContactForms,
            Operation::ReadContactForm,
            Operation::AssignRole,
        ] {
            assert!(authority.authorize(&caller("admin-a"), operation).is_ok());
            assert!(matches!(
                authority.authorize(&caller("agent-b"), operation),
                Err(AccessError::Forbidden(_))
            ));
        }
    }

    #[test]
    fn test_profiled_caller_not_required_for_authenticated_ops() {
        // A principal without a profile yet can still register properties.
        let authority = authority_with(&[]);
        assert!(authority
            .authorize(&caller("fresh"), Operation::AddProperty)
            .is_ok());
    }

    #[test]
    fn test_read_user_profile_self_or_admin() {
        let authority = authority_with(&[("admin-a", Role::Admin), ("agent-b", Role::User)]);
        let target = Principal::from("agent-b");

        assert!(authority
            .authorize(&caller("agent-b"), Operation::ReadUserProfile { target: &target })
            .is_ok());
        assert!(authority
            .authorize(&caller("admin-a"), Operation::ReadUserProfile { target: &target })
            .is_ok());
        assert!(matches!(
            authority.authorize(
                &caller("agent-c"),
                Operation::ReadUserProfile { target: &target }
            ),
            Err(AccessError::Forbidden(_))
        ));
    }

    #[test]
    fn test_role_of_guest_without_profile() {
        let authority = authority_with(&[]);
        assert_eq!(authority.role_of(&caller("fresh")), Role::Guest);
        assert_eq!(authority.role_of(&Caller::Anonymous), Role::Guest);
        assert!(!authority.is_admin(&caller("fresh")));
    }
}
