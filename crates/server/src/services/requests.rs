//! Service request engine: creation, status workflow, photo attachment.

use chrono::Utc;

use makeready_core::{Caller, ContentRef, PropertyId, RequestId, RequestStatus, Urgency};

use super::ServiceError;
use crate::auth::{Operation, RoleAuthority};
use crate::models::ServiceRequest;
use crate::state::AppState;
use crate::store::{PropertyStore, RequestStore};

/// Fields for filing a service request.
#[derive(Debug)]
pub struct NewRequest {
    pub property_id: PropertyId,
    pub title: String,
    pub description: String,
    pub urgency: Urgency,
}

/// The workflow core: drives service request state with consistent
/// timestamps and ownership.
pub struct RequestService<'a> {
    authority: &'a RoleAuthority,
    requests: &'a RequestStore,
    properties: &'a PropertyStore,
}

impl<'a> RequestService<'a> {
    /// Create a request service borrowing from the application state.
    #[must_use]
    pub fn new(state: &'a AppState) -> Self {
        Self {
            authority: state.authority(),
            requests: state.requests(),
            properties: state.properties(),
        }
    }

    /// File a service request against an existing property.
    ///
    /// The property reference is validated at creation time only; status
    /// starts at `Pending` and `created_at == updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Unauthenticated` for anonymous callers and
    /// `ServiceError::NotFound` if the property does not exist (no record
    /// is created).
    pub fn create(&self, caller: &Caller, new: NewRequest) -> Result<RequestId, ServiceError> {
        self.authority
            .authorize(caller, Operation::CreateServiceRequest)?;
        let created_by = caller
            .principal()
            .ok_or(ServiceError::Unauthenticated)?
            .clone();

        if !self.properties.contains(&new.property_id) {
            return Err(ServiceError::NotFound(format!(
                "property {}",
                new.property_id
            )));
        }

        let request = ServiceRequest::new(
            new.property_id,
            new.title,
            new.description,
            new.urgency,
            created_by,
            Utc::now(),
        );
        let id = request.id.clone();

        tracing::info!(request_id = %id, urgency = %request.urgency, "Service request filed");
        self.requests.insert(request);
        Ok(id)
    }

    /// Set a request's status (admin-only).
    ///
    /// No ordering constraint exists between the four states: any admin
    /// may set any target status at any time, including re-setting the
    /// current one. `updated_at` refreshes with the write.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Forbidden` unless the caller is an admin and
    /// `ServiceError::NotFound` if the id is absent.
    pub fn update_status(
        &self,
        caller: &Caller,
        id: &RequestId,
        status: RequestStatus,
    ) -> Result<(), ServiceError> {
        self.authority
            .authorize(caller, Operation::UpdateRequestStatus)?;

        let updated = self
            .requests
            .update_status(id, status)
            .map_err(|_| ServiceError::NotFound(format!("service request {id}")))?;

        tracing::info!(request_id = %id, status = %updated.status, "Status updated");
        Ok(())
    }

    /// Attach a photo content reference to a request.
    ///
    /// Appends to the photo sequence (which only grows) and refreshes
    /// `updated_at`. No count cap is enforced.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Unauthenticated` for anonymous callers and
    /// `ServiceError::NotFound` if the id is absent.
    pub fn upload_photo(
        &self,
        caller: &Caller,
        id: &RequestId,
        content_ref: ContentRef,
    ) -> Result<(), ServiceError> {
        self.authority.authorize(caller, Operation::UploadPhoto)?;
        self.requests
            .append_photo(id, content_ref)
            .map_err(|_| ServiceError::NotFound(format!("service request {id}")))?;
        Ok(())
    }

    /// Look up a request by id.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Unauthenticated` for anonymous callers and
    /// `ServiceError::NotFound` if the id is absent.
    pub fn get(&self, caller: &Caller, id: &RequestId) -> Result<ServiceRequest, ServiceError> {
        self.authority
            .authorize(caller, Operation::ReadServiceRequest)?;
        self.requests
            .get(id)
            .map_err(|_| ServiceError::NotFound(format!("service request {id}")))
    }

    /// List all requests.
    ///
    /// An authenticated read without per-owner filtering; ordering is
    /// unspecified by the contract.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Unauthenticated` for anonymous callers.
    pub fn get_all(&self, caller: &Caller) -> Result<Vec<ServiceRequest>, ServiceError> {
        self.authority
            .authorize(caller, Operation::ListServiceRequests)?;
        Ok(self.requests.list())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::services::PropertyService;
    use crate::services::properties::NewProperty;
    use makeready_core::Principal;

    fn state_with_admin(admin: &str) -> AppState {
        AppState::new(ServerConfig {
            bootstrap_admins: vec![Principal::from(admin)],
            ..ServerConfig::default()
        })
    }

    fn caller(token: &str) -> Caller {
        Caller::Authenticated(Principal::from(token))
    }

    fn register_property(state: &AppState, owner: &Caller, id: &str) {
        PropertyService::new(state)
            .add_property(
                owner,
                NewProperty {
                    id: PropertyId::new(id),
                    address: "1 Main St".to_string(),
                    city: "Plano".to_string(),
                    state: "TX".to_string(),
                    zip: "75074".to_string(),
                },
            )
            .unwrap();
    }

    fn leaky_faucet(property: &str) -> NewRequest {
        NewRequest {
            property_id: PropertyId::new(property),
            title: "Leaky faucet".to_string(),
            description: "Kitchen sink drips".to_string(),
            urgency: Urgency::Medium,
        }
    }

    #[test]
    fn test_create_requires_existing_property() {
        let state = AppState::new(ServerConfig::default());
        let service = RequestService::new(&state);
        let b = caller("agent-b");

        let result = service.create(&b, leaky_faucet("ghost"));
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
        // No record was created.
        assert!(service.get_all(&b).unwrap().is_empty());
    }

    #[test]
    fn test_create_starts_pending_with_caller_ownership() {
        let state = AppState::new(ServerConfig::default());
        let b = caller("agent-b");
        register_property(&state, &b, "p1");
        let service = RequestService::new(&state);

        let id = service.create(&b, leaky_faucet("p1")).unwrap();
        let request = service.get(&b, &id).unwrap();

        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.created_by, Principal::from("agent-b"));
        assert_eq!(request.created_at, request.updated_at);
        assert!(request.photos.is_empty());
    }

    #[test]
    fn test_non_admin_cannot_transition_status() {
        let state = state_with_admin("admin-a");
        let b = caller("agent-b");
        register_property(&state, &b, "p1");
        let service = RequestService::new(&state);
        let id = service.create(&b, leaky_faucet("p1")).unwrap();

        let result = service.update_status(&b, &id, RequestStatus::Scheduled);
        assert!(matches!(result, Err(ServiceError::Forbidden(_))));
        // Status unchanged.
        assert_eq!(service.get(&b, &id).unwrap().status, RequestStatus::Pending);
    }

    #[test]
    fn test_admin_may_set_any_status() {
        let state = state_with_admin("admin-a");
        let b = caller("agent-b");
        let a = caller("admin-a");
        register_property(&state, &b, "p1");
        let service = RequestService::new(&state);
        let id = service.create(&b, leaky_faucet("p1")).unwrap();

        let mut last_updated = service.get(&b, &id).unwrap().updated_at;
        for status in [
            RequestStatus::Scheduled,
            RequestStatus::InProgress,
            RequestStatus::Completed,
            // Completed is not terminal; reopening is allowed.
            RequestStatus::Pending,
        ] {
            service.update_status(&a, &id, status).unwrap();
            let request = service.get(&b, &id).unwrap();
            assert_eq!(request.status, status);
            assert!(request.updated_at >= last_updated);
            last_updated = request.updated_at;
        }
    }

    #[test]
    fn test_update_status_missing_request() {
        let state = state_with_admin("admin-a");
        let service = RequestService::new(&state);

        let result = service.update_status(
            &caller("admin-a"),
            &RequestId::new("ghost"),
            RequestStatus::Scheduled,
        );
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn test_upload_photo_appends_in_order() {
        let state = AppState::new(ServerConfig::default());
        let b = caller("agent-b");
        register_property(&state, &b, "p1");
        let service = RequestService::new(&state);
        let id = service.create(&b, leaky_faucet("p1")).unwrap();

        for n in 0..4 {
            service
                .upload_photo(&b, &id, ContentRef::new(format!("blob-{n}")))
                .unwrap();
        }

        let request = service.get(&b, &id).unwrap();
        assert_eq!(request.photos.len(), 4);
        assert_eq!(request.photos.first(), Some(&ContentRef::new("blob-0")));
        assert_eq!(request.photos.last(), Some(&ContentRef::new("blob-3")));
        assert!(request.updated_at >= request.created_at);
    }

    #[test]
    fn test_upload_photo_missing_request() {
        let state = AppState::new(ServerConfig::default());
        let service = RequestService::new(&state);

        let result = service.upload_photo(
            &caller("agent-b"),
            &RequestId::new("ghost"),
            ContentRef::new("blob-1"),
        );
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn test_requests_visible_across_owners() {
        let state = AppState::new(ServerConfig::default());
        let b = caller("agent-b");
        register_property(&state, &b, "p1");
        let service = RequestService::new(&state);
        service.create(&b, leaky_faucet("p1")).unwrap();

        // The observed contract scopes list-all to "authenticated", not
        // "owner"; another agent sees the request too.
        let listed = service.get_all(&caller("agent-c")).unwrap();
        assert_eq!(listed.len(), 1);
    }
}
