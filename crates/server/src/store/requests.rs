//! Service request store: request id → service request.
//!
//! Status writes and photo appends refresh `updated_at` under the same
//! write guard as the field change, so readers never see one without the
//! other.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use makeready_core::{ContentRef, RequestId, RequestStatus};

use super::StoreError;
use crate::models::ServiceRequest;

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<RequestId, ServiceRequest>,
    order: Vec<RequestId>,
}

/// Keyed store of service requests.
#[derive(Debug, Default)]
pub struct RequestStore {
    inner: RwLock<Inner>,
}

impl RequestStore {
    /// Create an empty request store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a freshly created request. Ids are server-generated UUIDs,
    /// unique within the store by construction.
    pub fn insert(&self, request: ServiceRequest) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.order.push(request.id.clone());
        inner.records.insert(request.id.clone(), request);
    }

    /// Look up a request by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the id is absent.
    pub fn get(&self, id: &RequestId) -> Result<ServiceRequest, StoreError> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .records
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// All requests in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<ServiceRequest> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .order
            .iter()
            .filter_map(|id| inner.records.get(id).cloned())
            .collect()
    }

    /// Number of stored requests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .records
            .len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set the status of a request, refreshing `updated_at`.
    ///
    /// Setting the current status again is a successful no-op in workflow
    /// terms; the timestamp still refreshes.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the id is absent.
    pub fn update_status(
        &self,
        id: &RequestId,
        status: RequestStatus,
    ) -> Result<ServiceRequest, StoreError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let request = inner.records.get_mut(id).ok_or(StoreError::NotFound)?;
        request.status = status;
        request.updated_at = Utc::now();
        Ok(request.clone())
    }

    /// Append a photo content reference, refreshing `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the id is absent.
    pub fn append_photo(
        &self,
        id: &RequestId,
        content_ref: ContentRef,
    ) -> Result<ServiceRequest, StoreError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let request = inner.records.get_mut(id).ok_or(StoreError::NotFound)?;
        request.photos.push(content_ref);
        request.updated_at = Utc::now();
        Ok(request.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use makeready_core::{Principal, PropertyId, Urgency};

    fn sample() -> ServiceRequest {
        ServiceRequest::new(
            PropertyId::new("p1"),
            "Leaky faucet".to_string(),
            "Kitchen sink drips".to_string(),
            Urgency::Medium,
            Principal::from("agent-b"),
            Utc::now(),
        )
    }

    #[test]
    fn test_insert_then_get() {
        let store = RequestStore::new();
        let request = sample();
        let id = request.id.clone();
        store.insert(request.clone());
        assert_eq!(store.get(&id).unwrap(), request);
    }

    #[test]
    fn test_update_status_refreshes_updated_at() {
        let store = RequestStore::new();
        let request = sample();
        let id = request.id.clone();
        let before = request.updated_at;
        store.insert(request);

        let updated = store.update_status(&id, RequestStatus::Scheduled).unwrap();
        assert_eq!(updated.status, RequestStatus::Scheduled);
        assert!(updated.updated_at >= before);
    }

    #[test]
    fn test_same_status_update_succeeds() {
        let store = RequestStore::new();
        let request = sample();
        let id = request.id.clone();
        store.insert(request);

        let updated = store.update_status(&id, RequestStatus::Pending).unwrap();
        assert_eq!(updated.status, RequestStatus::Pending);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let store = RequestStore::new();
        assert!(matches!(
            store.update_status(&RequestId::new("nope"), RequestStatus::Completed),
            Err(StoreError::NotFound)
        ));
    }

    #[test]
    fn test_append_photo_grows_in_call_order() {
        let store = RequestStore::new();
        let request = sample();
        let id = request.id.clone();
        store.insert(request);

        for n in 0..3 {
            store
                .append_photo(&id, ContentRef::new(format!("blob-{n}")))
                .unwrap();
        }

        let photos = store.get(&id).unwrap().photos;
        assert_eq!(
            photos,
            vec![
                ContentRef::new("blob-0"),
                ContentRef::new("blob-1"),
                ContentRef::new("blob-2"),
            ]
        );
    }

    #[test]
    fn test_list_and_len() {
        let store = RequestStore::new();
        assert!(store.is_empty());
        store.insert(sample());
        store.insert(sample());
        assert_eq!(store.len(), 2);
        assert_eq!(store.list().len(), 2);
    }
}
