//! Service request domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use makeready_core::{ContentRef, Principal, PropertyId, RequestId, RequestStatus, Urgency};

/// A maintenance service request filed against a property.
///
/// `property_id` must reference an existing property at creation time; the
/// reference is not re-validated afterwards (property deletion is out of
/// scope). `updated_at` changes atomically with every status write and
/// photo append. The `photos` sequence only grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    /// Server-generated unique id.
    pub id: RequestId,
    /// The property this request is filed against.
    pub property_id: PropertyId,
    /// Short summary of the issue.
    pub title: String,
    /// Detailed description.
    pub description: String,
    /// Priority tag.
    pub urgency: Urgency,
    /// Workflow status; starts at `Pending`, admin-transitioned.
    pub status: RequestStatus,
    /// The caller who filed the request.
    pub created_by: Principal,
    /// When the request was filed.
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub created_at: DateTime<Utc>,
    /// When the request last changed (status write or photo append).
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub updated_at: DateTime<Utc>,
    /// Opaque content references for attached photos, in upload order.
    pub photos: Vec<ContentRef>,
}

impl ServiceRequest {
    /// Create a fresh request in the `Pending` state.
    #[must_use]
    pub fn new(
        property_id: PropertyId,
        title: String,
        description: String,
        urgency: Urgency,
        created_by: Principal,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RequestId::generate(),
            property_id,
            title,
            description,
            urgency,
            status: RequestStatus::Pending,
            created_by,
            created_at: now,
            updated_at: now,
            photos: Vec::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

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
    fn test_new_request_starts_pending() {
        let request = sample();
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.created_at, request.updated_at);
        assert!(request.photos.is_empty());
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        assert_ne!(sample().id, sample().id);
    }

    #[test]
    fn test_timestamps_serialize_as_nanoseconds() {
        let request = sample();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["created_at"].as_i64().unwrap(),
            request.created_at.timestamp_nanos_opt().unwrap()
        );
    }
}
