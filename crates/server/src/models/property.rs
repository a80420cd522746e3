//! Property domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use makeready_core::{Principal, PropertyId};

/// A listed property registered by an agent.
///
/// The id is chosen by the caller at creation; the creating caller becomes
/// the owner. Properties are never mutated or deleted after creation.
/// Address fields are stored verbatim; no geocoding or validation is
/// performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Caller-supplied unique id.
    pub id: PropertyId,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// ZIP code.
    pub zip: String,
    /// The agent who registered the property.
    pub owner: Principal,
    /// When the property was registered.
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub created_at: DateTime<Utc>,
}
