//! Property registry service.

use chrono::Utc;

use makeready_core::{Caller, PropertyId};

use super::ServiceError;
use crate::auth::{Operation, RoleAuthority};
use crate::models::Property;
use crate::state::AppState;
use crate::store::{PropertyStore, StoreError};

/// Fields for registering a property.
#[derive(Debug)]
pub struct NewProperty {
    /// Caller-chosen unique id.
    pub id: PropertyId,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Service for property registration and reads.
pub struct PropertyService<'a> {
    authority: &'a RoleAuthority,
    properties: &'a PropertyStore,
}

impl<'a> PropertyService<'a> {
    /// Create a property service borrowing from the application state.
    #[must_use]
    pub fn new(state: &'a AppState) -> Self {
        Self {
            authority: state.authority(),
            properties: state.properties(),
        }
    }

    /// Register a property; the caller becomes its owner.
    ///
    /// Address fields are stored verbatim - no geocoding or validation.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Unauthenticated` for anonymous callers and
    /// `ServiceError::Conflict` if the id is already taken (the existing
    /// record is left unchanged).
    pub fn add_property(&self, caller: &Caller, new: NewProperty) -> Result<(), ServiceError> {
        self.authority.authorize(caller, Operation::AddProperty)?;
        let owner = caller
            .principal()
            .ok_or(ServiceError::Unauthenticated)?
            .clone();

        let property = Property {
            id: new.id,
            address: new.address,
            city: new.city,
            state: new.state,
            zip: new.zip,
            owner,
            created_at: Utc::now(),
        };

        self.properties.insert(property).map_err(|err| match err {
            StoreError::Conflict(msg) => ServiceError::Conflict(msg),
            StoreError::NotFound => ServiceError::NotFound("property".to_string()),
        })
    }

    /// Look up a property by id.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Unauthenticated` for anonymous callers and
    /// `ServiceError::NotFound` if the id is absent.
    pub fn get_property(&self, caller: &Caller, id: &PropertyId) -> Result<Property, ServiceError> {
        self.authority.authorize(caller, Operation::ReadProperty)?;
        self.properties
            .get(id)
            .map_err(|_| ServiceError::NotFound(format!("property {id}")))
    }

    /// List all properties.
    ///
    /// An authenticated read without per-owner filtering; ordering is
    /// unspecified by the contract.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Unauthenticated` for anonymous callers.
    pub fn get_all_properties(&self, caller: &Caller) -> Result<Vec<Property>, ServiceError> {
        self.authority.authorize(caller, Operation::ListProperties)?;
        Ok(self.properties.list())
    }
}
