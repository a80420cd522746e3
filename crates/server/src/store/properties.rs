//! Property store: property id → property.
//!
//! Ids are caller-supplied, so creation can collide; the first writer wins
//! and later writers get `Conflict`. Records are never mutated or deleted.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use makeready_core::PropertyId;

use super::StoreError;
use crate::models::Property;

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<PropertyId, Property>,
    // Insertion order for listing; the contract leaves ordering unspecified
    // but a stable order keeps responses deterministic.
    order: Vec<PropertyId>,
}

/// Keyed store of properties.
#[derive(Debug, Default)]
pub struct PropertyStore {
    inner: RwLock<Inner>,
}

impl PropertyStore {
    /// Create an empty property store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new property.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the id already exists; the
    /// existing record is left unchanged.
    pub fn insert(&self, property: Property) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if inner.records.contains_key(&property.id) {
            return Err(StoreError::Conflict(format!(
                "property {} already exists",
                property.id
            )));
        }
        inner.order.push(property.id.clone());
        inner.records.insert(property.id.clone(), property);
        Ok(())
    }

    /// Look up a property by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the id is absent.
    pub fn get(&self, id: &PropertyId) -> Result<Property, StoreError> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .records
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Whether a property with this id exists.
    #[must_use]
    pub fn contains(&self, id: &PropertyId) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .records
            .contains_key(id)
    }

    /// All properties in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Property> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .order
            .iter()
            .filter_map(|id| inner.records.get(id).cloned())
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use makeready_core::Principal;

    fn property(id: &str, address: &str) -> Property {
        Property {
            id: PropertyId::new(id),
            address: address.to_string(),
            city: "Plano".to_string(),
            state: "TX".to_string(),
            zip: "75074".to_string(),
            owner: Principal::from("agent-b"),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_insert_then_get() {
        let store = PropertyStore::new();
        let p = property("p1", "1 Main St");
        store.insert(p.clone()).unwrap();
        assert_eq!(store.get(&PropertyId::new("p1")).unwrap(), p);
    }

    #[test]
    fn test_duplicate_id_conflicts_and_keeps_first() {
        let store = PropertyStore::new();
        store.insert(property("p1", "1 Main St")).unwrap();

        let result = store.insert(property("p1", "2 Elm St"));
        assert!(matches!(result, Err(StoreError::Conflict(_))));
        assert_eq!(store.get(&PropertyId::new("p1")).unwrap().address, "1 Main St");
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = PropertyStore::new();
        assert!(matches!(
            store.get(&PropertyId::new("nope")),
            Err(StoreError::NotFound)
        ));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = PropertyStore::new();
        store.insert(property("p2", "2 Elm St")).unwrap();
        store.insert(property("p1", "1 Main St")).unwrap();

        let ids: Vec<_> = store.list().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PropertyId::new("p2"), PropertyId::new("p1")]);
    }
}
