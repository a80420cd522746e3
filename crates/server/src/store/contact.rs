//! Contact form store: append-only submissions.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use makeready_core::ContactFormId;

use super::StoreError;
use crate::models::ContactForm;

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<ContactFormId, ContactForm>,
    order: Vec<ContactFormId>,
}

/// Append-only store of contact-form submissions.
#[derive(Debug, Default)]
pub struct ContactStore {
    inner: RwLock<Inner>,
}

impl ContactStore {
    /// Create an empty contact store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submission. Ids are server-generated UUIDs, unique within
    /// the store by construction.
    pub fn append(&self, form: ContactForm) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.order.push(form.id.clone());
        inner.records.insert(form.id.clone(), form);
    }

    /// Look up a submission by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the id is absent.
    pub fn get(&self, id: &ContactFormId) -> Result<ContactForm, StoreError> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .records
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// All submissions in arrival order.
    #[must_use]
    pub fn list(&self) -> Vec<ContactForm> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .order
            .iter()
            .filter_map(|id| inner.records.get(id).cloned())
            .collect()
    }
}
