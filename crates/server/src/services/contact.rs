//! Contact intake service.

use chrono::Utc;

use makeready_core::{Caller, ContactFormId};

use super::ServiceError;
use crate::auth::{Operation, RoleAuthority};
use crate::models::ContactForm;
use crate::state::AppState;
use crate::store::ContactStore;

/// Fields of a contact-form submission.
#[derive(Debug)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Service for the public contact intake and its admin-only reads.
pub struct ContactService<'a> {
    authority: &'a RoleAuthority,
    contact: &'a ContactStore,
}

impl<'a> ContactService<'a> {
    /// Create a contact service borrowing from the application state.
    #[must_use]
    pub fn new(state: &'a AppState) -> Self {
        Self {
            authority: state.authority(),
            contact: state.contact(),
        }
    }

    /// Record a contact-form submission.
    ///
    /// Open to anonymous callers; fields are stored verbatim (the intake
    /// must never reject a lead - field validation is the submitting UI's
    /// concern).
    pub fn submit(&self, caller: &Caller, new: NewSubmission) -> ContactFormId {
        // SubmitContactForm is public; the authority allows every caller.
        self.authority
            .authorize(caller, Operation::SubmitContactForm)
            .unwrap_or_default();

        let form = ContactForm {
            id: ContactFormId::generate(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            message: new.message,
            submitted_at: Utc::now(),
        };
        let id = form.id.clone();

        tracing::info!(form_id = %id, "Contact form submitted");
        self.contact.append(form);
        id
    }

    /// List all submissions (admin-only).
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Unauthenticated` for anonymous callers and
    /// `ServiceError::Forbidden` for non-admins.
    pub fn get_all(&self, caller: &Caller) -> Result<Vec<ContactForm>, ServiceError> {
        self.authority
            .authorize(caller, Operation::ListContactForms)?;
        Ok(self.contact.list())
    }

    /// Look up a submission by id (admin-only).
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Forbidden` for non-admins and
    /// `ServiceError::NotFound` if the id is absent.
    pub fn get(&self, caller: &Caller, id: &ContactFormId) -> Result<ContactForm, ServiceError> {
        self.authority.authorize(caller, Operation::ReadContactForm)?;
        self.contact
            .get(id)
            .map_err(|_| ServiceError::NotFound(format!("contact form {id}")))
    }
}
