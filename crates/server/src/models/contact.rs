//! Contact form domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use makeready_core::ContactFormId;

/// A public contact-form submission.
///
/// Fields are stored verbatim: the intake must never reject a lead, so
/// field validation is the submitting UI's concern. Submissions are
/// append-only and readable only by admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Server-generated unique id.
    pub id: ContactFormId,
    /// Submitter name.
    pub name: String,
    /// Submitter email.
    pub email: String,
    /// Submitter phone.
    pub phone: String,
    /// Free-form message.
    pub message: String,
    /// When the submission arrived.
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub submitted_at: DateTime<Utc>,
}
