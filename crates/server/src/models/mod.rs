//! Domain types for the MakeReady core.
//!
//! Each struct here is the canonical record shape for one durable keyed
//! collection. Timestamps serialize as integer nanoseconds-since-epoch on
//! the wire.

pub mod contact;
pub mod plan;
pub mod profile;
pub mod property;
pub mod request;

pub use contact::ContactForm;
pub use plan::Plan;
pub use profile::UserProfile;
pub use property::Property;
pub use request::ServiceRequest;
