//! Status and urgency enums for service requests.
//!
//! The UI collaborator speaks in display strings ("In Progress",
//! "Inspection Showstopper"); internally both fields are closed
//! enumerations. Unrecognized strings are rejected at the boundary rather
//! than propagated untyped.

use serde::{Deserialize, Serialize};

/// Workflow status of a service request.
///
/// A fresh request starts at `Pending`. No ordering constraint is enforced
/// between the four states: any admin may set any target status at any
/// time, including reopening a `Completed` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RequestStatus {
    #[default]
    Pending,
    Scheduled,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Scheduled => write!(f, "Scheduled"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Scheduled" => Ok(Self::Scheduled),
            "In Progress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            _ => Err(format!("invalid request status: {s}")),
        }
    }
}

/// Priority tag on a service request.
///
/// Display-only beyond filtering; `InspectionShowstopper` marks an issue
/// that would block a sale inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
    #[serde(rename = "Inspection Showstopper")]
    InspectionShowstopper,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
            Self::InspectionShowstopper => write!(f, "Inspection Showstopper"),
        }
    }
}

impl std::str::FromStr for Urgency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            "Inspection Showstopper" => Ok(Self::InspectionShowstopper),
            _ => Err(format!("invalid urgency: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_roundtrip() {
        for status in [
            RequestStatus::Pending,
            RequestStatus::Scheduled,
            RequestStatus::InProgress,
            RequestStatus::Completed,
        ] {
            let s = status.to_string();
            assert_eq!(s.parse::<RequestStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_serde_uses_display_strings() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        let parsed: RequestStatus = serde_json::from_str("\"Scheduled\"").unwrap();
        assert_eq!(parsed, RequestStatus::Scheduled);
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert!("Done".parse::<RequestStatus>().is_err());
        assert!("in progress".parse::<RequestStatus>().is_err());
        assert!(serde_json::from_str::<RequestStatus>("\"Done\"").is_err());
    }

    #[test]
    fn test_default_status_is_pending() {
        assert_eq!(RequestStatus::default(), RequestStatus::Pending);
    }

    #[test]
    fn test_urgency_display_roundtrip() {
        for urgency in [
            Urgency::Low,
            Urgency::Medium,
            Urgency::High,
            Urgency::InspectionShowstopper,
        ] {
            let s = urgency.to_string();
            assert_eq!(s.parse::<Urgency>().unwrap(), urgency);
        }
    }

    #[test]
    fn test_urgency_serde_display_string() {
        assert_eq!(
            serde_json::to_string(&Urgency::InspectionShowstopper).unwrap(),
            "\"Inspection Showstopper\""
        );
    }

    #[test]
    fn test_urgency_rejects_unknown() {
        assert!("Urgent".parse::<Urgency>().is_err());
    }
}
