//! Role and status enums for portal entities.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Backend user roles.
///
/// Role-based filtering and permission enforcement are entirely
/// backend-side; the client only reads the role for UI gating and the
/// `?role=` query parameter on user listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Doctor,
    Trainer,
    Nutritionist,
    Member,
}

impl UserRole {
    /// Role name as the backend spells it in query strings and records.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Doctor => "doctor",
            Self::Trainer => "trainer",
            Self::Nutritionist => "nutritionist",
            Self::Member => "member",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role string is not one the backend defines.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown user role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "doctor" => Ok(Self::Doctor),
            "trainer" => Ok(Self::Trainer),
            "nutritionist" => Ok(Self::Nutritionist),
            "member" => Ok(Self::Member),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// Service type for a staff-client assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Healthcare,
    Training,
    Nutrition,
}

impl ServiceType {
    /// Service type as the backend spells it.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Healthcare => "healthcare",
            Self::Training => "training",
            Self::Nutrition => "nutrition",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a staff-client assignment.
///
/// Cancelling an assignment marks it cancelled on the backend; records are
/// never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_snake_case() {
        let json = serde_json::to_string(&UserRole::Nutritionist).expect("serialize");
        assert_eq!(json, "\"nutritionist\"");
    }

    #[test]
    fn role_parses_backend_spelling() {
        assert_eq!("doctor".parse::<UserRole>().ok(), Some(UserRole::Doctor));
        assert!("superuser".parse::<UserRole>().is_err());
    }

    #[test]
    fn service_type_matches_assignment_payload_spelling() {
        assert_eq!(ServiceType::Healthcare.as_str(), "healthcare");
        let json = serde_json::to_string(&ServiceType::Training).expect("serialize");
        assert_eq!(json, "\"training\"");
    }

    #[test]
    fn assignment_status_defaults_to_active() {
        assert_eq!(AssignmentStatus::default(), AssignmentStatus::Active);
    }
}
