//! Backend record shapes echoed through the client.
//!
//! These records are defined and owned by the backend; the client neither
//! validates nor mutates them beyond pass-through. Each struct types only
//! the fields the client itself reads and carries everything else in a
//! flattened `extra` map so unknown fields survive a round trip unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use addy_fitness_core::{
    AppointmentId, AssignmentId, AssignmentStatus, Email, OrderId, ServiceType, UserId, UserRole,
};

/// A backend user record.
///
/// Depending on the endpoint this may be a full profile, a fitness-only
/// view (trainer endpoints), or a medical view (doctor endpoints); the
/// differences live in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Backend-owned fields the client passes through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A staff-client assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub staff_user_id: UserId,
    pub client_user_id: UserId,
    pub service_type: ServiceType,
    #[serde(default)]
    pub status: AssignmentStatus,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for creating a staff-client assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAssignment {
    /// Staff member (doctor/trainer/nutritionist) user ID.
    pub staff_user_id: UserId,
    /// Client/patient user ID.
    pub client_user_id: UserId,
    pub service_type: ServiceType,
}

/// An appointment between a doctor and a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    /// The patient this appointment belongs to.
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An order record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response from `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Opaque bearer credential for subsequent requests.
    pub access_token: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Acknowledgement body the backend returns for state-change operations
/// (assignment completion, cancellation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_passes_unknown_fields_through() {
        let json = serde_json::json!({
            "id": 7,
            "email": "member@addyfitness.com",
            "role": "member",
            "full_name": "Asha Rao",
            "height_cm": 162,
            "medical_history": {"allergies": ["penicillin"]}
        });

        let user: User = serde_json::from_value(json.clone()).expect("deserialize");
        assert_eq!(user.id, UserId::new(7));
        assert_eq!(user.role, UserRole::Member);
        assert_eq!(user.extra.get("height_cm"), Some(&Value::from(162)));

        let back = serde_json::to_value(&user).expect("serialize");
        assert_eq!(back, json);
    }

    #[test]
    fn assignment_status_defaults_when_missing() {
        let json = serde_json::json!({
            "id": 1,
            "staff_user_id": 2,
            "client_user_id": 3,
            "service_type": "training"
        });
        let assignment: Assignment = serde_json::from_value(json).expect("deserialize");
        assert_eq!(assignment.status, AssignmentStatus::Active);
    }

    #[test]
    fn token_response_ignores_extra_metadata() {
        let json = serde_json::json!({
            "access_token": "abc123",
            "token_type": "bearer"
        });
        let resp: TokenResponse = serde_json::from_value(json).expect("deserialize");
        assert_eq!(resp.access_token, "abc123");
        assert_eq!(resp.extra.get("token_type"), Some(&Value::from("bearer")));
    }
}
