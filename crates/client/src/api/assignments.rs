//! Staff-client assignment operations (admin only).

use tracing::instrument;

use addy_fitness_core::{AssignmentId, UserId};

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Acknowledgement, Assignment, NewAssignment};

impl ApiClient {
    /// Get all clients assigned to a specific staff member.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_staff_clients(
        &self,
        staff_user_id: UserId,
        include_completed: bool,
    ) -> Result<Vec<Assignment>, ApiError> {
        let suffix = if include_completed {
            "?include_completed=true"
        } else {
            ""
        };
        self.get(&format!("/assignments/staff/{staff_user_id}/clients{suffix}"))
            .await
    }

    /// Get all staff members assigned to a specific client.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_client_staff(
        &self,
        client_user_id: UserId,
    ) -> Result<Vec<Assignment>, ApiError> {
        self.get(&format!("/assignments/client/{client_user_id}/staff"))
            .await
    }

    /// Create a new staff-client assignment.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, assignment))]
    pub async fn create_assignment(
        &self,
        assignment: &NewAssignment,
    ) -> Result<Assignment, ApiError> {
        self.post("/assignments", assignment).await
    }

    /// Mark an assignment as completed.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn complete_assignment(
        &self,
        assignment_id: AssignmentId,
    ) -> Result<Acknowledgement, ApiError> {
        self.put(
            &format!("/assignments/{assignment_id}/complete"),
            &serde_json::json!({}),
        )
        .await
    }

    /// Cancel an assignment. The backend marks it cancelled; the record is
    /// not deleted.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn cancel_assignment(
        &self,
        assignment_id: AssignmentId,
    ) -> Result<Acknowledgement, ApiError> {
        self.delete(&format!("/assignments/{assignment_id}")).await
    }

    /// Get all assignments (admin only).
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_all_assignments(
        &self,
        include_completed: bool,
    ) -> Result<Vec<Assignment>, ApiError> {
        let path = if include_completed {
            "/assignments?include_completed=true"
        } else {
            "/assignments"
        };
        self.get(path).await
    }
}
