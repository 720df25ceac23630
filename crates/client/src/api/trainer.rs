//! Trainer operations.

use tracing::instrument;

use addy_fitness_core::UserId;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::User;

impl ApiClient {
    /// Get all clients assigned to the current trainer.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_trainer_clients(&self) -> Result<Vec<User>, ApiError> {
        self.get("/trainer/my-clients").await
    }

    /// Get the fitness profile of a specific client. The backend excludes
    /// medical fields from this view.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_trainer_client_profile(&self, client_id: UserId) -> Result<User, ApiError> {
        self.get(&format!("/trainer/client/{client_id}/profile"))
            .await
    }
}
