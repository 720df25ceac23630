//! Nutritionist operations.
//!
//! Note the path asymmetry with the trainer endpoints: the nutrition
//! routes say `patient` where the trainer routes say `client`. That is the
//! backend's spelling, not a typo here.

use tracing::instrument;

use addy_fitness_core::UserId;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::User;

impl ApiClient {
    /// Get all clients assigned to the current nutritionist.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_nutrition_clients(&self) -> Result<Vec<User>, ApiError> {
        self.get("/nutrition/my-patients").await
    }

    /// Get the nutrition profile of a specific client.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_nutrition_client_profile(&self, client_id: UserId) -> Result<User, ApiError> {
        self.get(&format!("/nutrition/patient/{client_id}/profile"))
            .await
    }
}
