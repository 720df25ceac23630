//! Order listings.

use tracing::instrument;

use addy_fitness_core::UserId;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::Order;

impl ApiClient {
    /// Get orders scoped by the caller's role: admins see all orders,
    /// staff see orders for their assigned clients only. The scoping is
    /// backend-side.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get("/orders").await
    }

    /// Get orders for a specific user.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_user_orders(&self, user_id: UserId) -> Result<Vec<Order>, ApiError> {
        self.get(&format!("/users/{user_id}/orders")).await
    }
}
