//! User profile operations.

use serde::Serialize;
use tracing::instrument;

use addy_fitness_core::{UserId, UserRole};

use super::ApiClient;
use crate::error::ApiError;
use crate::models::User;

impl ApiClient {
    /// Get the current user's profile.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_me(&self) -> Result<User, ApiError> {
        self.get("/users/me").await
    }

    /// Update the current user's profile. `updates` carries only the
    /// fields to change; the backend owns the record shape.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, updates))]
    pub async fn update_me<B: Serialize + Sync>(&self, updates: &B) -> Result<User, ApiError> {
        self.put("/users/me", updates).await
    }

    /// Get a specific user's profile by ID. The backend filters fields by
    /// the caller's permissions.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: UserId) -> Result<User, ApiError> {
        self.get(&format!("/users/{user_id}")).await
    }

    /// Update a specific user's profile (admin/assigned staff only).
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, updates))]
    pub async fn update_user<B: Serialize + Sync>(
        &self,
        user_id: UserId,
        updates: &B,
    ) -> Result<User, ApiError> {
        self.put(&format!("/users/{user_id}"), updates).await
    }

    /// Get all users with a specific role (admin only).
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_users_by_role(&self, role: UserRole) -> Result<Vec<User>, ApiError> {
        self.get(&format!("/users?role={role}")).await
    }

    /// Get all members (patients/clients) - admin only. Shorthand for
    /// [`Self::get_users_by_role`] with [`UserRole::Member`].
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn get_all_members(&self) -> Result<Vec<User>, ApiError> {
        self.get_users_by_role(UserRole::Member).await
    }
}
