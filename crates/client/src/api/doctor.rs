//! Doctor/healthcare operations.

use serde::Serialize;
use tracing::instrument;

use addy_fitness_core::{AppointmentId, UserId};

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Appointment, User};

#[derive(Serialize)]
struct NotesUpdate<'a> {
    notes: &'a str,
}

impl ApiClient {
    /// Get all patients assigned to the current doctor.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_my_patients(&self) -> Result<Vec<User>, ApiError> {
        self.get("/doctor/my-patients").await
    }

    /// Get all appointments for the current doctor's patients.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_my_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.get("/doctor/my-appointments").await
    }

    /// Get the full profile of a specific patient, medical fields
    /// included.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_patient_profile(&self, patient_id: UserId) -> Result<User, ApiError> {
        self.get(&format!("/doctor/patient/{patient_id}/profile"))
            .await
    }

    /// Update the notes on a specific appointment.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, notes))]
    pub async fn update_appointment_notes(
        &self,
        appointment_id: AppointmentId,
        notes: &str,
    ) -> Result<Appointment, ApiError> {
        self.put(
            &format!("/doctor/appointments/{appointment_id}/notes"),
            &NotesUpdate { notes },
        )
        .await
    }
}

/// Filter an already-fetched appointment list down to one patient.
///
/// Pure in-memory helper - no I/O. Pairs with
/// [`ApiClient::get_my_appointments`] so patient detail views don't refetch
/// the whole list.
#[must_use]
pub fn patient_appointments(patient_id: UserId, all: &[Appointment]) -> Vec<Appointment> {
    all.iter()
        .filter(|appt| appt.user_id == patient_id)
        .cloned()
        .collect()
}
