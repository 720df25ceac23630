//! Static reference data consumed directly by the UI.

mod categories;

pub use categories::{
    HEALTHCARE_SPECIALTIES, NUTRITION_PLANS, ServiceCategory, TRAINING_CATEGORIES,
};
