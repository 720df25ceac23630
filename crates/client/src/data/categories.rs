//! Service category definitions for Training, Healthcare, and Nutrition.
//!
//! Fixed at build time, never created or mutated at runtime. The
//! `available` flag is consumed purely for UI gating; category navigation
//! itself is UI-only - picking any category shows all assigned
//! clients/patients.

use serde::Serialize;

/// A service category, specialty, or plan entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceCategory {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// URL slug.
    pub slug: &'static str,
    /// Short description for category cards.
    pub description: &'static str,
    /// Icon name the UI maps to its icon set.
    pub icon: &'static str,
    /// Whether the category is currently offered.
    pub available: bool,
}

/// Training service categories.
pub static TRAINING_CATEGORIES: [ServiceCategory; 4] = [
    ServiceCategory {
        id: "live-workout",
        name: "Live Workout Session",
        slug: "live-workout-session",
        description: "Real-time guided workout sessions",
        icon: "Dumbbell",
        available: true,
    },
    ServiceCategory {
        id: "yoga",
        name: "Yoga",
        slug: "yoga",
        description: "Mind-body wellness through yoga practice",
        icon: "Heart",
        available: true,
    },
    ServiceCategory {
        id: "hiit-liit",
        name: "HIIT & LIIT",
        slug: "hiit-and-liit",
        description: "High and Low Intensity Interval Training",
        icon: "Zap",
        available: true,
    },
    ServiceCategory {
        id: "senior-workout",
        name: "Senior Workout",
        slug: "senior-workout",
        description: "Gentle fitness programs for seniors",
        icon: "Users",
        available: true,
    },
];

/// Healthcare service specializations.
pub static HEALTHCARE_SPECIALTIES: [ServiceCategory; 6] = [
    ServiceCategory {
        id: "general-physician",
        name: "General Physician",
        slug: "general-physician",
        description: "General medical consultation and care",
        icon: "Stethoscope",
        available: true,
    },
    ServiceCategory {
        id: "gynaecologist",
        name: "Gynaecologist",
        slug: "gynaecologist",
        description: "Women's health and reproductive care",
        icon: "User",
        available: true,
    },
    ServiceCategory {
        id: "endocrinologist",
        name: "Endocrinologist",
        slug: "endocrinologist",
        description: "Hormone and metabolic disorders",
        icon: "Activity",
        available: true,
    },
    ServiceCategory {
        id: "mental-health",
        name: "Mental Health",
        slug: "mental-health",
        description: "Psychological wellness and counseling",
        icon: "Brain",
        available: true,
    },
    ServiceCategory {
        id: "general-surgeon",
        name: "General Surgeon",
        slug: "general-surgeon",
        description: "Surgical procedures and consultations",
        icon: "Scissors",
        available: true,
    },
    ServiceCategory {
        id: "dermatologist",
        name: "Dermatologist",
        slug: "dermatologist",
        description: "Skin health and treatment",
        icon: "Sparkles",
        available: true,
    },
];

/// Nutrition service plans. All currently unavailable (future feature).
pub static NUTRITION_PLANS: [ServiceCategory; 12] = [
    ServiceCategory {
        id: "weight-loss",
        name: "Weight Loss",
        slug: "weight-loss",
        description: "Personalized nutrition for weight reduction",
        icon: "TrendingDown",
        available: false,
    },
    ServiceCategory {
        id: "weight-gain",
        name: "Weight Gain",
        slug: "weight-gain",
        description: "Healthy weight gain nutrition plans",
        icon: "TrendingUp",
        available: false,
    },
    ServiceCategory {
        id: "diabetes",
        name: "Diabetes Management",
        slug: "diabetes",
        description: "Diabetic-friendly meal planning",
        icon: "Activity",
        available: false,
    },
    ServiceCategory {
        id: "thyroid",
        name: "Thyroid Care",
        slug: "thyroid",
        description: "Nutrition for thyroid health",
        icon: "Circle",
        available: false,
    },
    ServiceCategory {
        id: "pcos",
        name: "PCOS",
        slug: "pcos",
        description: "PCOS-specific dietary guidance",
        icon: "Users",
        available: false,
    },
    ServiceCategory {
        id: "heart-health",
        name: "Heart Health",
        slug: "heart-health",
        description: "Cardiovascular wellness nutrition",
        icon: "Heart",
        available: false,
    },
    ServiceCategory {
        id: "sports-nutrition",
        name: "Sports Nutrition",
        slug: "sports-nutrition",
        description: "Performance-focused meal plans",
        icon: "Trophy",
        available: false,
    },
    ServiceCategory {
        id: "prenatal",
        name: "Prenatal Nutrition",
        slug: "prenatal",
        description: "Pregnancy nutrition guidance",
        icon: "Baby",
        available: false,
    },
    ServiceCategory {
        id: "postnatal",
        name: "Postnatal Nutrition",
        slug: "postnatal",
        description: "Postpartum recovery nutrition",
        icon: "Smile",
        available: false,
    },
    ServiceCategory {
        id: "gut-health",
        name: "Gut Health",
        slug: "gut-health",
        description: "Digestive wellness nutrition",
        icon: "Package",
        available: false,
    },
    ServiceCategory {
        id: "vegan",
        name: "Vegan Nutrition",
        slug: "vegan",
        description: "Plant-based meal planning",
        icon: "Leaf",
        available: false,
    },
    ServiceCategory {
        id: "senior-nutrition",
        name: "Senior Nutrition",
        slug: "senior-nutrition",
        description: "Age-appropriate dietary plans",
        icon: "Users",
        available: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_and_ids_are_unique() {
        let all: Vec<&ServiceCategory> = TRAINING_CATEGORIES
            .iter()
            .chain(&HEALTHCARE_SPECIALTIES)
            .chain(&NUTRITION_PLANS)
            .collect();

        let mut ids: Vec<_> = all.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all.len());

        let mut slugs: Vec<_> = all.iter().map(|c| c.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), all.len());
    }

    #[test]
    fn nutrition_plans_are_gated_off() {
        assert!(NUTRITION_PLANS.iter().all(|plan| !plan.available));
    }

    #[test]
    fn live_offerings_are_available() {
        assert!(TRAINING_CATEGORIES.iter().all(|c| c.available));
        assert!(HEALTHCARE_SPECIALTIES.iter().all(|c| c.available));
    }
}
