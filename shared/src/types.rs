//! API request and response types

use crate::diet::DietProfile;
use crate::health_metrics::BmiResult;
use crate::validation::{
    parse_allergies, MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use crate::workouts::WorkoutKind;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

// ============================================================================
// BMI Types
// ============================================================================

/// BMI calculation request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BmiRequest {
    #[validate(range(
        min = MIN_HEIGHT_CM,
        max = MAX_HEIGHT_CM,
        message = "Height must be between 50 and 250 cm"
    ))]
    pub height_cm: f64,
    #[validate(range(
        min = MIN_WEIGHT_KG,
        max = MAX_WEIGHT_KG,
        message = "Weight must be between 20 and 250 kg"
    ))]
    pub weight_kg: f64,
}

/// BMI calculation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResponse {
    pub bmi: f64,
    pub category: String,
    pub description: String,
    pub healthy_weight_range_kg: (f64, f64),
}

impl BmiResponse {
    pub fn new(result: BmiResult, healthy_weight_range_kg: (f64, f64)) -> Self {
        Self {
            bmi: result.value,
            category: result.category.to_string(),
            description: result.category.description().to_string(),
            healthy_weight_range_kg,
        }
    }
}

// ============================================================================
// Diet Types
// ============================================================================

/// Diet recommendation request
///
/// `allergies` is the free-text, comma-separated field from the form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DietRequest {
    #[validate(range(min = MIN_AGE, max = MAX_AGE, message = "Age must be between 5 and 100"))]
    pub age: u32,
    pub gender: String,
    pub goal: String,
    #[serde(default)]
    pub preference: Option<String>,
    #[serde(default)]
    pub allergies: Option<String>,
}

impl DietRequest {
    /// Convert into a core profile, splitting the allergy field
    pub fn to_profile(&self) -> DietProfile {
        let mut profile = DietProfile::new(self.age, self.gender.clone(), self.goal.clone());
        if let Some(preference) = &self.preference {
            profile = profile.with_preference(preference.clone());
        }
        if let Some(allergies) = &self.allergies {
            profile = profile.with_allergies(parse_allergies(allergies));
        }
        profile
    }
}

/// Diet recommendation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietResponse {
    pub age_bracket: String,
    pub foods: Vec<String>,
}

/// Combined BMI and diet request (one form submission)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssessmentRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub metrics: BmiRequest,
    #[serde(flatten)]
    #[validate(nested)]
    pub profile: DietRequest,
}

/// Combined BMI and diet response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub bmi: BmiResponse,
    pub diet: DietResponse,
}

// ============================================================================
// Workout Types
// ============================================================================

/// Workout counter listing entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutInfo {
    pub kind: WorkoutKind,
    pub label: String,
    pub script: String,
}

impl From<WorkoutKind> for WorkoutInfo {
    fn from(kind: WorkoutKind) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            script: kind.script_name().to_string(),
        }
    }
}

/// Successful launch response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchResponse {
    pub kind: WorkoutKind,
    pub pid: u32,
    pub message: String,
}
