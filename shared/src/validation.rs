//! Input validation functions
//!
//! Range checks applied by presentation layers before calling the core.
//! Request types in [`crate::types`] carry the same limits through the
//! `validator` derive macros.

/// Height limits in centimeters
pub const MIN_HEIGHT_CM: f64 = 50.0;
pub const MAX_HEIGHT_CM: f64 = 250.0;

/// Weight limits in kilograms
pub const MIN_WEIGHT_KG: f64 = 20.0;
pub const MAX_WEIGHT_KG: f64 = 250.0;

/// Age limits in years
pub const MIN_AGE: u32 = 5;
pub const MAX_AGE: u32 = 100;

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < MIN_HEIGHT_CM {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > MAX_HEIGHT_CM {
        return Err("Height must be at most 250 cm".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < MIN_WEIGHT_KG {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > MAX_WEIGHT_KG {
        return Err("Weight must be at most 250 kg".to_string());
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age(age: u32) -> Result<(), String> {
    if age < MIN_AGE {
        return Err("Age must be at least 5 years".to_string());
    }
    if age > MAX_AGE {
        return Err("Age must be at most 100 years".to_string());
    }
    Ok(())
}

/// Split a comma-separated allergy field into trimmed, non-empty entries
pub fn parse_allergies(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "height" | "height_cm" => "Height",
        "weight" | "weight_kg" => "Weight",
        "age" => "Age",
        "gender" => "Gender",
        "goal" => "Fitness Goal",
        "preference" => "Dietary Preference",
        "allergies" => "Allergies",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

/// Validate all form inputs, reporting the first failing field
pub fn validate_metrics(height_cm: f64, weight_kg: f64, age: u32) -> Result<(), ValidationError> {
    validate_height_cm(height_cm).map_err(|msg| ValidationError::new("height_cm", &msg))?;
    validate_weight_kg(weight_kg).map_err(|msg| ValidationError::new("weight_kg", &msg))?;
    validate_age(age).map_err(|msg| ValidationError::new("age", &msg))?;
    Ok(())
}
