//! Smart Fitness Assistant WASM Module
//!
//! This crate provides WebAssembly bindings so a browser form can compute
//! BMI and diet recommendations without a round trip to the backend.
//! Results are returned as JSON strings.

use smart_fitness_shared::validation::parse_allergies;
use wasm_bindgen::prelude::*;

/// Calculate BMI from height (cm) and weight (kg)
///
/// Returns `{"value": .., "category": ..}`; a zero height is an error.
#[wasm_bindgen]
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Result<String, JsError> {
    let result = smart_fitness_shared::compute_bmi(height_cm, weight_kg)?;
    Ok(serde_json::to_string(&result)?)
}

/// Recommend foods for a profile
///
/// `allergies` is the comma-separated free-text field from the form.
#[wasm_bindgen]
pub fn recommend_diet(
    age: u32,
    gender: &str,
    goal: &str,
    preference: &str,
    allergies: &str,
) -> Result<String, JsError> {
    let allergies = parse_allergies(allergies);
    let foods = smart_fitness_shared::recommend_diet(age, gender, goal, preference, allergies.as_slice());
    Ok(serde_json::to_string(&foods)?)
}

/// Check form inputs; returns an empty string when valid, otherwise a
/// user-facing message for the first invalid field
#[wasm_bindgen]
pub fn validate_metrics(height_cm: f64, weight_kg: f64, age: u32) -> String {
    match smart_fitness_shared::validation::validate_metrics(height_cm, weight_kg, age) {
        Ok(()) => String::new(),
        Err(e) => e.user_message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        let json = compute_bmi(170.0, 70.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["value"], 24.22);
        assert_eq!(value["category"], "Normal");
    }

    #[test]
    fn test_recommend_diet() {
        let json = recommend_diet(25, "male", "weight_loss", "default", " dairy , ").unwrap();
        let foods: Vec<String> = serde_json::from_str(&json).unwrap();
        assert!(!foods.contains(&"Low-fat dairy".to_string()));
        assert!(foods.contains(&"Omega-3".to_string()));
    }

    #[test]
    fn test_validate_metrics() {
        assert_eq!(validate_metrics(170.0, 70.0, 25), "");
        assert_eq!(
            validate_metrics(40.0, 70.0, 25),
            "Height: Height must be at least 50 cm"
        );
    }
}
