//! Health metrics calculations module
//!
//! Computes body-mass index (BMI) and its qualitative category from
//! height and weight.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Caller Validates**: Range checks live in [`crate::validation`];
//!    only a zero height is rejected here
//! 3. **Type Safety**: Categories are an enum, never free text

use crate::errors::CalculationError;
use serde::{Deserialize, Serialize};

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get the BMI range for this category (lower bound inclusive)
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }

    /// Category name as shown to the user
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Below the healthy weight range for your height",
            BmiCategory::Normal => "Within the healthy weight range for your height",
            BmiCategory::Overweight => "Above the healthy weight range for your height",
            BmiCategory::Obese => "Well above the healthy weight range for your height",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// BMI calculation result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI value rounded to 2 decimal places
    pub value: f64,
    /// BMI category
    pub category: BmiCategory,
}

/// Round to 2 decimal places from the exact binary value.
///
/// Scaling by 100 first can land on an exact .5 (e.g. 40 kg at 160 cm gives
/// 15.624999999999996, which scales to 1562.5), so the rounding goes through
/// the exact decimal expansion instead.
fn round_2dp(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Classify BMI into category
///
/// Thresholds are half-open: 18.5 is Normal, 25 is Overweight, 30 is Obese.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Calculate BMI and its category
///
/// Formula: BMI = weight(kg) / height(m)², rounded to 2 decimal places.
/// The category is derived from the rounded value.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Result<BmiResult, CalculationError> {
    if height_cm == 0.0 {
        return Err(CalculationError::InvalidInput(
            "height_cm must be non-zero".to_string(),
        ));
    }

    let height_m = height_cm / 100.0;
    let value = round_2dp(weight_kg / (height_m * height_m));

    Ok(BmiResult {
        value,
        category: classify_bmi(value),
    })
}

/// Calculate healthy weight range for a given height
///
/// Based on BMI 18.5-25 (normal range)
pub fn healthy_weight_range_kg(height_cm: f64) -> (f64, f64) {
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    let min_weight = 18.5 * height_m_sq;
    let max_weight = 25.0 * height_m_sq;
    (min_weight, max_weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(170.0, 70.0, 24.22, BmiCategory::Normal)]
    #[case(150.0, 45.0, 20.0, BmiCategory::Normal)]
    #[case(180.0, 100.0, 30.86, BmiCategory::Obese)]
    #[case(160.0, 40.0, 15.62, BmiCategory::Underweight)]
    fn test_reference_cases(
        #[case] height_cm: f64,
        #[case] weight_kg: f64,
        #[case] expected_value: f64,
        #[case] expected_category: BmiCategory,
    ) {
        let result = compute_bmi(height_cm, weight_kg).unwrap();
        assert_eq!(result.value, expected_value);
        assert_eq!(result.category, expected_category);
    }

    #[test]
    fn test_zero_height_is_invalid() {
        let err = compute_bmi(0.0, 70.0).unwrap_err();
        assert!(matches!(err, CalculationError::InvalidInput(_)));
    }

    #[test]
    fn test_implausible_inputs_still_compute() {
        // Range enforcement belongs to the caller
        let result = compute_bmi(30.0, 400.0).unwrap();
        assert_eq!(result.category, BmiCategory::Obese);
    }

    #[rstest]
    #[case(0.0, BmiCategory::Underweight)]
    #[case(18.49, BmiCategory::Underweight)]
    #[case(18.5, BmiCategory::Normal)]
    #[case(24.99, BmiCategory::Normal)]
    #[case(25.0, BmiCategory::Overweight)]
    #[case(29.99, BmiCategory::Overweight)]
    #[case(30.0, BmiCategory::Obese)]
    #[case(55.0, BmiCategory::Obese)]
    fn test_category_boundaries(#[case] bmi: f64, #[case] expected: BmiCategory) {
        assert_eq!(classify_bmi(bmi), expected);
    }

    #[test]
    fn test_category_ranges_are_contiguous() {
        let ordered = [
            BmiCategory::Underweight,
            BmiCategory::Normal,
            BmiCategory::Overweight,
            BmiCategory::Obese,
        ];
        for pair in ordered.windows(2) {
            assert_eq!(pair[0].range().1, pair[1].range().0);
        }
    }

    #[test]
    fn test_category_display() {
        assert_eq!(BmiCategory::Normal.to_string(), "Normal");
        assert_eq!(
            serde_json::to_string(&BmiCategory::Overweight).unwrap(),
            "\"Overweight\""
        );
    }

    #[test]
    fn test_healthy_weight_range() {
        // For 175cm, healthy range should be ~56.7-76.6 kg
        let (min, max) = healthy_weight_range_kg(175.0);
        assert!((min - 56.7).abs() < 0.5);
        assert!((max - 76.6).abs() < 0.5);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: rounded value has at most 2 decimal places
        #[test]
        fn prop_value_has_two_decimals(height in 50.0f64..250.0, weight in 20.0f64..250.0) {
            let result = compute_bmi(height, weight).unwrap();
            let scaled = result.value * 100.0;
            prop_assert!((scaled - scaled.round()).abs() < 1e-6);
        }

        /// Property: category always agrees with the rounded value
        #[test]
        fn prop_category_matches_value(height in 50.0f64..250.0, weight in 20.0f64..250.0) {
            let result = compute_bmi(height, weight).unwrap();
            let (low, high) = result.category.range();
            prop_assert!(result.value >= low && result.value < high);
        }

        /// Property: Heavier weight = higher or equal BMI (same height)
        #[test]
        fn prop_bmi_increases_with_weight(
            weight1 in 50.0f64..100.0,
            weight2 in 100.0f64..150.0,
            height in 150.0f64..200.0
        ) {
            let bmi1 = compute_bmi(height, weight1).unwrap();
            let bmi2 = compute_bmi(height, weight2).unwrap();
            prop_assert!(bmi2.value >= bmi1.value);
        }

        /// Property: Healthy weight range contains weights that produce normal BMI
        #[test]
        fn prop_healthy_range_produces_normal_bmi(height in 150.0f64..200.0) {
            let (min, max) = healthy_weight_range_kg(height);
            let mid_weight = (min + max) / 2.0;
            let bmi = compute_bmi(height, mid_weight).unwrap();
            prop_assert_eq!(bmi.category, BmiCategory::Normal);
        }
    }
}
