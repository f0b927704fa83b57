//! Recommendation service - BMI and diet computations for the API

use crate::error::ApiError;
use smart_fitness_shared::diet::{Gender, Goal, Preference};
use smart_fitness_shared::health_metrics::{compute_bmi, healthy_weight_range_kg};
use smart_fitness_shared::types::{
    AssessmentRequest, AssessmentResponse, BmiRequest, BmiResponse, DietRequest, DietResponse,
};
use tracing::debug;
use validator::Validate;

/// Recommendation service wrapping the pure core
pub struct RecommendationService;

impl RecommendationService {
    /// Validate and compute BMI
    pub fn bmi(req: &BmiRequest) -> Result<BmiResponse, ApiError> {
        req.validate()?;

        let result = compute_bmi(req.height_cm, req.weight_kg)?;
        metrics::counter!("bmi_calculations_total", "category" => result.category.as_str())
            .increment(1);

        debug!(
            height_cm = req.height_cm,
            weight_kg = req.weight_kg,
            bmi = result.value,
            category = %result.category,
            "Computed BMI"
        );

        Ok(BmiResponse::new(result, healthy_weight_range_kg(req.height_cm)))
    }

    /// Validate and compute a diet recommendation
    ///
    /// Unrecognized goal, preference or gender values are accepted; the core
    /// falls back silently and the fallback is only logged.
    pub fn diet(req: &DietRequest) -> Result<DietResponse, ApiError> {
        req.validate()?;

        let profile = req.to_profile();
        Self::log_fallbacks(&profile.gender, &profile.goal, &profile.preference);

        let foods = profile.recommend();
        metrics::counter!("diet_recommendations_total").increment(1);

        debug!(
            age = profile.age,
            goal = %profile.goal,
            preference = %profile.preference,
            allergies = profile.allergies.len(),
            items = foods.len(),
            "Computed diet recommendation"
        );

        Ok(DietResponse {
            age_bracket: profile.age_bracket().to_string(),
            foods,
        })
    }

    /// Compute BMI and diet for one form submission
    pub fn assess(req: &AssessmentRequest) -> Result<AssessmentResponse, ApiError> {
        req.validate()?;

        Ok(AssessmentResponse {
            bmi: Self::bmi(&req.metrics)?,
            diet: Self::diet(&req.profile)?,
        })
    }

    fn log_fallbacks(gender: &str, goal: &str, preference: &str) {
        if goal.parse::<Goal>().is_err() || preference.parse::<Preference>().is_err() {
            debug!(goal, preference, "Unrecognized goal or preference, using maintenance/default");
        }
        if gender.parse::<Gender>().is_err() {
            debug!(gender, "Unrecognized gender, no gender focus added");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn diet_request(goal: &str, preference: Option<&str>, allergies: Option<&str>) -> DietRequest {
        DietRequest {
            age: 25,
            gender: "male".to_string(),
            goal: goal.to_string(),
            preference: preference.map(str::to_string),
            allergies: allergies.map(str::to_string),
        }
    }

    #[rstest]
    #[case(170.0, 70.0, 24.22, "Normal")]
    #[case(150.0, 45.0, 20.0, "Normal")]
    #[case(180.0, 100.0, 30.86, "Obese")]
    #[case(160.0, 40.0, 15.62, "Underweight")]
    fn test_bmi_reference_cases(
        #[case] height_cm: f64,
        #[case] weight_kg: f64,
        #[case] bmi: f64,
        #[case] category: &str,
    ) {
        let response = RecommendationService::bmi(&BmiRequest {
            height_cm,
            weight_kg,
        })
        .unwrap();
        assert_eq!(response.bmi, bmi);
        assert_eq!(response.category, category);
    }

    #[test]
    fn test_bmi_reports_healthy_range() {
        let response = RecommendationService::bmi(&BmiRequest {
            height_cm: 170.0,
            weight_kg: 70.0,
        })
        .unwrap();
        let (min, max) = response.healthy_weight_range_kg;
        assert!(min < 70.0 && 70.0 < max);
    }

    #[test]
    fn test_bmi_out_of_range_is_validation_error() {
        let err = RecommendationService::bmi(&BmiRequest {
            height_cm: 0.0,
            weight_kg: 70.0,
        })
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_diet_splits_allergy_field() {
        let response = RecommendationService::diet(&diet_request(
            "weight_loss",
            Some("default"),
            Some("dairy, "),
        ))
        .unwrap();
        assert_eq!(response.age_bracket, "adult");
        assert!(!response.foods.contains(&"Low-fat dairy".to_string()));
    }

    #[test]
    fn test_diet_unknown_goal_is_not_an_error() {
        let response =
            RecommendationService::diet(&diet_request("bulking", None, None)).unwrap();
        assert!(response.foods.contains(&"Lean meat".to_string()));
    }

    #[test]
    fn test_assess_combines_results() {
        let req = AssessmentRequest {
            metrics: BmiRequest {
                height_cm: 180.0,
                weight_kg: 100.0,
            },
            profile: diet_request("weight_loss", Some("keto"), None),
        };
        let response = RecommendationService::assess(&req).unwrap();
        assert_eq!(response.bmi.category, "Obese");
        assert!(response.diet.foods.contains(&"Avocados".to_string()));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: every in-range request is accepted and yields a sorted list
        #[test]
        fn prop_valid_diet_requests_succeed(
            age in 5u32..=100,
            goal in prop_oneof![Just("weight_loss"), Just("weight_gain"), Just("maintenance")],
            preference in prop_oneof![Just("default"), Just("vegan"), Just("keto")]
        ) {
            let mut req = diet_request(goal, Some(preference), None);
            req.age = age;
            let response = RecommendationService::diet(&req).unwrap();
            prop_assert!(!response.foods.is_empty());
            prop_assert!(response.foods.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
