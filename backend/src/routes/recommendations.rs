//! BMI and diet recommendation API routes

use crate::error::{ApiError, ApiResult};
use crate::services::RecommendationService;
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use smart_fitness_shared::types::{
    AssessmentRequest, AssessmentResponse, BmiRequest, BmiResponse, DietRequest, DietResponse,
};

/// Create recommendation routes
pub fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route("/bmi", post(calculate_bmi))
        .route("/diet", post(recommend_diet))
        .route("/assessment", post(assess))
}

/// POST /api/v1/bmi - Compute BMI and category
async fn calculate_bmi(Json(req): Json<BmiRequest>) -> ApiResult<Json<BmiResponse>> {
    Ok(Json(RecommendationService::bmi(&req)?))
}

/// POST /api/v1/diet - Compute a diet recommendation
async fn recommend_diet(Json(req): Json<DietRequest>) -> ApiResult<Json<DietResponse>> {
    Ok(Json(RecommendationService::diet(&req)?))
}

/// POST /api/v1/assessment - BMI and diet in one submission
async fn assess(
    Json(req): Json<AssessmentRequest>,
) -> ApiResult<Json<AssessmentResponse>> {
    Ok(Json(RecommendationService::assess(&req)?))
}
