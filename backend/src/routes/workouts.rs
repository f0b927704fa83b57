//! Workout counter API routes

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use smart_fitness_shared::types::{LaunchResponse, WorkoutInfo};
use smart_fitness_shared::{LaunchOutcome, WorkoutKind};

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/workouts", get(list_workouts))
        .route("/workouts/:kind/launch", post(launch_workout))
}

/// GET /api/v1/workouts - List available counters
async fn list_workouts() -> Json<Vec<WorkoutInfo>> {
    Json(WorkoutKind::ALL.into_iter().map(WorkoutInfo::from).collect())
}

/// POST /api/v1/workouts/:kind/launch - Start a counter in its own process
async fn launch_workout(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> ApiResult<Json<LaunchResponse>> {
    let kind: WorkoutKind = kind.parse().map_err(ApiError::BadRequest)?;

    let launcher = state.launcher();
    let outcome = tokio::task::spawn_blocking(move || launcher.launch(kind))
        .await
        .map_err(|e| ApiError::Internal(e.into()))?;

    metrics::counter!(
        "workout_launches_total",
        "kind" => kind.slug(),
        "outcome" => outcome.as_str()
    )
    .increment(1);

    match outcome {
        LaunchOutcome::Launched { pid } => Ok(Json(LaunchResponse {
            kind,
            pid,
            message: format!("{} launched in a separate window.", kind.label()),
        })),
        LaunchOutcome::NotFound { script } => Err(ApiError::NotFound(format!(
            "Script file not found: {}",
            script
        ))),
        LaunchOutcome::SpawnError { message } => Err(ApiError::LaunchFailed(format!(
            "Failed to launch {}: {}",
            kind.label(),
            message
        ))),
    }
}
