//! Common test utilities for integration tests
//!
//! This module provides a router wired to a scripted launcher so the API can
//! be exercised without spawning real processes.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use smart_fitness_backend::{config::AppConfig, routes, state::AppState};
use smart_fitness_shared::{LaunchOutcome, WorkoutKind, WorkoutLauncher};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Launcher returning a fixed outcome and recording every request
pub struct ScriptedLauncher {
    outcome: LaunchOutcome,
    pub launched: Mutex<Vec<WorkoutKind>>,
}

impl ScriptedLauncher {
    pub fn new(outcome: LaunchOutcome) -> Self {
        Self {
            outcome,
            launched: Mutex::new(Vec::new()),
        }
    }
}

impl WorkoutLauncher for ScriptedLauncher {
    fn launch(&self, kind: WorkoutKind) -> LaunchOutcome {
        self.launched.lock().unwrap().push(kind);
        self.outcome.clone()
    }
}

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub launcher: Arc<ScriptedLauncher>,
}

impl TestApp {
    /// Create a test application whose launcher always succeeds
    pub fn new() -> Self {
        Self::with_outcome(LaunchOutcome::Launched { pid: 4242 })
    }

    /// Create a test application whose launcher returns `outcome`
    pub fn with_outcome(outcome: LaunchOutcome) -> Self {
        Self::with_config(test_config(), outcome)
    }

    pub fn with_config(config: AppConfig, outcome: LaunchOutcome) -> Self {
        let launcher = Arc::new(ScriptedLauncher::new(outcome));
        let state = AppState::with_launcher(config, launcher.clone(), None);
        let app = routes::create_router(state);

        Self { app, launcher }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request and parse the JSON response
    pub async fn post_json(&self, path: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.post(path, &body.to_string()).await;
        let json = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.server.port = 0;
    config.workouts.script_dir = std::env::temp_dir().display().to_string();
    config
}
