//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! State is immutable after creation and every field is cheap to clone.

use crate::config::AppConfig;
use crate::services::ProcessLauncher;
use metrics_exporter_prometheus::PrometheusHandle;
use smart_fitness_shared::WorkoutLauncher;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Capability used to start workout counters
    pub launcher: Arc<dyn WorkoutLauncher>,
    /// Prometheus render handle, absent when the recorder is not installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create state with the process-based launcher from the config
    pub fn new(config: AppConfig, metrics: Option<PrometheusHandle>) -> Self {
        let launcher = ProcessLauncher::from_config(&config.workouts);
        Self::with_launcher(config, Arc::new(launcher), metrics)
    }

    /// Create state with an injected launcher
    pub fn with_launcher(
        config: AppConfig,
        launcher: Arc<dyn WorkoutLauncher>,
        metrics: Option<PrometheusHandle>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            launcher,
            metrics,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a clone of the launcher handle
    #[inline]
    pub fn launcher(&self) -> Arc<dyn WorkoutLauncher> {
        Arc::clone(&self.launcher)
    }
}
