//! Smart Fitness Assistant Shared Library
//!
//! This crate contains the pure recommendation core (BMI and diet), the
//! workout counter catalogue, and the request/response types shared by the
//! backend and WASM modules.

pub mod diet;
pub mod errors;
pub mod health_metrics;
pub mod types;
pub mod validation;
pub mod workouts;

// Re-export commonly used items
pub use diet::{recommend_diet, AgeBracket, DietProfile, Gender, Goal, Preference};
pub use errors::*;
pub use health_metrics::*;
pub use workouts::{LaunchOutcome, WorkoutKind, WorkoutLauncher};
