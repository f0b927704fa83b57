//! Business logic services

pub mod launcher;
pub mod recommendation;

pub use launcher::ProcessLauncher;
pub use recommendation::RecommendationService;
