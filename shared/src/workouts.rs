//! Workout counter catalogue
//!
//! The repetition counters are external scripts launched as independent
//! processes. This module only names them and defines the launcher
//! capability; spawning lives with the presentation layer.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the fixed exercise counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    SitUp,
    PushUp,
    Squat,
    Lunge,
    BicepCurl,
}

impl WorkoutKind {
    /// All counters in display order
    pub const ALL: [WorkoutKind; 5] = [
        WorkoutKind::SitUp,
        WorkoutKind::PushUp,
        WorkoutKind::Squat,
        WorkoutKind::Lunge,
        WorkoutKind::BicepCurl,
    ];

    /// URL-safe identifier
    pub fn slug(&self) -> &'static str {
        match self {
            WorkoutKind::SitUp => "sit_up",
            WorkoutKind::PushUp => "push_up",
            WorkoutKind::Squat => "squat",
            WorkoutKind::Lunge => "lunge",
            WorkoutKind::BicepCurl => "bicep_curl",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::SitUp => "Sit-Up Counter",
            WorkoutKind::PushUp => "Push-Up Counter",
            WorkoutKind::Squat => "Squat Counter",
            WorkoutKind::Lunge => "Lunge Counter",
            WorkoutKind::BicepCurl => "Bicep Curl Counter",
        }
    }

    /// Script file name, resolved against the launcher's script directory
    pub fn script_name(&self) -> &'static str {
        match self {
            WorkoutKind::SitUp => "situps.py",
            WorkoutKind::PushUp => "pushup.py",
            WorkoutKind::Squat => "squat.py",
            WorkoutKind::Lunge => "lunges.py",
            WorkoutKind::BicepCurl => "bicepcurl.py",
        }
    }
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for WorkoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown workout '{}'. Must be one of: {}",
                    s,
                    WorkoutKind::ALL.map(|k| k.slug()).join(", ")
                )
            })
    }
}

/// Result of asking a launcher to start a counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LaunchOutcome {
    Launched { pid: u32 },
    NotFound { script: String },
    SpawnError { message: String },
}

impl LaunchOutcome {
    /// Short label used for logging and metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchOutcome::Launched { .. } => "launched",
            LaunchOutcome::NotFound { .. } => "not_found",
            LaunchOutcome::SpawnError { .. } => "spawn_error",
        }
    }
}

/// Capability for starting workout counters
///
/// Implementations must not block for longer than it takes to spawn the
/// process; the counter itself runs detached.
pub trait WorkoutLauncher: Send + Sync {
    fn launch(&self, kind: WorkoutKind) -> LaunchOutcome;
}
