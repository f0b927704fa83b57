//! Process-based workout counter launcher

use crate::config::WorkoutConfig;
use smart_fitness_shared::{LaunchOutcome, WorkoutKind, WorkoutLauncher};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{info, warn};

/// Starts counter scripts as detached child processes
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    script_dir: PathBuf,
    interpreter: String,
}

impl ProcessLauncher {
    pub fn new(script_dir: impl Into<PathBuf>, interpreter: impl Into<String>) -> Self {
        Self {
            script_dir: script_dir.into(),
            interpreter: interpreter.into(),
        }
    }

    pub fn from_config(config: &WorkoutConfig) -> Self {
        Self::new(config.script_dir(), config.interpreter.clone())
    }

    /// Full path of the script for a counter
    pub fn script_path(&self, kind: WorkoutKind) -> PathBuf {
        self.script_dir.join(kind.script_name())
    }
}

impl WorkoutLauncher for ProcessLauncher {
    fn launch(&self, kind: WorkoutKind) -> LaunchOutcome {
        let script_path = self.script_path(kind);

        if !script_path.is_file() {
            warn!(kind = %kind, path = %script_path.display(), "Workout script not found");
            return LaunchOutcome::NotFound {
                script: kind.script_name().to_string(),
            };
        }

        let spawned = Command::new(&self.interpreter)
            .arg(&script_path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                let pid = child.id();
                info!(kind = %kind, pid, "Workout counter launched");

                // Reap the child when it exits so it does not linger as a zombie
                std::thread::spawn(move || {
                    let _ = child.wait();
                });

                LaunchOutcome::Launched { pid }
            }
            Err(e) => {
                warn!(kind = %kind, error = %e, "Failed to spawn workout counter");
                LaunchOutcome::SpawnError {
                    message: e.to_string(),
                }
            }
        }
    }
}
