//! Simulation status.

use serde::{Deserialize, Serialize};

/// Where the simulation is in its lifecycle.
///
/// Transitions are `Idle -> Running -> Done`, and `Done -> Running` when a
/// new run is triggered. Nothing ever goes back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SimulationStatus {
    /// Nothing has run yet.
    #[default]
    Idle,
    /// A run is in flight; the trigger control is disabled.
    Running,
    /// The last run completed.
    Done,
}

impl SimulationStatus {
    /// Get display string for UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Done => "done",
        }
    }

    /// Label for the trigger control.
    pub fn trigger_label(&self) -> &'static str {
        match self {
            Self::Running => "Simulating...",
            Self::Idle | Self::Done => "Start Simulation",
        }
    }

    /// Whether a new run may be started from this status.
    pub fn can_start(&self) -> bool {
        !self.is_running()
    }

    /// Whether a run is in flight.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

impl std::fmt::Display for SimulationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
