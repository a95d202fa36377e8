//! ASIM Core - Backend logic for the attack simulation demo
//!
//! This crate contains the sequencer that plays the scripted (and entirely
//! fake) attack narrative, with zero UI dependencies. Any rendering layer can
//! drive it through `start` and read it back through `status`/`log`.

pub mod config;
pub mod logging;
pub mod models;
pub mod sequencer;

pub use models::{LogEntry, SimulationStatus};
pub use sequencer::{Simulation, Snapshot, StartOutcome};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
