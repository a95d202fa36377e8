//! Core data types for the simulation.
//!
//! - `SimulationStatus` - idle / running / done
//! - `LogEntry` - one timestamped line in the log panel
//! - `Step` and `SCRIPT` - the fixed attack narrative

mod entry;
mod script;
mod status;

pub use entry::{LogEntry, TIMESTAMP_FORMAT};
pub use script::{run_duration, Step, SCRIPT, STEP_INTERVAL};
pub use status::SimulationStatus;
