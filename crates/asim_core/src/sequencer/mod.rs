//! Simulation sequencer.
//!
//! The sequencer is split in two:
//!
//! ```text
//! Simulation (async driver, shared handle)
//!     ├── SimulationMachine  status + step cursor + append-only log
//!     ├── Timer              sleeps between steps
//!     └── watch channel      change notifications for the renderer
//! ```
//!
//! # Example
//!
//! ```no_run
//! use asim_core::{Simulation, SimulationStatus};
//!
//! # async fn demo() {
//! let sim = Simulation::new();
//! sim.start().await;
//!
//! assert_eq!(sim.status(), SimulationStatus::Done);
//! for line in sim.log() {
//!     println!("{line}");
//! }
//! # }
//! ```

mod machine;
mod simulation;
mod timer;

pub use machine::{SimulationMachine, Snapshot};
pub use simulation::{Simulation, StartOutcome};
pub use timer::{Timer, TokioTimer};
