//! Explicit state machine behind the simulation.
//!
//! The machine never sleeps. It only knows which step comes next and how
//! long the driver must wait before firing it, so every transition can be
//! exercised synchronously.

use std::time::Duration;

use chrono::{DateTime, Local};

use crate::models::{LogEntry, SimulationStatus, Step, SCRIPT};

/// Status and log captured together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Status at capture time.
    pub status: SimulationStatus,
    /// Every entry appended so far, oldest first.
    pub entries: Vec<LogEntry>,
}

impl Snapshot {
    /// Rendered `[HH:MM:SS] message` lines.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(LogEntry::render).collect()
    }
}

/// Status flag, step cursor and append-only log.
#[derive(Debug, Default)]
pub struct SimulationMachine {
    status: SimulationStatus,
    /// Index into `SCRIPT` of the next step to fire. Only meaningful while running.
    cursor: usize,
    log: Vec<LogEntry>,
    runs_started: u32,
}

impl SimulationMachine {
    /// Create a fresh machine: idle, empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status.
    pub fn status(&self) -> SimulationStatus {
        self.status
    }

    /// All entries appended so far.
    pub fn entries(&self) -> &[LogEntry] {
        &self.log
    }

    /// Number of runs accepted by `try_begin`.
    pub fn runs_started(&self) -> u32 {
        self.runs_started
    }

    /// Copy of status and log.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.status,
            entries: self.log.clone(),
        }
    }

    /// Enter `Running` and rewind the cursor.
    ///
    /// Returns `false` without touching anything if a run is already in
    /// flight. Starting from `Done` keeps the existing log; the new run
    /// appends after it.
    pub fn try_begin(&mut self) -> bool {
        if !self.status.can_start() {
            return false;
        }
        self.status = SimulationStatus::Running;
        self.cursor = 0;
        self.runs_started += 1;
        true
    }

    /// The step that fires next, if a run is in flight.
    pub fn next_step(&self) -> Option<&'static Step> {
        if !self.status.is_running() {
            return None;
        }
        SCRIPT.get(self.cursor)
    }

    /// How long to wait before the next `fire`, or `None` when no run is
    /// in flight.
    pub fn next_delay(&self) -> Option<Duration> {
        self.next_step().map(|step| step.delay)
    }

    /// Fire the step under the cursor and append its entry.
    ///
    /// Returns the step that fired. A driver stops after the step with
    /// `completes_run` set; once that step has fired, the cursor may
    /// already belong to the next run.
    ///
    /// `at` is clamped to the previous entry's timestamp so the log never
    /// goes backwards in time, even if the wall clock does.
    pub fn fire(&mut self, at: DateTime<Local>) -> Option<&'static Step> {
        let step = self.next_step()?;

        if step.completes_run {
            self.status = SimulationStatus::Done;
        }
        self.cursor += 1;

        let at = match self.log.last() {
            Some(prev) if prev.timestamp > at => prev.timestamp,
            _ => at,
        };
        self.log.push(LogEntry::new(at, step.message));
        Some(step)
    }
}
