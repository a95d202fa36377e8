//! Async driver that plays the script on a timer.

use std::sync::Arc;

use chrono::Local;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::machine::{SimulationMachine, Snapshot};
use super::timer::{Timer, TokioTimer};
use crate::models::{LogEntry, SimulationStatus};

/// What happened to a `start` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The request started a run and the run played to the end.
    Completed,
    /// A run was already in flight; the request was ignored.
    AlreadyRunning,
}

/// Shared handle to one simulation session.
///
/// Clones share the same state, so the rendering layer can keep one handle
/// for reading while another drives `start`. State lives as long as the
/// last handle; nothing is persisted.
pub struct Simulation<T: Timer = TokioTimer> {
    machine: Arc<Mutex<SimulationMachine>>,
    timer: Arc<T>,
    notifier: Arc<watch::Sender<Snapshot>>,
}

impl<T: Timer> Clone for Simulation<T> {
    fn clone(&self) -> Self {
        Self {
            machine: Arc::clone(&self.machine),
            timer: Arc::clone(&self.timer),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl Simulation<TokioTimer> {
    /// Create a fresh idle session driven by tokio timers.
    pub fn new() -> Self {
        Self::with_timer(TokioTimer)
    }
}

impl Default for Simulation<TokioTimer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Timer> Simulation<T> {
    /// Create a fresh idle session driven by `timer`.
    pub fn with_timer(timer: T) -> Self {
        let (notifier, _) = watch::channel(Snapshot::default());
        Self {
            machine: Arc::new(Mutex::new(SimulationMachine::new())),
            timer: Arc::new(timer),
            notifier: Arc::new(notifier),
        }
    }

    /// Current status.
    pub fn status(&self) -> SimulationStatus {
        self.machine.lock().status()
    }

    /// Rendered log lines, oldest first.
    pub fn log(&self) -> Vec<String> {
        self.machine
            .lock()
            .entries()
            .iter()
            .map(LogEntry::render)
            .collect()
    }

    /// Structured log entries, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.machine.lock().entries().to_vec()
    }

    /// Status and log captured under one lock.
    pub fn snapshot(&self) -> Snapshot {
        self.machine.lock().snapshot()
    }

    /// Receive a fresh snapshot after every status change or append.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.notifier.subscribe()
    }

    /// Play the script once.
    ///
    /// Resolves when the run has finished. If a run is already in flight
    /// this returns `AlreadyRunning` immediately and writes nothing.
    ///
    /// The run itself is a spawned task: dropping this future stops the
    /// wait, not the script.
    pub async fn start(&self) -> StartOutcome {
        {
            let mut machine = self.machine.lock();
            if !machine.try_begin() {
                tracing::debug!("Start ignored: simulation already running");
                return StartOutcome::AlreadyRunning;
            }
            tracing::info!(run = machine.runs_started(), "Attack simulation started");
            self.publish(&machine);
        }

        let sim = self.clone();
        if let Err(e) = tokio::spawn(async move { sim.play().await }).await {
            tracing::warn!("Simulation run task failed: {}", e);
        }
        StartOutcome::Completed
    }

    /// Run `start` on the tokio runtime without waiting for it.
    ///
    /// The returned handle resolves to the same outcome `start` would.
    pub fn spawn_start(&self) -> JoinHandle<StartOutcome> {
        let sim = self.clone();
        tokio::spawn(async move { sim.start().await })
    }

    /// Wait until no run is in flight.
    pub async fn settled(&self) -> Snapshot {
        let mut rx = self.subscribe();
        let snapshot = match rx.wait_for(|snap| !snap.status.is_running()).await {
            Ok(snapshot) => snapshot.clone(),
            // The sender lives in `self`, so this only happens during teardown.
            Err(_) => self.snapshot(),
        };
        snapshot
    }

    /// Step through the script of the run `try_begin` just accepted.
    async fn play(&self) {
        loop {
            let delay = { self.machine.lock().next_delay() };
            let Some(delay) = delay else {
                break;
            };

            if !delay.is_zero() {
                self.timer.sleep(delay).await;
            }

            let finished = {
                let mut machine = self.machine.lock();
                let fired = machine.fire(Local::now());
                if let Some(step) = fired {
                    tracing::debug!(message = step.message, "Step fired");
                }
                self.publish(&machine);
                fired.map_or(true, |step| step.completes_run)
            };
            if finished {
                break;
            }
        }

        tracing::info!("Attack simulation completed");
    }

    fn publish(&self, machine: &SimulationMachine) {
        self.notifier.send_replace(machine.snapshot());
    }
}

impl<T: Timer> std::fmt::Debug for Simulation<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let machine = self.machine.lock();
        f.debug_struct("Simulation")
            .field("status", &machine.status())
            .field("entries", &machine.entries().len())
            .finish()
    }
}
