//! The fixed attack narrative.
//!
//! Nothing here touches a network. Every step is a hardcoded message
//! appended after a fixed pause.

use std::time::Duration;

/// Pause between consecutive scripted messages.
pub const STEP_INTERVAL: Duration = Duration::from_secs(1);

/// One (delay, message) pair of the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// How long to wait after the previous step before this one fires.
    pub delay: Duration,
    /// Text appended to the log.
    pub message: &'static str,
    /// The run flips to `Done` just before this step's message is appended.
    pub completes_run: bool,
}

impl Step {
    const fn after(delay: Duration, message: &'static str) -> Self {
        Self {
            delay,
            message,
            completes_run: false,
        }
    }

    const fn finish(message: &'static str) -> Self {
        Self {
            delay: Duration::ZERO,
            message,
            completes_run: true,
        }
    }
}

/// The script played by every run, in order.
pub const SCRIPT: [Step; 6] = [
    Step::after(Duration::ZERO, "Initializing attack simulation..."),
    Step::after(
        STEP_INTERVAL,
        "Scanning target for open ports (Nmap simulated)...",
    ),
    Step::after(
        STEP_INTERVAL,
        "Discovered open port 443 \u{2013} potential vulnerability detected.",
    ),
    Step::after(
        STEP_INTERVAL,
        "Launching exploit payload (simulated buffer overflow)...",
    ),
    Step::after(STEP_INTERVAL, "Obtained simulated remote shell."),
    Step::finish("Attack simulation completed."),
];

/// Total scripted wait for one run.
pub fn run_duration() -> Duration {
    SCRIPT.iter().map(|step| step.delay).sum()
}
