//! Timer abstraction used to pause between scripted steps.

use std::future::Future;
use std::time::Duration;

/// Something that can suspend the running script for a while.
///
/// Production code uses [`TokioTimer`]. Tests either run tokio with paused
/// time or plug in a timer that returns immediately.
pub trait Timer: Send + Sync + 'static {
    /// Complete after `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Timer backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn tokio_timer_waits_for_duration() {
        let start = tokio::time::Instant::now();
        TokioTimer.sleep(Duration::from_secs(1)).await;
        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }
}
