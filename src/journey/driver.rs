//! Async driver for deferred journey tasks

use super::machine::Journey;

/// Wait for and run every pending deferred task until none are left.
///
/// Sleeps on tokio's timer until each deadline, so the journey must use a
/// clock that moves with tokio time (`TokioClock`, or `SystemClock` outside
/// paused tests). Returns the number of tasks that ran.
pub async fn settle(journey: &mut Journey) -> usize {
    let mut fired = 0;
    while let Some(deadline) = journey.next_deadline() {
        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        fired += journey.run_due();
    }
    if fired > 0 {
        tracing::debug!(fired, "Deferred tasks settled");
    }
    fired
}
