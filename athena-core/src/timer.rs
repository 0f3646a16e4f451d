//! Periodic session timer.
//!
//! The ticker only produces ticks; the owner applies them to its session
//! between other work, so no state is shared across tasks.

use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Fixed-interval tick source with no catch-up.
pub struct SessionTicker {
    interval: Interval,
}

impl SessionTicker {
    /// Create a ticker whose first tick fires one `period` from now.
    ///
    /// Periods shorter than a millisecond are raised to one millisecond.
    pub fn new(period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        let mut interval = interval_at(Instant::now() + period, period);
        // missed ticks (e.g. process suspended) are dropped, not replayed
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }

    /// Create a ticker from a period in seconds (minimum one second).
    pub fn from_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs.max(1)))
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    /// Wait for the next tick.
    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::StudySession;
    use chrono::Utc;

    #[tokio::test(start_paused = true)]
    async fn ticks_advance_active_session() {
        let mut ticker = SessionTicker::from_secs(60);
        let mut session = StudySession::default();
        session.start(Utc::now(), 84);

        for _ in 0..3 {
            ticker.tick().await;
            session.tick();
        }
        assert_eq!(session.duration_minutes, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_a_full_period() {
        let mut ticker = SessionTicker::from_secs(60);
        let start = Instant::now();
        ticker.tick().await;
        assert!(start.elapsed() >= Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn missed_ticks_are_not_replayed() {
        let mut ticker = SessionTicker::from_secs(60);
        tokio::time::advance(Duration::from_secs(60 * 5 + 1)).await;

        ticker.tick().await;
        let before = Instant::now();
        ticker.tick().await;
        // the next tick is scheduled on the period grid, not immediately
        assert!(before.elapsed() > Duration::ZERO);
    }

    #[test]
    fn zero_period_is_clamped() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        rt.block_on(async {
            let ticker = SessionTicker::from_secs(0);
            assert_eq!(ticker.period(), Duration::from_secs(1));

            let ticker = SessionTicker::new(Duration::ZERO);
            assert_eq!(ticker.period(), MIN_PERIOD);
        });
    }
}
