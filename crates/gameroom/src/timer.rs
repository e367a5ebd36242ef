use rps_core::*;
use std::time::Duration;
use tokio::time::Instant;

/// Configuration for a round's countdown.
#[derive(Debug, Clone, Copy)]
pub struct RoundConfig {
    pub countdown: Tick,
    pub interval: Duration,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            countdown: COUNTDOWN,
            interval: TICK_INTERVAL,
        }
    }
}

/// Single-shot countdown deadline.
///
/// At most one deadline is live at a time. Each arming is tagged with the
/// epoch of the round it belongs to; the Room compares that tag with the
/// current round before applying a tick, so a tick armed for an abandoned
/// round can never touch the next one.
#[derive(Debug)]
pub struct Timer {
    interval: Duration,
    deadline: Option<Instant>,
    epoch: Epoch,
}

impl Timer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
            epoch: 0,
        }
    }
    /// Arm one tick for `epoch`, replacing any pending one.
    pub fn arm(&mut self, epoch: Epoch) {
        self.epoch = epoch;
        self.deadline = Some(Instant::now() + self.interval);
    }
    /// Cancel the pending tick, if any.
    pub fn clear(&mut self) {
        self.deadline = None;
    }
    /// Resolves when the armed deadline passes. Never resolves while cleared.
    pub async fn wait(&self) {
        match self.deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending().await,
        }
    }
    /// Consume the expired deadline, returning the epoch it was armed for.
    pub fn fire(&mut self) -> Option<Epoch> {
        self.deadline.take().map(|_| self.epoch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left(timer: &Timer) -> Option<Duration> {
        timer
            .deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    #[test]
    fn default_config() {
        let config = RoundConfig::default();
        assert_eq!(config.countdown, COUNTDOWN);
        assert_eq!(config.interval, TICK_INTERVAL);
    }
    #[tokio::test(start_paused = true)]
    async fn timer_starts_cleared() {
        let mut timer = Timer::new(TICK_INTERVAL);
        assert!(left(&timer).is_none());
        assert_eq!(timer.fire(), None);
    }
    #[tokio::test(start_paused = true)]
    async fn timer_sets_deadline() {
        let mut timer = Timer::new(Duration::from_millis(500));
        timer.arm(7);
        assert_eq!(left(&timer), Some(Duration::from_millis(500)));
        let early = tokio::time::timeout(Duration::from_millis(499), timer.wait()).await;
        assert!(early.is_err());
    }
    #[tokio::test(start_paused = true)]
    async fn timer_clears() {
        let mut timer = Timer::new(TICK_INTERVAL);
        timer.arm(1);
        timer.clear();
        assert!(left(&timer).is_none());
        assert_eq!(timer.fire(), None);
    }
    #[tokio::test(start_paused = true)]
    async fn timer_fires_once_with_its_epoch() {
        let mut timer = Timer::new(Duration::from_secs(1));
        timer.arm(3);
        timer.wait().await;
        assert_eq!(left(&timer), Some(Duration::ZERO));
        assert_eq!(timer.fire(), Some(3));
        assert_eq!(timer.fire(), None);
    }
    #[tokio::test(start_paused = true)]
    async fn cleared_timer_never_resolves() {
        let timer = Timer::new(Duration::from_secs(1));
        let waited = tokio::time::timeout(Duration::from_secs(60), timer.wait()).await;
        assert!(waited.is_err());
    }
    #[tokio::test(start_paused = true)]
    async fn rearming_replaces_deadline() {
        let mut timer = Timer::new(Duration::from_secs(1));
        timer.arm(1);
        tokio::time::advance(Duration::from_millis(600)).await;
        timer.arm(2);
        assert_eq!(left(&timer), Some(Duration::from_secs(1)));
        timer.wait().await;
        assert_eq!(timer.fire(), Some(2));
    }
}
