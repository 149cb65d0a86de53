use std::time::Duration;

/// Repeating interval timer driven by frame time.
///
/// The ticker knows nothing about the grid: the owner feeds it elapsed
/// time and performs one step whenever `advance` reports a due tick.
#[derive(Clone, Debug)]
pub struct Ticker {
    interval: Duration,
    accumulated: Duration,
    active: bool,
}

impl Ticker {
    /// Create a stopped ticker firing every `interval`
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
            active: false,
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Start firing; the first tick comes one full interval from now
    pub fn start(&mut self) {
        self.active = true;
        self.accumulated = Duration::ZERO;
    }

    /// Cancel the schedule and drop any partially accumulated time
    pub fn stop(&mut self) {
        self.active = false;
        self.accumulated = Duration::ZERO;
    }

    /// Feed elapsed time. Returns true when a tick is due.
    ///
    /// Fires at most once per call, so a long frame never triggers a burst
    /// of catch-up steps.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.active {
            return false;
        }

        self.accumulated += elapsed;
        if self.accumulated >= self.interval {
            self.accumulated = Duration::ZERO;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(300);

    #[test]
    fn test_stopped_ticker_never_fires() {
        let mut ticker = Ticker::new(INTERVAL);
        assert!(!ticker.is_active());
        assert!(!ticker.advance(Duration::from_secs(10)));
    }

    #[test]
    fn test_fires_after_interval() {
        let mut ticker = Ticker::new(INTERVAL);
        ticker.start();
        assert!(!ticker.advance(Duration::from_millis(100)));
        assert!(!ticker.advance(Duration::from_millis(150)));
        assert!(ticker.advance(Duration::from_millis(50)));
        assert!(!ticker.advance(Duration::from_millis(10)));
    }

    #[test]
    fn test_long_frame_fires_once() {
        let mut ticker = Ticker::new(INTERVAL);
        ticker.start();
        assert!(ticker.advance(Duration::from_secs(2)));
        assert!(!ticker.advance(Duration::from_millis(1)));
    }

    #[test]
    fn test_stop_discards_progress() {
        let mut ticker = Ticker::new(INTERVAL);
        ticker.start();
        assert!(!ticker.advance(Duration::from_millis(290)));
        ticker.stop();
        assert!(!ticker.advance(Duration::from_millis(20)));

        ticker.start();
        assert!(!ticker.advance(Duration::from_millis(20)));
        assert_eq!(ticker.interval(), INTERVAL);
    }
}
