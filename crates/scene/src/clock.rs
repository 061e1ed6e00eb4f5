use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source driving the animation.
pub trait Clock {
    /// Time since the loop started.
    fn elapsed(&self) -> Duration;

    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn instant_at(&self, elapsed: Duration) -> Instant {
        self.start + elapsed
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Clock that only moves when told to. Clones share the same time, and
/// `sleep` advances it.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }

    pub fn set(&self, elapsed: Duration) {
        self.now.set(elapsed);
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();

        handle.advance(Duration::from_millis(15));
        clock.sleep(Duration::from_millis(10));

        assert_eq!(clock.elapsed(), Duration::from_millis(25));
        assert_eq!(handle.elapsed(), Duration::from_millis(25));

        handle.set(Duration::ZERO);
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::start();
        let first = clock.elapsed();
        clock.sleep(Duration::from_millis(2));
        let second = clock.elapsed();

        assert!(second >= first + Duration::from_millis(2));
        assert!(clock.instant_at(second) >= clock.instant_at(first));
    }
}
