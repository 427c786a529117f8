// tests/support/mocks/time.rs
use board_core::application::ports::time::Clock;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use std::sync::Mutex;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

/// Deterministic timestamp shared by the test suites.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Always returns the same instant; exercises the strict-monotonicity
/// guarantee on update timestamps.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Advances by a fixed step on every call, so consecutive operations get
/// strictly increasing wall-clock readings.
pub struct SteppingClock {
    start: DateTime<Utc>,
    step: Duration,
    ticks: Mutex<i32>,
}

impl SteppingClock {
    pub fn starting_at(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            start,
            step,
            ticks: Mutex::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut ticks = self.ticks.lock().unwrap();
        let now = self.start + self.step * *ticks;
        *ticks += 1;
        now
    }
}
