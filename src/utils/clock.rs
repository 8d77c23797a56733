//! Injectable wall-clock seam, so the punch and sweep paths stay testable
//! without real time coupling.

use chrono::{DateTime, Utc};

pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Production clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant, for tests.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}
