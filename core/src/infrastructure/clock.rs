use chrono::{DateTime, Utc};

use crate::domain::inventory::ports::Clock;

/// Reads the system clock. The only place the current time enters the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
