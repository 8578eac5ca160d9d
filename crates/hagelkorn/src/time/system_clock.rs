use crate::TimeSource;
use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

/// A [`TimeSource`] backed by the system wall clock.
///
/// Zero-sized and stateless: every call reads `SystemTime::now()`, so a
/// single value may be freely shared or copied across threads.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    /// Returns the wall-clock time as a duration since the Unix epoch.
    ///
    /// # Panics
    ///
    /// Panics if the system clock reports a time before the Unix epoch.
    fn unix_now(&self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("System clock before UNIX_EPOCH")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_EPOCH;

    #[test]
    fn system_clock_is_past_the_default_epoch() {
        assert!(SystemClock.unix_now() > DEFAULT_EPOCH);
    }
}
