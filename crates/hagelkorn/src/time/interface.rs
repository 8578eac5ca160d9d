use core::time::Duration;

/// Default epoch: Monday, January 1, 2018 00:00:00 UTC
pub const DEFAULT_EPOCH: Duration = Duration::from_secs(1_514_764_800);

/// A trait for time sources that return the current instant.
///
/// This abstraction allows you to plug in the real system clock or a
/// mocked time source in tests. Instants are durations since the Unix
/// epoch, already normalized to a fixed reference frame; the core only
/// ever compares and subtracts them.
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use hagelkorn::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn unix_now(&self) -> Duration {
///         Duration::from_secs(1234)
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.unix_now(), Duration::from_secs(1234));
/// ```
pub trait TimeSource {
    /// Returns the current instant as a duration since the Unix epoch.
    fn unix_now(&self) -> Duration;
}
