use crate::{Alphabet, DEFAULT_EPOCH, resolution};
use core::time::Duration;

/// Configuration for monotonic ID generation.
///
/// All fields are plain values with documented defaults; there is no
/// global mutable state and nothing to initialize process-wide. The
/// default configuration matches IDs minted by other implementations:
/// seconds resolution, the default 27-symbol alphabet, a 2018-01-01 UTC
/// start, and a 10-year overflow horizon.
///
/// # Example
///
/// ```
/// use hagelkorn::{MonotonicConfig, resolution};
///
/// let config = MonotonicConfig {
///     resolution: resolution::DAYS,
///     ..MonotonicConfig::default()
/// };
/// assert_eq!(config.overflow_years, 10.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonotonicConfig {
    /// Maximum duration in seconds for one increment of the ID.
    ///
    /// The solved interval length is at most this long; see
    /// [`resolution`] for named presets.
    pub resolution: f64,

    /// The sorted symbols used for the positional notation.
    pub alphabet: Alphabet,

    /// Beginning of the timeline, as a duration since the Unix epoch.
    pub start: Duration,

    /// Years after which the ID grows by one digit.
    pub overflow_years: f64,
}

impl Default for MonotonicConfig {
    fn default() -> Self {
        Self {
            resolution: resolution::SECONDS,
            alphabet: Alphabet::default(),
            start: DEFAULT_EPOCH,
            overflow_years: 10.0,
        }
    }
}
