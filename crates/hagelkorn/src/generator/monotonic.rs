#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Alphabet, Error, MonotonicConfig, Result, SECONDS_PER_YEAR, SolvedParams, SystemClock,
    TimeSource, encode_base_n, solve_parameters,
};
use core::time::Duration;

/// A reusable generator for short, time-ordered, human-readable IDs.
///
/// Solves the encoding parameters once at construction and reuses them on
/// every call, unlike the stateless [`monotonic_id`] which re-solves per
/// call. The cached parameters are immutable after construction, so a
/// single instance may be read concurrently from multiple threads as long
/// as the plugged [`TimeSource`] allows it.
///
/// IDs increase with time under a length-then-lexicographic comparison:
/// once the overflow horizon passes, IDs grow by one digit and keep
/// sorting after every shorter ID.
///
/// # Example
///
/// ```
/// use hagelkorn::{MonotonicConfig, MonotonicGenerator, resolution};
///
/// let generator = MonotonicGenerator::new(MonotonicConfig {
///     resolution: resolution::MILLISECONDS,
///     overflow_years: 100.0,
///     ..MonotonicConfig::default()
/// })?;
///
/// let id = generator.monotonic()?;
/// assert_eq!(id.len(), generator.digits());
/// # Ok::<(), hagelkorn::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct MonotonicGenerator<T = SystemClock> {
    alphabet: Alphabet,
    start: Duration,
    end: Duration,
    total: Duration,
    params: SolvedParams,
    time: T,
}

impl MonotonicGenerator {
    /// Creates a generator that reads the system wall clock.
    ///
    /// # Errors
    ///
    /// Fails with the same argument errors as [`solve_parameters`], or
    /// with [`Error::HorizonOutOfRange`] if the horizon's total duration
    /// is not representable.
    pub fn new(config: MonotonicConfig) -> Result<Self> {
        Self::with_time_source(config, SystemClock)
    }
}

impl<T: TimeSource> MonotonicGenerator<T> {
    /// Creates a generator over a custom [`TimeSource`].
    ///
    /// # Errors
    ///
    /// See [`MonotonicGenerator::new`].
    pub fn with_time_source(config: MonotonicConfig, time: T) -> Result<Self> {
        let MonotonicConfig {
            resolution,
            alphabet,
            start,
            overflow_years,
        } = config;

        let params = solve_parameters(overflow_years, resolution, alphabet.base())?;
        let total = Duration::try_from_secs_f64(overflow_years * SECONDS_PER_YEAR)
            .map_err(|_| Error::HorizonOutOfRange { overflow_years })?;
        if total.is_zero() {
            return Err(Error::HorizonOutOfRange { overflow_years });
        }
        let end = start
            .checked_add(total)
            .ok_or(Error::HorizonOutOfRange { overflow_years })?;

        Ok(Self {
            alphabet,
            start,
            end,
            total,
            params,
            time,
        })
    }

    /// Number of digits in a non-overflowed ID.
    pub fn digits(&self) -> usize {
        self.params.digits
    }

    /// Total distinct interval values representable without overflow.
    pub fn combinations(&self) -> u128 {
        self.params.combinations
    }

    /// The real duration of one interval in seconds.
    pub fn actual_resolution(&self) -> f64 {
        self.params.actual_resolution
    }

    /// Beginning of the timeline, as a duration since the Unix epoch.
    pub fn start(&self) -> Duration {
        self.start
    }

    /// First instant whose ID overflows to `digits + 1` symbols:
    /// `start + total()`.
    pub fn end(&self) -> Duration {
        self.end
    }

    /// Length of the timeline covered without overflow.
    pub fn total(&self) -> Duration {
        self.total
    }

    /// The alphabet IDs are encoded with.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Generates an ID for the current time.
    ///
    /// The clock is read at call time, never captured at construction.
    ///
    /// # Errors
    ///
    /// - [`Error::TimeBeforeStart`] if the clock reads before `start`
    /// - [`Error::ElapsedOutOfRange`] if the interval count exceeds `u128`
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn monotonic(&self) -> Result<String> {
        self.monotonic_at(self.time.unix_now())
    }

    /// Generates the ID for a caller-supplied instant.
    ///
    /// `now` is a duration since the Unix epoch, in the same reference
    /// frame as `start`. At `now == start` the ID is all zero symbols; at
    /// `now == end()` it is the first overflow value, one digit longer.
    ///
    /// # Errors
    ///
    /// - [`Error::TimeBeforeStart`] if `now < start`
    /// - [`Error::ElapsedOutOfRange`] if the interval count exceeds `u128`
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn monotonic_at(&self, now: Duration) -> Result<String> {
        let intervals = elapsed_intervals(now, self.start, self.total, self.params.combinations)?;
        Ok(encode_base_n(intervals, &self.alphabet, self.params.digits))
    }
}

/// Number of whole intervals elapsed between `start` and `now`.
///
/// The interval length is `total / combinations`, so the count is
/// `floor(elapsed * combinations / total)`, computed exactly in integer
/// nanoseconds. At `now == end` this yields `combinations`, the first
/// overflow value.
fn elapsed_intervals(
    now: Duration,
    start: Duration,
    total: Duration,
    combinations: u128,
) -> Result<u128> {
    if now < start {
        return Err(Error::TimeBeforeStart { now, start });
    }
    let elapsed = now - start;
    elapsed
        .as_nanos()
        .checked_mul(combinations)
        .map(|scaled| scaled / total.as_nanos())
        .ok_or(Error::ElapsedOutOfRange)
}

/// Generates an ID for the current time, solving parameters on the fly.
///
/// Stateless form of [`MonotonicGenerator`]: every call re-runs the
/// parameter solver. For repeated generation, construct the generator once
/// instead. Both forms share one encoding routine and produce identical
/// output for identical inputs.
///
/// # Errors
///
/// See [`MonotonicGenerator::new`] and [`MonotonicGenerator::monotonic`].
pub fn monotonic_id(config: &MonotonicConfig) -> Result<String> {
    MonotonicGenerator::new(config.clone())?.monotonic()
}

/// Generates the ID for a caller-supplied instant, solving parameters on
/// the fly.
///
/// # Errors
///
/// See [`MonotonicGenerator::new`] and
/// [`MonotonicGenerator::monotonic_at`].
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use hagelkorn::{Alphabet, MonotonicConfig, monotonic_id_at, resolution};
///
/// let config = MonotonicConfig {
///     resolution: resolution::DAYS,
///     alphabet: Alphabet::new("0123456789")?,
///     start: Duration::from_secs(1_514_764_800), // 2018-01-01 UTC
///     overflow_years: 1.0,
/// };
///
/// // 2018-12-31T23:59:59 UTC: the last second of the covered year
/// let now = Duration::from_secs(1_546_300_799);
/// assert_eq!(monotonic_id_at(&config, now)?, "999");
/// # Ok::<(), hagelkorn::Error>(())
/// ```
pub fn monotonic_id_at(config: &MonotonicConfig, now: Duration) -> Result<String> {
    MonotonicGenerator::new(config.clone())?.monotonic_at(now)
}
