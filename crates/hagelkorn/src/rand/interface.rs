/// A trait for random sources that select symbol indices.
///
/// This abstraction allows you to plug in a real random source or a
/// mocked one in tests. Selections must be uniformly distributed and
/// independent across calls.
///
/// # Example
///
/// ```
/// use hagelkorn::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn pick(&self, _bound: usize) -> usize {
///         3
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.pick(10), 3);
/// ```
pub trait RandSource {
    /// Returns a uniformly distributed index in `0..bound`.
    ///
    /// Callers in this crate always pass `bound >= 2` (the alphabet
    /// base); implementations must return a value strictly below `bound`.
    fn pick(&self, bound: usize) -> usize;
}
