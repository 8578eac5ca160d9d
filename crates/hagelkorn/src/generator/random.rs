use crate::{Alphabet, RandSource, ThreadRandom};

/// Default number of symbols in a random ID.
pub const DEFAULT_RANDOM_DIGITS: usize = 5;

/// Generates a random ID of `digits` independent symbol draws.
///
/// Uses the thread-local RNG. Collisions are possible by design: over the
/// default 27-symbol alphabet with [`DEFAULT_RANDOM_DIGITS`] there are
/// about 14.3 million combinations, so callers needing uniqueness must
/// pair this with an external uniqueness check. No ordering property is
/// implied.
///
/// # Example
///
/// ```
/// use hagelkorn::{Alphabet, DEFAULT_RANDOM_DIGITS, random_id};
///
/// let id = random_id(DEFAULT_RANDOM_DIGITS, &Alphabet::default());
/// assert_eq!(id.chars().count(), DEFAULT_RANDOM_DIGITS);
/// ```
pub fn random_id(digits: usize, alphabet: &Alphabet) -> String {
    random_id_with(digits, alphabet, &ThreadRandom)
}

/// Generates a random ID from a caller-supplied [`RandSource`].
pub fn random_id_with<R: RandSource>(digits: usize, alphabet: &Alphabet, rng: &R) -> String {
    (0..digits)
        .map(|_| alphabet.symbol(rng.pick(alphabet.base())))
        .collect()
}
