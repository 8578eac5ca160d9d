use core::fmt;
use core::time::Duration;

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `hagelkorn` can emit.
///
/// Every failure is local, synchronous, and deterministic: inputs are fully
/// under the caller's control and nothing is retried. Invalid arguments are
/// surfaced immediately, never as a partial result.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The alphabet (or requested base) has fewer than two symbols.
    ///
    /// A single-symbol alphabet cannot encode more than one value.
    AlphabetTooShort { len: usize },

    /// The alphabet contains the same symbol more than once.
    DuplicateSymbol { symbol: char },

    /// The requested resolution is not a positive, finite number of
    /// seconds per increment.
    ResolutionOutOfRange { resolution: f64 },

    /// The overflow horizon is not a positive, finite number of years, or
    /// its total duration is not representable.
    HorizonOutOfRange { overflow_years: f64 },

    /// The solved combination count `base^digits` exceeds `u128`.
    CombinationsOverflow { base: usize },

    /// The supplied timestamp precedes the generator's start instant.
    ///
    /// Negative elapsed time has no defined interval number, so this is
    /// rejected instead of producing a misleadingly-ordered ID.
    TimeBeforeStart { now: Duration, start: Duration },

    /// The elapsed interval computation exceeded `u128`.
    ElapsedOutOfRange,

    /// A symbol in a decoded string is not part of the alphabet.
    UnknownSymbol { symbol: char, index: usize },

    /// The decoded value exceeds `u128`.
    DecodeOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlphabetTooShort { len } => {
                write!(f, "alphabet must contain at least 2 symbols, got {len}")
            }
            Self::DuplicateSymbol { symbol } => {
                write!(f, "alphabet contains duplicate symbol {symbol:?}")
            }
            Self::ResolutionOutOfRange { resolution } => {
                write!(f, "resolution must be a positive number of seconds, got {resolution}")
            }
            Self::HorizonOutOfRange { overflow_years } => {
                write!(f, "overflow horizon must be a positive number of years, got {overflow_years}")
            }
            Self::CombinationsOverflow { base } => {
                write!(f, "combination count for base {base} exceeds u128")
            }
            Self::TimeBeforeStart { now, start } => {
                write!(f, "timestamp {now:?} precedes the generator start {start:?}")
            }
            Self::ElapsedOutOfRange => {
                write!(f, "elapsed interval count exceeds u128")
            }
            Self::UnknownSymbol { symbol, index } => {
                write!(f, "symbol {symbol:?} at index {index} is not in the alphabet")
            }
            Self::DecodeOverflow => {
                write!(f, "decoded value exceeds u128")
            }
        }
    }
}

impl core::error::Error for Error {}
