//! Short, human-readable, lexicographically sortable IDs derived from
//! elapsed time, plus a random-ID generator over the same alphabets.
//!
//! Time-based IDs quantize the time elapsed since a configurable start
//! instant into fixed-duration intervals and encode the interval count in
//! positional notation over a caller-supplied [`Alphabet`]. The digit count
//! is solved from an *overflow horizon*: the number of years after which
//! the ID naturally grows by one digit instead of wrapping.
//!
//! # Example
//!
//! ```
//! use core::time::Duration;
//! use hagelkorn::{MonotonicConfig, MonotonicGenerator};
//!
//! let generator = MonotonicGenerator::new(MonotonicConfig::default())?;
//!
//! // 2026-03-01T00:00:00 UTC, expressed as a duration since the Unix epoch
//! let id = generator.monotonic_at(Duration::from_secs(1_772_323_200))?;
//! assert_eq!(id.len(), generator.digits());
//! # Ok::<(), hagelkorn::Error>(())
//! ```
//!
//! Random IDs draw independent symbols from an alphabet and carry no
//! ordering guarantee:
//!
//! ```
//! use hagelkorn::{Alphabet, random_id};
//!
//! let ticket = random_id(5, &Alphabet::default());
//! assert_eq!(ticket.chars().count(), 5);
//! ```

mod alphabet;
mod base_n;
mod error;
mod generator;
mod rand;
pub mod resolution;
#[cfg(feature = "serde")]
mod serde;
mod solver;
mod time;

pub use crate::alphabet::*;
pub use crate::base_n::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::rand::*;
pub use crate::solver::*;
pub use crate::time::*;
