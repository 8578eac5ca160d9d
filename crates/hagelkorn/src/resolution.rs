//! Named resolution presets, expressed as seconds per increment.
//!
//! These are plain `f64` constants rather than a closed enumeration:
//! any positive, finite number of seconds is a valid resolution.

/// One microsecond per increment.
pub const MICROSECONDS: f64 = 1e-6;

/// One millisecond per increment.
pub const MILLISECONDS: f64 = 1e-3;

/// One second per increment.
pub const SECONDS: f64 = 1.0;

/// One minute per increment.
pub const MINUTES: f64 = 60.0;

/// One hour per increment.
pub const HOURS: f64 = 3600.0;

/// One day per increment.
pub const DAYS: f64 = 86_400.0;
