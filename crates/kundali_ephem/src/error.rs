//! Error types for the birth-input boundary and ephemeris providers.

use thiserror::Error;

/// Errors raised before or while producing an ephemeris snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// UTC offset string is not `[+-]HH:MM`.
    #[error("invalid timezone format {0:?}: expected [+-]HH:MM")]
    InvalidTimezoneFormat(String),
    /// Ayanamsha name not recognized.
    #[error("unknown ayanamsha: {0}")]
    UnknownAyanamsha(String),
    /// House system other than Whole Sign.
    #[error("unsupported house system: {0}")]
    UnsupportedHouseSystem(String),
    /// Calendar fields do not form a valid local date-time.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// Latitude or longitude out of range.
    #[error("invalid location: {0}")]
    InvalidLocation(String),
    /// Provider could not produce a snapshot.
    #[error("ephemeris calculation failed: {0}")]
    CalculationFailed(String),
}
