//! Error types for pure sidereal calculations.

use thiserror::Error;

/// Errors from base calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaseError {
    /// Division code outside the sixteen supported vargas.
    #[error("unsupported division D{0}: expected one of 1,2,3,4,7,9,10,12,16,20,24,27,30,40,45,60")]
    UnsupportedDivision(u16),
    /// House number outside 1..=12.
    #[error("invalid house number {0}: expected 1..=12")]
    InvalidHouse(u8),
    /// Name did not match any graha.
    #[error("unknown planet name: {0}")]
    UnknownGraha(String),
    /// Name did not match any rashi.
    #[error("unknown sign name: {0}")]
    UnknownRashi(String),
}
