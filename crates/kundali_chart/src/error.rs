//! Error types for chart construction, queries and the dated dasha timeline.

use chrono::{DateTime, Utc};
use kundali_base::{BaseError, Graha};
use kundali_ephem::EphemerisError;
use thiserror::Error;

/// Errors from chart construction and chart queries.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    #[error(transparent)]
    Base(#[from] BaseError),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    /// A planet the query needs is absent from the snapshot.
    #[error("planet not found in chart: {0}")]
    PlanetNotFound(Graha),
    /// A serialized chart could not be read back.
    #[error("malformed chart dump: {0}")]
    MalformedDump(String),
}

/// Errors from dasha timeline queries.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum DashaError {
    #[error(transparent)]
    Chart(#[from] ChartError),
    /// Query date before birth or after the last mahadasha ends.
    #[error("no dasha running at {date}: outside {start} .. {end}")]
    DateOutOfDashaWindow {
        date: DateTime<Utc>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Relative navigation ran past either end of the level.
    #[error("offset {offset} from period {index} is out of range")]
    OffsetOutOfRange { index: usize, offset: i64 },
    /// Direct index outside the level.
    #[error("{level} index {index} out of range (len {len})")]
    IndexOutOfRange {
        level: &'static str,
        index: usize,
        len: usize,
    },
}
