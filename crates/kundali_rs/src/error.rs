//! Unified error type for the convenience API.

use kundali_base::BaseError;
use kundali_chart::{ChartError, DashaError};
use kundali_config::ConfigError;
use kundali_ephem::EphemerisError;
use kundali_yoga::YogaError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KundaliError {
    #[error(transparent)]
    Base(#[from] BaseError),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error(transparent)]
    Dasha(#[from] DashaError),
    #[error(transparent)]
    Yoga(#[from] YogaError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
