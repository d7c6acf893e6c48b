use kundali_rs::{BaseError, ConfigError, DashaError, EphemerisError, KundaliError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Kundali(#[from] KundaliError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dasha(#[from] DashaError),
    #[error(transparent)]
    Base(#[from] BaseError),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error("invalid {what}: {value}")]
    Invalid { what: &'static str, value: String },
    #[error("cannot install logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
    #[error("cannot apply log level: {0}")]
    LogReload(#[from] tracing_subscriber::reload::Error),
    #[error("cannot encode output: {0}")]
    Json(#[from] serde_json::Error),
}
