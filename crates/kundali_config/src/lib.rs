//! `kundali.toml` configuration.
//!
//! This crate provides:
//! - `KundaliConfig` with `[chart]`, `[yoga]` and `[log]` sections
//! - Validation of ayanamsha, house system, strength policy and log level
//! - Upward search for the file from the working directory

pub mod error;
pub mod loader;
pub mod model;

pub use error::ConfigError;
pub use loader::{
    CONFIG_FILE_NAME, MAX_TRAVERSAL_DEPTH, directory_ancestors, find_config, load_config,
    load_from_dir, load_from_path, parse_config,
};
pub use model::{ChartSection, KundaliConfig, LOG_LEVELS, LogSection, YogaSection};
