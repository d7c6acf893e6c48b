//! Argument parsing shared by the chart-based subcommands.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use clap::Args;
use kundali_rs::{Ayanamsha, BirthInputs, ChartOptions, DashaLevel, Graha};

use crate::error::CliError;

/// Birth moment and place.
#[derive(Debug, Clone, Args)]
pub struct BirthArgs {
    /// Local birth date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
    /// Local birth time (HH:MM:SS or HH:MM)
    #[arg(long, default_value = "00:00:00")]
    pub time: String,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,
    /// UTC offset (+HH:MM or -HH:MM)
    #[arg(long, default_value = "+00:00", allow_hyphen_values = true)]
    pub tz: String,
    /// Ayanamsha name, overriding the config file
    #[arg(long)]
    pub ayanamsha: Option<String>,
}

impl BirthArgs {
    pub fn to_inputs(&self, options: &ChartOptions) -> Result<BirthInputs, CliError> {
        let date = parse_date(&self.date)?;
        let time = parse_time(&self.time)?;
        let mut opts = *options;
        if let Some(name) = &self.ayanamsha {
            opts.ayanamsha = Ayanamsha::from_name(name)?;
        }
        let inputs = BirthInputs::new(
            date.year(),
            date.month(),
            date.day(),
            time.hour(),
            time.minute(),
            time.second(),
            self.lat,
            self.lon,
            self.tz.as_str(),
        );
        Ok(opts.apply(&inputs))
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| CliError::Invalid {
        what: "date (expected YYYY-MM-DD)",
        value: s.to_string(),
    })
}

pub fn parse_time(s: &str) -> Result<NaiveTime, CliError> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| CliError::Invalid {
            what: "time (expected HH:MM:SS)",
            value: s.to_string(),
        })
}

pub fn parse_level(s: &str) -> Result<DashaLevel, CliError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "maha" | "mahadasha" => Ok(DashaLevel::Mahadasha),
        "antar" | "antardasha" | "bhukti" => Ok(DashaLevel::Antardasha),
        "pratyantar" | "pratyantardasha" => Ok(DashaLevel::Pratyantardasha),
        _ => Err(CliError::Invalid {
            what: "dasha level (maha, antar, pratyantar)",
            value: s.to_string(),
        }),
    }
}

pub fn parse_graha(s: &str) -> Result<Graha, CliError> {
    Ok(Graha::from_name(s)?)
}
