//! Configuration model mirrored from `kundali.toml`.

use kundali_ephem::{Ayanamsha, HouseSystem};
use kundali_yoga::StrengthPolicy;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Log levels accepted by `[log] level`.
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KundaliConfig {
    pub chart: ChartSection,
    pub yoga: YogaSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSection {
    pub ayanamsha: String,
    pub house_system: String,
}

impl Default for ChartSection {
    fn default() -> Self {
        Self {
            ayanamsha: Ayanamsha::default().name().to_string(),
            house_system: HouseSystem::default().name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct YogaSection {
    /// `conservative` or `dignity`.
    pub strength_policy: String,
    /// Evaluate only these yogas when non-empty.
    pub only: Vec<String>,
    pub present_only: bool,
}

impl Default for YogaSection {
    fn default() -> Self {
        Self {
            strength_policy: "conservative".to_string(),
            only: Vec::new(),
            present_only: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl KundaliConfig {
    /// Reject names no component accepts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ayanamsha()?;
        self.house_system()?;
        self.strength_policy()?;
        let level = self.log.level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "log level {:?} (expected one of {})",
                self.log.level,
                LOG_LEVELS.join(", ")
            )));
        }
        if let Some(name) = self.yoga.only.iter().find(|n| !kundali_yoga::catalog().contains(n)) {
            return Err(ConfigError::Invalid(format!("unknown yoga in [yoga] only: {name}")));
        }
        Ok(())
    }

    pub fn ayanamsha(&self) -> Result<Ayanamsha, ConfigError> {
        Ayanamsha::from_name(&self.chart.ayanamsha).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn house_system(&self) -> Result<HouseSystem, ConfigError> {
        HouseSystem::from_name(&self.chart.house_system)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn strength_policy(&self) -> Result<StrengthPolicy, ConfigError> {
        StrengthPolicy::from_name(&self.yoga.strength_policy).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "strength policy {:?} (expected conservative or dignity)",
                self.yoga.strength_policy
            ))
        })
    }

    /// Log level with case normalized.
    pub fn log_level(&self) -> String {
        self.log.level.trim().to_ascii_lowercase()
    }
}
