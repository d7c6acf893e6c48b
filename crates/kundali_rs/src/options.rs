//! Chart and yoga options, usually derived from `kundali.toml`.

use kundali_config::KundaliConfig;
use kundali_ephem::{Ayanamsha, BirthInputs, HouseSystem};
use kundali_yoga::StrengthPolicy;

use crate::error::KundaliError;

/// Sidereal conventions applied to every chart built through the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartOptions {
    pub ayanamsha: Ayanamsha,
    pub house_system: HouseSystem,
}

impl ChartOptions {
    /// Birth inputs carrying these conventions.
    pub fn apply(&self, inputs: &BirthInputs) -> BirthInputs {
        inputs
            .clone()
            .with_ayanamsha(self.ayanamsha.name())
            .with_house_system(self.house_system.name())
    }
}

/// Which yogas to evaluate and how to report them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct YogaOptions {
    pub strength: StrengthPolicy,
    /// Evaluate only these names, in this order, when non-empty.
    pub only: Vec<String>,
    pub present_only: bool,
}

/// Map a validated configuration onto options.
pub fn options_from_config(
    config: &KundaliConfig,
) -> Result<(ChartOptions, YogaOptions), KundaliError> {
    config.validate()?;
    let chart = ChartOptions {
        ayanamsha: config.ayanamsha()?,
        house_system: config.house_system()?,
    };
    let yoga = YogaOptions {
        strength: config.strength_policy()?,
        only: config.yoga.only.clone(),
        present_only: config.yoga.present_only,
    };
    Ok((chart, yoga))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_maps_to_options() {
        let mut config = KundaliConfig::default();
        config.chart.ayanamsha = "kp".into();
        config.yoga.strength_policy = "dignity".into();
        config.yoga.present_only = true;
        let (chart, yoga) = options_from_config(&config).unwrap();
        assert_eq!(chart.ayanamsha, Ayanamsha::KP);
        assert_eq!(yoga.strength, StrengthPolicy::Dignity);
        assert!(yoga.present_only);
    }

    #[test]
    fn apply_overrides_names() {
        let inputs = BirthInputs::new(2000, 1, 1, 0, 0, 0, 0.0, 0.0, "+00:00");
        let opts = ChartOptions {
            ayanamsha: Ayanamsha::Raman,
            house_system: HouseSystem::WholeSign,
        };
        assert_eq!(opts.apply(&inputs).ayanamsha, "Raman");
    }
}
