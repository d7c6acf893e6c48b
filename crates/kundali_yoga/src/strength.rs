//! Pluggable planetary strength used by rules that ask for a "powerful" graha.

use kundali_base::{Dignity, Division, Graha, is_kendra};
use kundali_chart::ChartModel;

/// Decides whether a graha is powerful, and how much.
pub trait StrengthPredicate: Send + Sync {
    /// `(powerful, strength in [0, 1])`; `(false, 0.0)` when not powerful
    /// or absent from the chart.
    fn strength(&self, chart: &ChartModel, graha: Graha) -> (bool, f64);

    fn name(&self) -> &'static str;
}

/// Rasi dignity only: Exalted > MoolaTrikona > Own > Friend in a kendra.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConservativeStrength;

impl StrengthPredicate for ConservativeStrength {
    fn strength(&self, chart: &ChartModel, graha: Graha) -> (bool, f64) {
        let Ok(p) = chart.rasi().placement(graha) else {
            return (false, 0.0);
        };
        let d = p.dignity;
        if d.contains(Dignity::Exalted) {
            (true, 1.0)
        } else if d.contains(Dignity::MoolaTrikona) {
            (true, 0.85)
        } else if d.contains(Dignity::Own) {
            (true, 0.75)
        } else if d.contains(Dignity::Friend) && is_kendra(p.house) {
            (true, 0.5)
        } else {
            (false, 0.0)
        }
    }

    fn name(&self) -> &'static str {
        "conservative"
    }
}

/// Conservative strength that also requires own or exalted Navamsa dignity.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavamsaBackedStrength;

impl StrengthPredicate for NavamsaBackedStrength {
    fn strength(&self, chart: &ChartModel, graha: Graha) -> (bool, f64) {
        let (powerful, s) = ConservativeStrength.strength(chart, graha);
        let navamsa_ok = chart
            .divisional_dignity(graha, Division::D9)
            .is_ok_and(|d| d.is_own_or_exalted());
        if powerful && navamsa_ok {
            (true, s)
        } else {
            (false, 0.0)
        }
    }

    fn name(&self) -> &'static str {
        "dignity"
    }
}

/// Named strength policies, as selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrengthPolicy {
    #[default]
    Conservative,
    Dignity,
}

impl StrengthPolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "conservative" => Some(Self::Conservative),
            "dignity" | "navamsa" => Some(Self::Dignity),
            _ => None,
        }
    }

    pub fn predicate(self) -> &'static dyn StrengthPredicate {
        match self {
            Self::Conservative => &ConservativeStrength,
            Self::Dignity => &NavamsaBackedStrength,
        }
    }
}
