//! Core types for Vimshottari dasha (planetary period) calculations.
//!
//! Periods carry start/end as day counts on a caller-chosen axis: a Julian
//! Date, or days elapsed since birth when the epoch is 0.0. Intervals are
//! half-open, `[start, end)`.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Year length used for all dasha spans.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Length of the full Vimshottari cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
}

impl DashaLevel {
    /// Create from raw u8 value.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaPeriod {
    /// Ruling graha.
    pub lord: Graha,
    /// Inclusive start, in days on the epoch axis.
    pub start: f64,
    /// Exclusive end, in days on the epoch axis.
    pub end: f64,
    /// Hierarchical level.
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
    /// Index into the parent level's array (0 for mahadashas).
    pub parent_idx: u32,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end - self.start
    }

    /// Duration of the period in 365.25-day years.
    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    /// Half-open containment test.
    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && t < self.end
    }
}

/// Moon-derived entry state of the first mahadasha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthBalance {
    /// Moon's nakshatra, 0-based.
    pub nakshatra_index: u8,
    /// Lord of the first mahadasha.
    pub lord: Graha,
    /// Fraction of the nakshatra traversed at birth, [0, 1).
    pub fraction_elapsed: f64,
    /// Years of the first mahadasha still to run.
    pub balance_years: f64,
}

/// Complete materialized hierarchy.
#[derive(Debug, Clone)]
pub struct DashaHierarchy {
    /// Epoch of the day axis.
    pub epoch: f64,
    /// Entry balance the hierarchy was seeded with.
    pub balance: BirthBalance,
    /// levels[0] = mahadashas, levels[1] = antardashas, ...
    pub levels: Vec<Vec<DashaPeriod>>,
}
