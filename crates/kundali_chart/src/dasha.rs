//! Dated Vimshottari timeline anchored at the birth instant.
//!
//! The day-axis engine in `kundali_base` runs with epoch 0 (days since
//! birth); every boundary becomes `birth + round(days * 86_400_000) ms`.
//! Equal day offsets give equal instants, so siblings stay contiguous.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use kundali_base::Graha;
use kundali_base::dasha::{
    BirthBalance, DashaLevel, DashaPeriod, vimshottari_birth_balance, vimshottari_hierarchy,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dump::{AntardashaDump, DashaDump, MahadashaDump};
use crate::error::DashaError;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Number of lords per level.
const FANOUT: usize = 9;

/// A dasha period with calendar boundaries, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedPeriod {
    pub level: DashaLevel,
    pub lord: Graha,
    /// Lord of the enclosing mahadasha (equals `lord` for a mahadasha).
    pub maha_lord: Graha,
    /// Lord of the immediate parent, if any.
    pub parent_lord: Option<Graha>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Position in the flattened level.
    pub index: usize,
}

impl DatedPeriod {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at < self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// The periods running at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentDasha {
    pub mahadasha: DatedPeriod,
    pub antardasha: DatedPeriod,
    pub pratyantardasha: DatedPeriod,
}

/// Midnight UTC at the start of a calendar date.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn offset_instant(birth: DateTime<Utc>, days: f64) -> DateTime<Utc> {
    birth + Duration::milliseconds((days * MS_PER_DAY).round() as i64)
}

/// Three-level Vimshottari timeline: 9 mahadashas, 81 antardashas, 729
/// pratyantardashas.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaTimeline {
    birth: DateTime<Utc>,
    balance: BirthBalance,
    levels: [Vec<DatedPeriod>; 3],
}

impl DashaTimeline {
    /// Build from the birth instant and the Moon's sidereal longitude.
    pub fn new(birth: DateTime<Utc>, moon_sidereal_lon: f64) -> Self {
        let hierarchy = vimshottari_hierarchy(0.0, moon_sidereal_lon, DashaLevel::Pratyantardasha);
        let balance = vimshottari_birth_balance(moon_sidereal_lon);

        let date = |p: &DashaPeriod, index: usize, maha_lord: Graha, parent_lord: Option<Graha>| {
            DatedPeriod {
                level: p.level,
                lord: p.lord,
                maha_lord,
                parent_lord,
                start: offset_instant(birth, p.start),
                end: offset_instant(birth, p.end),
                index,
            }
        };

        let raw = &hierarchy.levels;
        let maha: Vec<DatedPeriod> = raw[0]
            .iter()
            .enumerate()
            .map(|(i, p)| date(p, i, p.lord, None))
            .collect();
        let antar: Vec<DatedPeriod> = raw[1]
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let parent = &maha[p.parent_idx as usize];
                date(p, i, parent.lord, Some(parent.lord))
            })
            .collect();
        let pratyantar: Vec<DatedPeriod> = raw[2]
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let parent = &antar[p.parent_idx as usize];
                date(p, i, parent.maha_lord, Some(parent.lord))
            })
            .collect();

        debug!(
            %birth,
            first_lord = %balance.lord,
            balance_years = balance.balance_years,
            "dasha timeline built"
        );

        Self {
            birth,
            balance,
            levels: [maha, antar, pratyantar],
        }
    }

    pub fn birth(&self) -> DateTime<Utc> {
        self.birth
    }

    /// Lord, remaining years and elapsed fraction of the first mahadasha.
    pub fn birth_balance(&self) -> BirthBalance {
        self.balance
    }

    /// Every period of a level, sorted by start.
    pub fn level(&self, level: DashaLevel) -> &[DatedPeriod] {
        &self.levels[level as usize]
    }

    pub fn mahadashas(&self) -> &[DatedPeriod] {
        self.level(DashaLevel::Mahadasha)
    }

    /// All 81 antardashas, flattened in time order.
    pub fn antardashas(&self) -> &[DatedPeriod] {
        self.level(DashaLevel::Antardasha)
    }

    /// Antardashas of one mahadasha.
    pub fn antardashas_of(&self, maha_index: usize) -> Result<&[DatedPeriod], DashaError> {
        check_index("mahadasha", maha_index)?;
        let start = maha_index * FANOUT;
        Ok(&self.antardashas()[start..start + FANOUT])
    }

    /// Pratyantardashas of one antardasha, indices relative to their parents.
    pub fn pratyantardashas(
        &self,
        maha_index: usize,
        antar_index: usize,
    ) -> Result<&[DatedPeriod], DashaError> {
        check_index("mahadasha", maha_index)?;
        check_index("antardasha", antar_index)?;
        let start = (maha_index * FANOUT + antar_index) * FANOUT;
        Ok(&self.level(DashaLevel::Pratyantardasha)[start..start + FANOUT])
    }

    /// First start and last end.
    pub fn window(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let maha = self.mahadashas();
        (
            maha.first().map_or(self.birth, |p| p.start),
            maha.last().map_or(self.birth, |p| p.end),
        )
    }

    fn index_at(&self, level: DashaLevel, at: DateTime<Utc>) -> Result<usize, DashaError> {
        let periods = self.level(level);
        let idx = periods.partition_point(|p| p.end <= at);
        match periods.get(idx) {
            Some(p) if p.contains(at) => Ok(idx),
            _ => {
                let (start, end) = self.window();
                Err(DashaError::DateOutOfDashaWindow {
                    date: at,
                    start,
                    end,
                })
            }
        }
    }

    /// Period of `level` running at `at`.
    pub fn at(&self, level: DashaLevel, at: DateTime<Utc>) -> Result<&DatedPeriod, DashaError> {
        let idx = self.index_at(level, at)?;
        Ok(&self.level(level)[idx])
    }

    /// Period `offset` positions from the one running at `at`. Does not wrap.
    pub fn by_offset(
        &self,
        level: DashaLevel,
        at: DateTime<Utc>,
        offset: i64,
    ) -> Result<&DatedPeriod, DashaError> {
        let index = self.index_at(level, at)?;
        let periods = self.level(level);
        let out_of_range = DashaError::OffsetOutOfRange { index, offset };
        let target = i64::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(offset))
            .ok_or(out_of_range.clone())?;
        usize::try_from(target)
            .ok()
            .and_then(|t| periods.get(t))
            .ok_or(out_of_range)
    }

    pub fn mahadasha_at(&self, at: DateTime<Utc>) -> Result<&DatedPeriod, DashaError> {
        self.at(DashaLevel::Mahadasha, at)
    }

    pub fn mahadasha_by_offset(
        &self,
        at: DateTime<Utc>,
        offset: i64,
    ) -> Result<&DatedPeriod, DashaError> {
        self.by_offset(DashaLevel::Mahadasha, at, offset)
    }

    pub fn antardasha_at(&self, at: DateTime<Utc>) -> Result<&DatedPeriod, DashaError> {
        self.at(DashaLevel::Antardasha, at)
    }

    /// Navigates the flattened antardasha list, crossing mahadasha boundaries.
    pub fn antardasha_by_offset(
        &self,
        at: DateTime<Utc>,
        offset: i64,
    ) -> Result<&DatedPeriod, DashaError> {
        self.by_offset(DashaLevel::Antardasha, at, offset)
    }

    /// Every level running at `at`.
    pub fn current(&self, at: DateTime<Utc>) -> Result<CurrentDasha, DashaError> {
        Ok(CurrentDasha {
            mahadasha: *self.at(DashaLevel::Mahadasha, at)?,
            antardasha: *self.at(DashaLevel::Antardasha, at)?,
            pratyantardasha: *self.at(DashaLevel::Pratyantardasha, at)?,
        })
    }

    /// Nested mahadasha/antardasha dump with DD-MM-YYYY dates (UTC).
    pub fn to_nested(&self) -> DashaDump {
        let antar = self.antardashas();
        DashaDump(
            self.mahadashas()
                .iter()
                .enumerate()
                .map(|(i, m)| MahadashaDump {
                    mahadasha: m.lord,
                    start: m.start.date_naive(),
                    end: m.end.date_naive(),
                    antardasha: antar[i * FANOUT..(i + 1) * FANOUT]
                        .iter()
                        .map(|a| AntardashaDump {
                            bhuthi: a.lord,
                            start: a.start.date_naive(),
                            end: a.end.date_naive(),
                        })
                        .collect(),
                })
                .collect(),
        )
    }
}

fn check_index(level: &'static str, index: usize) -> Result<(), DashaError> {
    if index < FANOUT {
        Ok(())
    } else {
        Err(DashaError::IndexOutOfRange {
            level,
            index,
            len: FANOUT,
        })
    }
}
