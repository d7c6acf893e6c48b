//! Vimshottari dasha engine.
//!
//! Periods live on a plain day axis; callers convert to calendar dates.

pub mod balance;
pub mod query;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::vimshottari_birth_balance;
pub use query::{active_chain, find_active_period};
pub use subperiod::{
    complete_level, cycle_from, cycle_position, proportional_children, snap_last_child_end,
};
pub use types::{
    BirthBalance, DAYS_PER_YEAR, DashaHierarchy, DashaLevel, DashaPeriod, VIMSHOTTARI_TOTAL_YEARS,
};
pub use vimshottari::{
    VIMSHOTTARI_SEQUENCE, mahadashas, vimshottari_hierarchy, vimshottari_years,
};
