//! Lookup of active periods on a sorted, contiguous level.

use super::types::{DashaHierarchy, DashaPeriod};

/// Index of the period containing `t` (half-open), by binary search.
///
/// `periods` must be sorted and contiguous.
pub fn find_active_period(periods: &[DashaPeriod], t: f64) -> Option<usize> {
    let first = periods.first()?;
    let last = periods.last()?;
    if t < first.start || t >= last.end {
        return None;
    }
    let idx = periods.partition_point(|p| p.end <= t);
    (idx < periods.len() && periods[idx].contains(t)).then_some(idx)
}

/// Active period at each level of the hierarchy, outermost first.
///
/// Stops at the first level with no active period.
pub fn active_chain(hierarchy: &DashaHierarchy, t: f64) -> Vec<DashaPeriod> {
    let mut chain = Vec::with_capacity(hierarchy.levels.len());
    for level in &hierarchy.levels {
        match find_active_period(level, t) {
            Some(i) => chain.push(level[i]),
            None => break,
        }
    }
    chain
}
