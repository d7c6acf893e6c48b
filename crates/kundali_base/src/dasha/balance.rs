//! Birth balance: how much of the first mahadasha remains at birth.

use crate::nakshatra::nakshatra_from_longitude;

use super::types::BirthBalance;
use super::vimshottari::vimshottari_years;

/// Vimshottari birth balance from the Moon's sidereal longitude.
///
/// The first lord is the Moon's nakshatra lord; its remaining length is
/// `(1 - f) * years(lord)` where `f` is the fraction of the nakshatra
/// already traversed.
pub fn vimshottari_birth_balance(moon_sidereal_lon: f64) -> BirthBalance {
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    BirthBalance {
        nakshatra_index: info.nakshatra_index,
        lord: info.lord,
        fraction_elapsed: info.fraction_elapsed,
        balance_years: (1.0 - info.fraction_elapsed) * vimshottari_years(info.lord),
    }
}
