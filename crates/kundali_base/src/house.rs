//! Whole-sign house arithmetic.
//!
//! Houses are numbered 1..=12 counting rashis forward from the ascendant
//! rashi. All relative counts are inclusive: a house is the 1st from itself.

/// Kendras (angles).
pub const KENDRAS: [u8; 4] = [1, 4, 7, 10];
/// Trikonas (trines).
pub const TRIKONAS: [u8; 3] = [1, 5, 9];
/// Dusthanas (houses of difficulty).
pub const DUSTHANAS: [u8; 3] = [6, 8, 12];
/// Upachayas (houses of growth).
pub const UPACHAYAS: [u8; 4] = [3, 6, 10, 11];
/// Panapharas (succedent houses).
pub const PANAPHARAS: [u8; 4] = [2, 5, 8, 11];
/// Apoklimas (cadent houses).
pub const APOKLIMAS: [u8; 4] = [3, 6, 9, 12];

/// House number of a rashi, given the ascendant rashi (0-based indices).
pub const fn house_of_sign(ascendant_sign: u8, sign: u8) -> u8 {
    ((sign as u16 + 12 - (ascendant_sign % 12) as u16) % 12) as u8 + 1
}

/// Rashi index occupying a house, given the ascendant rashi.
pub const fn sign_of_house(ascendant_sign: u8, house: u8) -> u8 {
    ((ascendant_sign as u16 + house as u16 + 11) % 12) as u8
}

/// Inclusive count from house `from` to house `to`: `((to - from) mod 12) + 1`.
pub const fn relative_house(from: u8, to: u8) -> u8 {
    ((to as u16 + 12 - (from % 12) as u16) % 12) as u8 + 1
}

/// The house that is `n`-th from `house` (inclusive count, `n` in 1..=12).
pub const fn nth_house_from(house: u8, n: u8) -> u8 {
    ((house as u16 + n as u16 + 10) % 12) as u8 + 1
}

/// Angle (1, 4, 7, 10).
pub fn is_kendra(house: u8) -> bool {
    KENDRAS.contains(&house)
}

/// Trine (1, 5, 9).
pub fn is_trikona(house: u8) -> bool {
    TRIKONAS.contains(&house)
}

/// House of difficulty (6, 8, 12).
pub fn is_dusthana(house: u8) -> bool {
    DUSTHANAS.contains(&house)
}

/// House of growth (3, 6, 10, 11).
pub fn is_upachaya(house: u8) -> bool {
    UPACHAYAS.contains(&house)
}

/// Validates a 1-based house number.
pub fn check_house(house: u8) -> Result<u8, crate::error::BaseError> {
    if (1..=12).contains(&house) {
        Ok(house)
    } else {
        Err(crate::error::BaseError::InvalidHouse(house))
    }
}
