//! Nabhasa yogas: patterns formed by the seven classical grahas.
//!
//! Every pattern here needs all seven grahas placed. Occupied houses are
//! compared as a 12-bit mask (bit `h - 1` for house `h`); shape yogas
//! require exact coverage of their house pattern.

use kundali_base::{
    APOKLIMAS, Graha, KENDRAS, Modality, PANAPHARAS, SAPTA_GRAHAS, is_kendra, nth_house_from,
};

use crate::context::YogaContext;
use crate::error::YogaError;
use crate::registry::YogaRegistry;
use crate::result::{Outcome, Polarity};

use Polarity::{Negative, Neutral, Positive};

const SAPTA_BENEFICS: [Graha; 4] = [Graha::Chandra, Graha::Buddh, Graha::Guru, Graha::Shukra];
const SAPTA_MALEFICS: [Graha; 3] = [Graha::Surya, Graha::Mangal, Graha::Shani];
const SAUMYA: [Graha; 3] = [Graha::Buddh, Graha::Guru, Graha::Shukra];

const AKRITI: [(&str, Polarity); 16] = [
    ("Gada", Positive),
    ("Sakata", Negative),
    ("Vihaga", Neutral),
    ("Sringataka", Positive),
    ("Hala", Neutral),
    ("Yupa", Positive),
    ("Ishu", Neutral),
    ("Sakti", Negative),
    ("Danda", Negative),
    ("Nauka", Neutral),
    ("Koota", Negative),
    ("Chhatra", Positive),
    ("Dhanus", Neutral),
    ("Ardhachandra", Positive),
    ("Chakra", Positive),
    ("Samudra", Positive),
];

const SANKHYA: [(&str, Polarity); 7] = [
    ("Vallaki", Positive),
    ("Damni", Positive),
    ("Pasa", Neutral),
    ("Kedara", Positive),
    ("Sula", Negative),
    ("Yuga", Negative),
    ("Gola", Negative),
];

/// Malika names by starting house.
const MALIKA: [(&str, Polarity); 12] = [
    ("Lagna Malika", Positive),
    ("Dhana Malika", Positive),
    ("Vikrama Malika", Positive),
    ("Sukha Malika", Positive),
    ("Putra Malika", Positive),
    ("Satru Malika", Negative),
    ("Kalatra Malika", Positive),
    ("Randhra Malika", Negative),
    ("Bhagya Malika", Positive),
    ("Karma Malika", Positive),
    ("Labha Malika", Positive),
    ("Vraya Malika", Negative),
];

pub(super) fn register(r: &mut YogaRegistry) {
    r.register_group(
        "Rasi-Guna",
        &[("Rajju", Neutral), ("Musala", Positive), ("Nala", Neutral)],
        ashraya,
    );
    r.register_group("Srik/Sarpa", &[("Srik", Positive), ("Sarpa", Negative)], dala);
    r.register_group("Akriti", &AKRITI, akriti);
    r.register_group("Vajra/Yava", &[("Vajra", Positive), ("Yava", Positive)], vajra_yava);
    r.register_group("Kendra-Stithi", &[("Kamala", Positive), ("Vapi", Positive)], kendra_stithi);
    r.register_group("Sankhya", &SANKHYA, sankhya);
    r.register_group("Malika", &MALIKA, malika);
}

// ---------------------------------------------------------------------------
// House masks
// ---------------------------------------------------------------------------

fn bit(house: u8) -> u16 {
    1 << (house - 1)
}

fn mask(houses: &[u8]) -> u16 {
    houses.iter().fold(0, |m, &h| m | bit(h))
}

/// `len` consecutive houses starting at `start`.
fn run(start: u8, len: u8) -> u16 {
    (1..=len).fold(0, |m, n| m | bit(nth_house_from(start, n)))
}

fn listed(m: u16) -> String {
    let houses: Vec<String> = (1..=12u8)
        .filter(|&h| m & bit(h) != 0)
        .map(|h| h.to_string())
        .collect();
    format!("occupied houses [{}]", houses.join(", "))
}

/// Houses of the seven grahas, in `SAPTA_GRAHAS` order.
fn sapta_houses(ctx: &YogaContext<'_>) -> Result<[u8; 7], YogaError> {
    let mut houses = [0u8; 7];
    for (slot, g) in houses.iter_mut().zip(SAPTA_GRAHAS) {
        *slot = ctx
            .house(g)
            .map_err(|_| YogaError::MissingInput(format!("{g} is required for Nabhasa yogas")))?;
    }
    Ok(houses)
}

fn occupied(ctx: &YogaContext<'_>) -> Result<u16, YogaError> {
    Ok(mask(&sapta_houses(ctx)?))
}

fn all_in(ctx: &YogaContext<'_>, set: &[Graha], allowed: u16) -> Result<bool, YogaError> {
    for &g in set {
        if allowed & bit(ctx.house(g)?) == 0 {
            return Ok(false);
        }
    }
    Ok(true)
}

fn flags(present: &[bool], details: &str) -> Vec<Outcome> {
    present
        .iter()
        .map(|&p| Outcome::when(p, 1.0, details))
        .collect()
}

// ---------------------------------------------------------------------------
// Families
// ---------------------------------------------------------------------------

/// All seven in movable, fixed or dual signs.
fn ashraya(ctx: &YogaContext<'_>) -> Result<Vec<Outcome>, YogaError> {
    sapta_houses(ctx)?;
    let mut modalities = Vec::with_capacity(7);
    for g in SAPTA_GRAHAS {
        modalities.push(ctx.rasi().placement(g)?.sign.modality());
    }
    let all = |m: Modality| modalities.iter().all(|&x| x == m);
    Ok(flags(
        &[all(Modality::Movable), all(Modality::Fixed), all(Modality::Dual)],
        "sign modality of all seven grahas",
    ))
}

/// Srik: Mercury, Jupiter and Venus hold three kendras with no malefic in
/// one. Sarpa: the Sun, Mars and Saturn do so with no benefic in one.
fn dala(ctx: &YogaContext<'_>) -> Result<Vec<Outcome>, YogaError> {
    sapta_houses(ctx)?;
    let kendras = mask(&KENDRAS);
    let holds_three = |set: &[Graha]| -> Result<bool, YogaError> {
        let mut m = 0u16;
        for &g in set {
            m |= bit(ctx.house(g)?);
        }
        Ok(m & kendras == m && m.count_ones() == 3)
    };
    let none_in_kendra = |set: &[Graha]| -> Result<bool, YogaError> {
        for &g in set {
            if is_kendra(ctx.house(g)?) {
                return Ok(false);
            }
        }
        Ok(true)
    };
    let srik = holds_three(&SAUMYA)? && none_in_kendra(&SAPTA_MALEFICS)?;
    let sarpa = holds_three(&SAPTA_MALEFICS)? && none_in_kendra(&SAUMYA)?;
    Ok(flags(&[srik, sarpa], "kendra occupancy of benefics and malefics"))
}

fn akriti(ctx: &YogaContext<'_>) -> Result<Vec<Outcome>, YogaError> {
    let h = occupied(ctx)?;
    let any_exact = |sets: &[&[u8]]| sets.iter().any(|s| h == mask(s));
    let ardhachandra = (1..=12u8)
        .filter(|&s| !is_kendra(s))
        .any(|s| h == run(s, 7));
    let present = [
        any_exact(&[&[1, 4], &[4, 7], &[7, 10], &[10, 1]]),
        h == mask(&[1, 7]),
        h == mask(&[4, 10]),
        h == mask(&[1, 5, 9]),
        any_exact(&[&[2, 6, 10], &[3, 7, 11], &[4, 8, 12]]),
        h == run(1, 4),
        h == run(4, 4),
        h == run(7, 4),
        h == run(10, 4),
        h == run(1, 7),
        h == run(4, 7),
        h == run(7, 7),
        h == run(10, 7),
        ardhachandra,
        h == mask(&[1, 3, 5, 7, 9, 11]),
        h == mask(&[2, 4, 6, 8, 10, 12]),
    ];
    Ok(flags(&present, &listed(h)))
}

/// Benefics confined to the 1st and 7th, malefics to the 4th and 10th
/// (Vajra), or the reverse (Yava). Both houses of each pair are used.
fn vajra_yava(ctx: &YogaContext<'_>) -> Result<Vec<Outcome>, YogaError> {
    let h = occupied(ctx)?;
    let axis_17 = mask(&[1, 7]);
    let axis_410 = mask(&[4, 10]);
    let spans = |set: &[Graha], axis: u16| -> Result<bool, YogaError> {
        let mut m = 0u16;
        for &g in set {
            m |= bit(ctx.house(g)?);
        }
        Ok(m == axis)
    };
    let vajra = spans(&SAPTA_BENEFICS, axis_17)? && spans(&SAPTA_MALEFICS, axis_410)?;
    let yava = spans(&SAPTA_MALEFICS, axis_17)? && spans(&SAPTA_BENEFICS, axis_410)?;
    Ok(flags(&[vajra, yava], &listed(h)))
}

/// Kamala: exactly the four kendras. Vapi: only panapharas, or only apoklimas.
fn kendra_stithi(ctx: &YogaContext<'_>) -> Result<Vec<Outcome>, YogaError> {
    let h = occupied(ctx)?;
    let kamala = h == mask(&KENDRAS);
    let vapi = all_in(ctx, &SAPTA_GRAHAS, mask(&PANAPHARAS))?
        || all_in(ctx, &SAPTA_GRAHAS, mask(&APOKLIMAS))?;
    Ok(flags(&[kamala, vapi], &listed(h)))
}

/// Exactly one member by the count of distinct occupied houses (7 down to 1).
fn sankhya(ctx: &YogaContext<'_>) -> Result<Vec<Outcome>, YogaError> {
    let h = occupied(ctx)?;
    let slot = 7 - h.count_ones() as usize;
    let present: Vec<bool> = (0..SANKHYA.len()).map(|i| i == slot).collect();
    Ok(flags(&present, &format!("{} distinct houses", h.count_ones())))
}

fn malika(ctx: &YogaContext<'_>) -> Result<Vec<Outcome>, YogaError> {
    let h = occupied(ctx)?;
    let present: Vec<bool> = (1..=12u8).map(|s| h == run(s, 7)).collect();
    Ok(flags(&present, &listed(h)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_wrap() {
        assert_eq!(run(1, 4), mask(&[1, 2, 3, 4]));
        assert_eq!(run(10, 4), mask(&[10, 11, 12, 1]));
        assert_eq!(run(7, 7), mask(&[7, 8, 9, 10, 11, 12, 1]));
        assert_eq!(run(1, 12), 0x0fff);
    }

    #[test]
    fn listing() {
        assert_eq!(listed(mask(&[1, 4])), "occupied houses [1, 4]");
    }
}
