//! Kartari (scissors) yogas around the lagna and the Moon.

use kundali_base::{BENEFICS, Graha, MALEFICS, nth_house_from};

use crate::context::{YogaContext, names};
use crate::error::YogaError;
use crate::registry::YogaRegistry;
use crate::result::{Outcome, Polarity};

const RELIEF: [Graha; 3] = [Graha::Buddh, Graha::Guru, Graha::Shukra];

pub(super) fn register(r: &mut YogaRegistry) {
    r.register("Shubha Kartari", Polarity::Positive, shubha_kartari);
    r.register("Papa Kartari", Polarity::Negative, papa_kartari);
    r.register("Chandra Shubha Kartari", Polarity::Positive, chandra_shubha_kartari);
    r.register("Chandra Papa Kartari", Polarity::Negative, chandra_papa_kartari);
}

fn hemmed(ctx: &YogaContext<'_>, set: &[Graha], house: u8) -> Outcome {
    let rasi = ctx.rasi();
    let before = rasi.occupants_from(set, nth_house_from(house, 12));
    let after = rasi.occupants_from(set, nth_house_from(house, 2));
    Outcome::when(
        rasi.is_hemmed_by(set, house),
        1.0,
        format!("house {house}: 12th [{}], 2nd [{}]", names(&before), names(&after)),
    )
}

/// Malefic hemming is halved when Mercury, Jupiter or Venus occupies or
/// aspects the house.
fn papa(ctx: &YogaContext<'_>, house: u8) -> Outcome {
    let mut out = hemmed(ctx, &MALEFICS, house);
    let relief =
        ctx.any_in(&RELIEF, house) || !ctx.rasi().aspecting_from(&RELIEF, house).is_empty();
    if out.present && relief {
        out.strength = 0.5;
        out.details.push_str("; benefic relief");
    }
    out
}

fn shubha_kartari(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    Ok(hemmed(ctx, &BENEFICS, 1))
}

fn papa_kartari(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    Ok(papa(ctx, 1))
}

fn chandra_shubha_kartari(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let h = ctx.house(Graha::Chandra)?;
    Ok(hemmed(ctx, &BENEFICS, h))
}

fn chandra_papa_kartari(ctx: &YogaContext<'_>) -> Result<Outcome, YogaError> {
    let h = ctx.house(Graha::Chandra)?;
    Ok(papa(ctx, h))
}
