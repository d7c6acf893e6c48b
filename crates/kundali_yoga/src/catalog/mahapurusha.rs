//! Pancha Mahapurusha: a tara graha in own or exaltation sign in a kendra.

use kundali_base::Graha;

use crate::context::{YogaContext, kendra_weight, mean};
use crate::error::YogaError;
use crate::registry::YogaRegistry;
use crate::result::{Outcome, Polarity};

pub(super) fn register(r: &mut YogaRegistry) {
    r.register("Ruchaka", Polarity::Positive, |ctx| mahapurusha(ctx, Graha::Mangal));
    r.register("Bhadra", Polarity::Positive, |ctx| mahapurusha(ctx, Graha::Buddh));
    r.register("Hamsa", Polarity::Positive, |ctx| mahapurusha(ctx, Graha::Guru));
    r.register("Malavya", Polarity::Positive, |ctx| mahapurusha(ctx, Graha::Shukra));
    r.register("Sasa", Polarity::Positive, |ctx| mahapurusha(ctx, Graha::Shani));
}

fn mahapurusha(ctx: &YogaContext<'_>, graha: Graha) -> Result<Outcome, YogaError> {
    let house = ctx.house(graha)?;
    let dignity = ctx.dignity(graha)?;
    let weight = kendra_weight(house);
    Ok(Outcome::when(
        weight > 0.0 && dignity.is_own_or_exalted(),
        mean(&[weight, dignity.score()]),
        format!("{graha} in house {house} ({dignity})"),
    ))
}
