//! Pure sidereal calculations for chart construction.
//!
//! This crate provides:
//! - Graha, rashi and nakshatra lookups with lordship
//! - Dignity classification and natural relationships
//! - Whole-sign house arithmetic and sign-based drishti
//! - The sixteen Shodashavarga divisional mappings
//! - The Vimshottari dasha engine on a plain day axis
//!
//! Nothing here touches an ephemeris or a calendar.

pub mod dasha;
pub mod dignity;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod house;
pub mod nakshatra;
pub mod rashi;
pub mod util;
pub mod varga;

pub use dignity::{
    ALL_DIGNITIES, Dignity, DignitySet, NaturalRelation, debilitation_sign,
    deep_exaltation_degree, dignity_in_sign, dignity_set, distance_from_deep_exaltation,
    exaltation_sign, moolatrikona_range, natural_relation, own_signs,
};
pub use drishti::{aspect_offsets, aspected_houses, aspects_house};
pub use error::BaseError;
pub use graha::{
    ALL_GRAHAS, BENEFICS, Graha, MALEFICS, SAPTA_GRAHAS, TARA_GRAHAS, nth_rashi_from, rashi_lord,
    rashi_lord_by_index,
};
pub use house::{
    APOKLIMAS, DUSTHANAS, KENDRAS, PANAPHARAS, TRIKONAS, UPACHAYAS, check_house, house_of_sign,
    is_dusthana, is_kendra, is_trikona, is_upachaya, nth_house_from, relative_house,
    sign_of_house,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_LORD_CYCLE, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Dms, Element, Modality, Rashi, RashiInfo, deg_to_dms, dms_to_deg,
    rashi_from_longitude, rashi_index_of,
};
pub use util::{angular_separation, forward_arc, normalize_360};
pub use varga::{ALL_DIVISIONS, Division, VargaPosition, varga_position, varga_position_by_code};
