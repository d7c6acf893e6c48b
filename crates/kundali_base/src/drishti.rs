//! Sign-based graha drishti (aspect) offsets.
//!
//! Every graha aspects the 7th house from itself. Mangal adds the 4th and
//! 8th, Guru and Rahu the 5th and 9th, Shani the 3rd and 10th. Offsets here
//! are zero-based (offset 6 = 7th house).

use crate::graha::Graha;
use crate::house::nth_house_from;

/// Zero-based aspect offsets of a graha, ascending.
pub const fn aspect_offsets(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Mangal => &[3, 6, 7],
        Graha::Guru | Graha::Rahu => &[4, 6, 8],
        Graha::Shani => &[2, 6, 9],
        Graha::Surya | Graha::Chandra | Graha::Buddh | Graha::Shukra | Graha::Ketu => &[6],
    }
}

/// Houses aspected by a graha standing in `from_house`, in offset order.
pub fn aspected_houses(graha: Graha, from_house: u8) -> Vec<u8> {
    aspect_offsets(graha)
        .iter()
        .map(|&off| nth_house_from(from_house, off + 1))
        .collect()
}

/// Whether a graha in `from_house` aspects `target_house`.
pub fn aspects_house(graha: Graha, from_house: u8, target_house: u8) -> bool {
    aspect_offsets(graha)
        .iter()
        .any(|&off| nth_house_from(from_house, off + 1) == target_house)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::ALL_GRAHAS;

    #[test]
    fn everyone_aspects_seventh() {
        for g in ALL_GRAHAS {
            assert!(aspect_offsets(g).contains(&6), "{g}");
            for h in 1..=12 {
                assert!(aspects_house(g, h, nth_house_from(h, 7)));
            }
        }
    }

    #[test]
    fn special_aspects_have_three_offsets() {
        for g in [Graha::Mangal, Graha::Guru, Graha::Rahu, Graha::Shani] {
            assert_eq!(aspect_offsets(g).len(), 3, "{g}");
        }
        for g in [Graha::Surya, Graha::Chandra, Graha::Buddh, Graha::Shukra, Graha::Ketu] {
            assert_eq!(aspect_offsets(g).len(), 1, "{g}");
        }
    }

    #[test]
    fn saturn_from_first() {
        assert_eq!(aspected_houses(Graha::Shani, 1), vec![3, 7, 10]);
    }

    #[test]
    fn mars_wraps() {
        assert_eq!(aspected_houses(Graha::Mangal, 10), vec![1, 4, 5]);
    }

    #[test]
    fn jupiter_trines() {
        assert_eq!(aspected_houses(Graha::Guru, 5), vec![9, 11, 1]);
    }

    #[test]
    fn never_aspects_own_house() {
        for g in ALL_GRAHAS {
            for h in 1..=12 {
                assert!(!aspects_house(g, h, h));
            }
        }
    }
}
