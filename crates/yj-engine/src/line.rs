//! Single hexagram lines and the three-coin classification.
//!
//! Each coin shows either tails (2) or heads (3). The sum of three coins is
//! the line's ritual number: 6 (old yin), 7 (young yang), 8 (young yin) or
//! 9 (old yang). "Old" lines are moving and invert in the changed hexagram.

use serde::{Deserialize, Serialize};

/// Value of a coin showing tails.
pub const TAILS: u8 = 2;

/// Value of a coin showing heads.
pub const HEADS: u8 = 3;

/// Traditional names for the six positions, bottom to top, on a yang line.
const YANG_LABELS: [&str; 6] = ["初九", "九二", "九三", "九四", "九五", "上九"];

/// Traditional names for the six positions, bottom to top, on a yin line.
const YIN_LABELS: [&str; 6] = ["初六", "六二", "六三", "六四", "六五", "上六"];

/// The binary state of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Broken line, bit value 0.
    Yin,
    /// Solid line, bit value 1.
    Yang,
}

impl Polarity {
    /// Build a polarity from a bit. Any non-zero value is yang.
    pub fn from_bit(bit: u8) -> Self {
        if bit == 0 { Self::Yin } else { Self::Yang }
    }

    /// The bit value of this polarity (yin = 0, yang = 1).
    pub fn bit(self) -> u8 {
        match self {
            Self::Yin => 0,
            Self::Yang => 1,
        }
    }

    /// The opposite polarity.
    pub fn flipped(self) -> Self {
        match self {
            Self::Yin => Self::Yang,
            Self::Yang => Self::Yin,
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yin => write!(f, "yin"),
            Self::Yang => write!(f, "yang"),
        }
    }
}

/// One drawn line: its polarity and whether it is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// Yin or yang.
    pub polarity: Polarity,
    /// Whether the line is "old" and inverts in the changed hexagram.
    pub moving: bool,
}

impl Line {
    /// Old yin: yin and moving (ritual number 6).
    pub const OLD_YIN: Self = Self::new(Polarity::Yin, true);
    /// Young yang: yang and still (ritual number 7).
    pub const YOUNG_YANG: Self = Self::new(Polarity::Yang, false);
    /// Young yin: yin and still (ritual number 8).
    pub const YOUNG_YIN: Self = Self::new(Polarity::Yin, false);
    /// Old yang: yang and moving (ritual number 9).
    pub const OLD_YANG: Self = Self::new(Polarity::Yang, true);

    /// Create a line.
    pub const fn new(polarity: Polarity, moving: bool) -> Self {
        Self { polarity, moving }
    }

    /// Classify a three-coin sum (6..=9). Returns `None` for impossible sums.
    pub fn from_coin_sum(sum: u8) -> Option<Self> {
        match sum {
            6 => Some(Self::OLD_YIN),
            7 => Some(Self::YOUNG_YANG),
            8 => Some(Self::YOUNG_YIN),
            9 => Some(Self::OLD_YANG),
            _ => None,
        }
    }

    /// Classify three coin faces, each [`HEADS`] or [`TAILS`].
    pub fn from_coins(coins: [u8; 3]) -> Option<Self> {
        if coins.iter().any(|c| *c != HEADS && *c != TAILS) {
            return None;
        }
        Self::from_coin_sum(coins.iter().sum())
    }

    /// Classify a toss of three coins, `true` meaning heads.
    pub fn from_toss(heads: [bool; 3]) -> Self {
        match heads {
            [false, false, false] => Self::OLD_YIN,
            [true, false, false] | [false, true, false] | [false, false, true] => Self::YOUNG_YANG,
            [true, true, false] | [true, false, true] | [false, true, true] => Self::YOUNG_YIN,
            [true, true, true] => Self::OLD_YANG,
        }
    }

    /// The ritual number of this line (6, 7, 8 or 9).
    pub fn ritual_number(self) -> u8 {
        match (self.polarity, self.moving) {
            (Polarity::Yin, true) => 6,
            (Polarity::Yang, false) => 7,
            (Polarity::Yin, false) => 8,
            (Polarity::Yang, true) => 9,
        }
    }

    /// The line as it appears in the changed hexagram.
    ///
    /// Moving lines flip polarity; the result is always still.
    pub fn settled(self) -> Self {
        let polarity = if self.moving {
            self.polarity.flipped()
        } else {
            self.polarity
        };
        Self::new(polarity, false)
    }

    /// Traditional label for this line at `position` (0 = bottom), e.g. `初九`.
    pub fn label(self, position: usize) -> Option<&'static str> {
        position_label(self.polarity, position)
    }
}

/// Traditional label for a line of the given polarity at `position` (0..=5).
pub fn position_label(polarity: Polarity, position: usize) -> Option<&'static str> {
    match polarity {
        Polarity::Yang => YANG_LABELS.get(position).copied(),
        Polarity::Yin => YIN_LABELS.get(position).copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_sums_classify_all_four_states() {
        assert_eq!(Line::from_coin_sum(6), Some(Line::OLD_YIN));
        assert_eq!(Line::from_coin_sum(7), Some(Line::YOUNG_YANG));
        assert_eq!(Line::from_coin_sum(8), Some(Line::YOUNG_YIN));
        assert_eq!(Line::from_coin_sum(9), Some(Line::OLD_YANG));
        assert_eq!(Line::from_coin_sum(5), None);
        assert_eq!(Line::from_coin_sum(10), None);
    }

    #[test]
    fn three_heads_is_old_yang_three_tails_old_yin() {
        assert_eq!(Line::from_coins([HEADS; 3]), Some(Line::OLD_YANG));
        assert_eq!(Line::from_coins([TAILS; 3]), Some(Line::OLD_YIN));
    }

    #[test]
    fn odd_coin_out_decides_young_lines() {
        // 3 + 2 + 3 = 8
        assert_eq!(
            Line::from_coins([HEADS, TAILS, HEADS]),
            Some(Line::YOUNG_YIN)
        );
        // 2 + 3 + 2 = 7
        assert_eq!(
            Line::from_coins([TAILS, HEADS, TAILS]),
            Some(Line::YOUNG_YANG)
        );
    }

    #[test]
    fn toss_agrees_with_coin_sum() {
        for mask in 0..8u8 {
            let faces = [mask & 1 != 0, mask & 2 != 0, mask & 4 != 0];
            let coins = faces.map(|h| if h { HEADS } else { TAILS });
            assert_eq!(Some(Line::from_toss(faces)), Line::from_coins(coins));
        }
    }

    #[test]
    fn toss_counts_heads() {
        assert_eq!(Line::from_toss([false; 3]), Line::OLD_YIN);
        assert_eq!(Line::from_toss([false, true, false]), Line::YOUNG_YANG);
        assert_eq!(Line::from_toss([true, false, true]), Line::YOUNG_YIN);
        assert_eq!(Line::from_toss([true; 3]), Line::OLD_YANG);
    }

    #[test]
    fn invalid_coin_face_rejected() {
        assert_eq!(Line::from_coins([HEADS, 1, TAILS]), None);
    }

    #[test]
    fn ritual_number_matches_coin_sum() {
        for sum in 6..=9 {
            let line = Line::from_coin_sum(sum).unwrap();
            assert_eq!(line.ritual_number(), sum);
        }
    }

    #[test]
    fn settled_flips_only_moving_lines() {
        assert_eq!(Line::OLD_YANG.settled(), Line::YOUNG_YIN);
        assert_eq!(Line::OLD_YIN.settled(), Line::YOUNG_YANG);
        assert_eq!(Line::YOUNG_YANG.settled(), Line::YOUNG_YANG);
        assert_eq!(Line::YOUNG_YIN.settled(), Line::YOUNG_YIN);
    }

    #[test]
    fn position_labels() {
        assert_eq!(Line::OLD_YANG.label(0), Some("初九"));
        assert_eq!(Line::OLD_YIN.label(5), Some("上六"));
        assert_eq!(Line::YOUNG_YIN.label(2), Some("六三"));
        assert_eq!(Line::YOUNG_YANG.label(6), None);
    }

    #[test]
    fn polarity_bits() {
        assert_eq!(Polarity::from_bit(0), Polarity::Yin);
        assert_eq!(Polarity::from_bit(1), Polarity::Yang);
        assert_eq!(Polarity::Yang.bit(), 1);
        assert_eq!(Polarity::Yin.flipped(), Polarity::Yang);
    }
}
