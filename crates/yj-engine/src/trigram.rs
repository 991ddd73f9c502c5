//! Trigram codec.
//!
//! Three lines pack into a 3-bit index with the bottom line as the least
//! significant bit: `index = (line2 << 2) | (line1 << 1) | line0`.

use serde::{Deserialize, Serialize};

use crate::line::Polarity;

/// One of the eight trigrams. The discriminant is the packed 3-bit index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Trigram {
    /// ☷ Earth, three yin lines (`000`).
    Kun = 0,
    /// ☳ Thunder, yang at the bottom (`001`).
    Zhen = 1,
    /// ☵ Water, yang in the middle (`010`).
    Kan = 2,
    /// ☱ Lake, yin at the top (`011`).
    Dui = 3,
    /// ☶ Mountain, yang at the top (`100`).
    Gen = 4,
    /// ☲ Fire, yin in the middle (`101`).
    Li = 5,
    /// ☴ Wind, yin at the bottom (`110`).
    Xun = 6,
    /// ☰ Heaven, three yang lines (`111`).
    Qian = 7,
}

/// Every trigram, slot `i` holding the trigram whose packed index is `i`.
const BY_BITS: [Trigram; 8] = [
    Trigram::Kun,
    Trigram::Zhen,
    Trigram::Kan,
    Trigram::Dui,
    Trigram::Gen,
    Trigram::Li,
    Trigram::Xun,
    Trigram::Qian,
];

impl Trigram {
    /// All trigrams in index order.
    pub fn all() -> &'static [Self; 8] {
        &BY_BITS
    }

    /// Decode a packed index. Only the low three bits are read.
    pub fn from_bits(bits: u8) -> Self {
        BY_BITS[usize::from(bits & 0b111)]
    }

    /// Encode three lines, ordered bottom to top.
    pub fn from_lines(lines: [Polarity; 3]) -> Self {
        Self::from_bits((lines[2].bit() << 2) | (lines[1].bit() << 1) | lines[0].bit())
    }

    /// The packed 3-bit index.
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// The packed index as a table position.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The three lines of this trigram, bottom to top.
    pub fn lines(self) -> [Polarity; 3] {
        let bits = self.bits();
        [
            Polarity::from_bit(bits & 1),
            Polarity::from_bit((bits >> 1) & 1),
            Polarity::from_bit((bits >> 2) & 1),
        ]
    }

    /// Chinese name, e.g. `乾`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Kun => "坤",
            Self::Zhen => "震",
            Self::Kan => "坎",
            Self::Dui => "兑",
            Self::Gen => "艮",
            Self::Li => "离",
            Self::Xun => "巽",
            Self::Qian => "乾",
        }
    }

    /// The natural image, e.g. `天` for Qian.
    pub fn image(self) -> &'static str {
        match self {
            Self::Kun => "地",
            Self::Zhen => "雷",
            Self::Kan => "水",
            Self::Dui => "泽",
            Self::Gen => "山",
            Self::Li => "火",
            Self::Xun => "风",
            Self::Qian => "天",
        }
    }

    /// English gloss of the image.
    pub fn english(self) -> &'static str {
        match self {
            Self::Kun => "Earth",
            Self::Zhen => "Thunder",
            Self::Kan => "Water",
            Self::Dui => "Lake",
            Self::Gen => "Mountain",
            Self::Li => "Fire",
            Self::Xun => "Wind",
            Self::Qian => "Heaven",
        }
    }

    /// Unicode trigram symbol.
    pub fn symbol(self) -> char {
        match self {
            Self::Kun => '☷',
            Self::Zhen => '☳',
            Self::Kan => '☵',
            Self::Dui => '☱',
            Self::Gen => '☶',
            Self::Li => '☲',
            Self::Xun => '☴',
            Self::Qian => '☰',
        }
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.symbol(), self.name(), self.english())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Polarity::{Yang, Yin};

    #[test]
    fn pure_trigrams() {
        assert_eq!(Trigram::from_lines([Yang, Yang, Yang]), Trigram::Qian);
        assert_eq!(Trigram::from_lines([Yin, Yin, Yin]), Trigram::Kun);
    }

    #[test]
    fn bottom_line_is_least_significant() {
        assert_eq!(Trigram::from_lines([Yang, Yin, Yin]), Trigram::Zhen);
        assert_eq!(Trigram::from_lines([Yin, Yin, Yang]), Trigram::Gen);
        assert_eq!(Trigram::from_lines([Yin, Yang, Yang]), Trigram::Xun);
        assert_eq!(Trigram::from_lines([Yang, Yang, Yin]), Trigram::Dui);
        assert_eq!(Trigram::from_lines([Yin, Yang, Yin]), Trigram::Kan);
        assert_eq!(Trigram::from_lines([Yang, Yin, Yang]), Trigram::Li);
    }

    #[test]
    fn every_pattern_round_trips() {
        for bits in 0..8u8 {
            let t = Trigram::from_bits(bits);
            assert_eq!(t.bits(), bits);
            assert_eq!(Trigram::from_lines(t.lines()), t);
        }
    }

    #[test]
    fn every_slot_holds_its_own_index() {
        for (slot, trigram) in BY_BITS.iter().enumerate() {
            assert_eq!(usize::from(trigram.bits()), slot);
        }
        assert_eq!(Trigram::from_bits(0b1111_1000), Trigram::Kun);
        assert_eq!(Trigram::from_bits(0b1111_1111), Trigram::Qian);
    }

    #[test]
    fn names_are_distinct() {
        let mut names: Vec<&str> = Trigram::all().iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn high_bits_are_ignored() {
        assert_eq!(Trigram::from_bits(0b1111_1000), Trigram::Kun);
        assert_eq!(Trigram::from_bits(0b1000_0111), Trigram::Qian);
    }

    #[test]
    fn display() {
        assert_eq!(Trigram::Qian.to_string(), "☰ 乾 (Heaven)");
    }
}
