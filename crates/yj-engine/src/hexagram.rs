//! Six-line hexagrams.

use serde::{Deserialize, Serialize};

use crate::king_wen;
use crate::line::Polarity;
use crate::trigram::Trigram;

/// A hexagram: six polarities, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hexagram {
    lines: [Polarity; 6],
}

impl Hexagram {
    /// Build a hexagram from six lines, bottom to top.
    pub fn from_lines(lines: [Polarity; 6]) -> Self {
        Self { lines }
    }

    /// Build a hexagram from its trigrams.
    pub fn from_trigrams(upper: Trigram, lower: Trigram) -> Self {
        let [l0, l1, l2] = lower.lines();
        let [l3, l4, l5] = upper.lines();
        Self::from_lines([l0, l1, l2, l3, l4, l5])
    }

    /// Build the hexagram with the given King Wen ordinal.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        king_wen::trigrams(ordinal).map(|(upper, lower)| Self::from_trigrams(upper, lower))
    }

    /// The six lines, bottom to top.
    pub fn lines(&self) -> [Polarity; 6] {
        self.lines
    }

    /// Line bits (0 = yin, 1 = yang), bottom to top.
    pub fn bits(&self) -> [u8; 6] {
        self.lines.map(Polarity::bit)
    }

    /// Lines 0..=2.
    pub fn lower(&self) -> Trigram {
        Trigram::from_lines([self.lines[0], self.lines[1], self.lines[2]])
    }

    /// Lines 3..=5.
    pub fn upper(&self) -> Trigram {
        Trigram::from_lines([self.lines[3], self.lines[4], self.lines[5]])
    }

    /// King Wen ordinal, 1..=64.
    pub fn ordinal(&self) -> u8 {
        king_wen::ordinal(self.upper(), self.lower())
    }

    /// Canonical name, e.g. `履`.
    pub fn name(&self) -> &'static str {
        king_wen::name(self.ordinal()).unwrap_or_default()
    }

    /// Descriptive full name: `乾为天` for doubled trigrams, otherwise
    /// upper image + lower image + name, e.g. `天泽履`.
    pub fn full_name(&self) -> String {
        let (upper, lower) = (self.upper(), self.lower());
        if upper == lower {
            format!("{}为{}", upper.name(), upper.image())
        } else {
            format!("{}{}{}", upper.image(), lower.image(), self.name())
        }
    }

    /// Trigram placement, e.g. `乾上兑下`.
    pub fn position_desc(&self) -> String {
        format!("{}上{}下", self.upper().name(), self.lower().name())
    }

    /// Invert the lines whose `moving` flag is set.
    pub fn changed(&self, moving: &[bool; 6]) -> Self {
        let mut lines = self.lines;
        for (line, flip) in lines.iter_mut().zip(moving) {
            if *flip {
                *line = line.flipped();
            }
        }
        Self { lines }
    }

    /// Every line inverted.
    pub fn complement(&self) -> Self {
        self.changed(&[true; 6])
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.ordinal(), self.name(), self.full_name())
    }
}
