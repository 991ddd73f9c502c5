//! Three-coin divination.
//!
//! Six lines are drawn bottom to top. Each line tosses three coins and sums
//! them (tails = 2, heads = 3): 6 old yin, 7 young yang, 8 young yin,
//! 9 old yang. The primary hexagram is read as drawn; the changed hexagram
//! inverts every old (moving) line.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::hexagram::Hexagram;
use crate::line::Line;

/// The six spirits assigned to the lines bottom to top, shown with a cast.
pub const SIX_SPIRITS: [&str; 6] = ["青龙", "朱雀", "勾陈", "腾蛇", "白虎", "玄武"];

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// The outcome of a cast: six drawn lines and the two hexagrams they form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Divination {
    /// Caller-supplied question, passed through untouched.
    pub topic: String,
    /// Drawn lines, bottom to top.
    pub lines: [Line; 6],
    /// The hexagram as drawn.
    pub primary: Hexagram,
    /// The hexagram after inverting moving lines.
    pub changed: Hexagram,
}

impl Divination {
    /// Derive both hexagrams from six drawn lines.
    pub fn from_lines(lines: [Line; 6], topic: impl Into<String>) -> Self {
        let primary = Hexagram::from_lines(lines.map(|l| l.polarity));
        let changed = Hexagram::from_lines(lines.map(|l| l.settled().polarity));
        Self {
            topic: topic.into(),
            lines,
            primary,
            changed,
        }
    }

    /// Moving flags, bottom to top.
    pub fn moving(&self) -> [bool; 6] {
        self.lines.map(|l| l.moving)
    }

    /// Zero-based positions of the moving lines.
    pub fn moving_positions(&self) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.moving)
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether any line is moving.
    pub fn has_moving_lines(&self) -> bool {
        self.lines.iter().any(|l| l.moving)
    }

    /// Traditional labels of the moving lines, e.g. `["初九", "六四"]`.
    pub fn change_list(&self) -> Vec<&'static str> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.moving)
            .filter_map(|(i, l)| l.label(i))
            .collect()
    }

    /// Ritual numbers (6-9) of the drawn lines, bottom to top.
    pub fn ritual_numbers(&self) -> [u8; 6] {
        self.lines.map(Line::ritual_number)
    }
}

/// Fold a seed string into a 64-bit RNG seed.
///
/// Decimal integers are used as-is; anything else is hashed with FNV-1a,
/// which is stable across platforms and releases.
pub fn seed_value(seed: &str) -> u64 {
    let trimmed = seed.trim();
    if let Ok(n) = trimmed.parse::<u64>() {
        return n;
    }
    trimmed.bytes().fold(FNV_OFFSET, |hash, b| {
        (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME)
    })
}

/// Build the RNG for a cast: seeded when a seed is given, OS entropy otherwise.
pub fn rng_for(seed: Option<&str>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(seed_value(s)),
        None => StdRng::from_os_rng(),
    }
}

/// Toss three coins and classify the line.
pub fn draw_line<R: Rng + ?Sized>(rng: &mut R) -> Line {
    Line::from_toss([rng.random_bool(0.5), rng.random_bool(0.5), rng.random_bool(0.5)])
}

/// Draw six lines bottom to top and derive the hexagrams.
pub fn cast<R: Rng + ?Sized>(rng: &mut R, topic: Option<&str>) -> Divination {
    let lines = std::array::from_fn(|_| draw_line(rng));
    Divination::from_lines(lines, topic.unwrap_or_default())
}

/// Cast a divination, deterministic when `seed` is given.
///
/// An empty or whitespace-only seed counts as no seed.
pub fn generate_divination(seed: Option<&str>, topic: Option<&str>) -> Divination {
    let seed = seed.filter(|s| !s.trim().is_empty());
    let mut rng = rng_for(seed);
    let divination = cast(&mut rng, topic);
    tracing::debug!(
        seeded = seed.is_some(),
        primary = divination.primary.ordinal(),
        changed = divination.changed.ordinal(),
        "cast divination"
    );
    divination
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Polarity;

    #[test]
    fn same_seed_same_cast() {
        let a = generate_divination(Some("question of the day"), None);
        let b = generate_divination(Some("question of the day"), None);
        assert_eq!(a, b);
    }

    #[test]
    fn numeric_seed_matches_u64_seed() {
        let mut rng = StdRng::seed_from_u64(42);
        let direct = cast(&mut rng, Some("t"));
        assert_eq!(generate_divination(Some("42"), Some("t")), direct);
    }

    #[test]
    fn seed_value_is_stable() {
        assert_eq!(seed_value("7"), 7);
        assert_eq!(seed_value(" 7 "), 7);
        // FNV-1a of the empty input is the offset basis.
        assert_eq!(seed_value(""), FNV_OFFSET);
        assert_eq!(seed_value("a"), 0xaf63_dc4c_8601_ec8c);
        assert_ne!(seed_value("abc"), seed_value("abd"));
    }

    #[test]
    fn topic_passes_through() {
        let d = generate_divination(Some("1"), Some("  career?  "));
        assert_eq!(d.topic, "  career?  ");
        assert_eq!(generate_divination(Some("1"), None).topic, "");
    }

    #[test]
    fn all_old_yang_changes_to_kun() {
        let d = Divination::from_lines([Line::OLD_YANG; 6], "");
        assert_eq!(d.primary.ordinal(), 1);
        assert_eq!(d.changed.ordinal(), 2);
        assert_eq!(d.moving_positions(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(
            d.change_list(),
            vec!["初九", "九二", "九三", "九四", "九五", "上九"]
        );
    }

    #[test]
    fn still_lines_leave_changed_equal_to_primary() {
        let lines = [
            Line::YOUNG_YANG,
            Line::YOUNG_YIN,
            Line::YOUNG_YIN,
            Line::YOUNG_YANG,
            Line::YOUNG_YANG,
            Line::YOUNG_YIN,
        ];
        let d = Divination::from_lines(lines, "");
        assert_eq!(d.primary, d.changed);
        assert!(!d.has_moving_lines());
        assert!(d.change_list().is_empty());
    }

    #[test]
    fn only_moving_positions_flip() {
        let lines = [
            Line::OLD_YIN,
            Line::YOUNG_YANG,
            Line::YOUNG_YIN,
            Line::OLD_YANG,
            Line::YOUNG_YANG,
            Line::YOUNG_YIN,
        ];
        let d = Divination::from_lines(lines, "");
        let p = d.primary.lines();
        let c = d.changed.lines();
        assert_eq!(c[0], Polarity::Yang);
        assert_eq!(c[3], Polarity::Yin);
        for i in [1, 2, 4, 5] {
            assert_eq!(p[i], c[i]);
        }
        assert_eq!(d.change_list(), vec!["初六", "九四"]);
        assert_eq!(d.ritual_numbers(), [6, 7, 8, 9, 7, 8]);
    }

    #[test]
    fn unseeded_casts_are_well_formed() {
        for _ in 0..50 {
            let d = generate_divination(None, None);
            assert!((1..=64).contains(&d.primary.ordinal()));
            assert!((1..=64).contains(&d.changed.ordinal()));
        }
    }

    #[test]
    fn blank_seed_is_unseeded() {
        // Should not panic and must produce a valid cast.
        let d = generate_divination(Some("   "), None);
        assert!((1..=64).contains(&d.primary.ordinal()));
    }

    #[test]
    fn coin_distribution_is_plausible() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut counts = [0u32; 4];
        for _ in 0..8000 {
            counts[usize::from(draw_line(&mut rng).ritual_number() - 6)] += 1;
        }
        // Expected ratio 1:3:3:1.
        assert!(counts[0] > 700 && counts[0] < 1300, "{counts:?}");
        assert!(counts[1] > 2600 && counts[1] < 3400, "{counts:?}");
        assert!(counts[2] > 2600 && counts[2] < 3400, "{counts:?}");
        assert!(counts[3] > 700 && counts[3] < 1300, "{counts:?}");
    }
}
