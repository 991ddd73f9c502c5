pub mod cast;
pub mod line;
pub mod serve;
pub mod show;
pub mod table;

use colored::{ColoredString, Colorize};
use yj_engine::Polarity;

/// Line art for one line, as drawn in a hexagram figure.
fn glyph(polarity: Polarity) -> &'static str {
    match polarity {
        Polarity::Yang => "━━━━━━━",
        Polarity::Yin => "━━━ ━━━",
    }
}

/// Line art highlighted when the line is moving.
fn styled_glyph(polarity: Polarity, moving: bool) -> ColoredString {
    let art = glyph(polarity);
    if moving { art.red().bold() } else { art.normal() }
}
