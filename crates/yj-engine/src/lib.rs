//! Hexagram engine for Yijing.
//!
//! Casts three-coin divinations, encodes lines into trigrams, looks up King
//! Wen ordinals, derives changed hexagrams from moving lines, and resolves
//! the static reference texts for each hexagram.

pub mod commentary;
pub mod divination;
pub mod error;
pub mod hexagram;
pub mod king_wen;
pub mod line;
pub mod reference;
pub mod trigram;

pub use commentary::{Commentary, CommentaryRequest};
pub use divination::{Divination, SIX_SPIRITS, cast, generate_divination};
pub use error::{EngineError, EngineResult};
pub use hexagram::Hexagram;
pub use line::{Line, Polarity};
pub use reference::{LineText, ReferenceRecord, ReferenceResolver, ReferenceTable};
pub use trigram::Trigram;
