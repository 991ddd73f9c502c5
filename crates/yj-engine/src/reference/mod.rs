//! Static reference texts for the 64 hexagrams.
//!
//! A [`ReferenceTable`] is parsed from JSON once and never mutated. The
//! [`ReferenceResolver`] owns a table behind a single-initialization cell,
//! loads it on first access, and degrades to placeholder records when the
//! backing file is missing or corrupt.

pub mod record;
pub mod resolver;
pub mod table;

pub use record::{LineText, ReferenceRecord};
pub use resolver::ReferenceResolver;
pub use table::ReferenceTable;
