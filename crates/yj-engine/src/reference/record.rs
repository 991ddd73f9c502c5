//! Reference record types.

use serde::{Deserialize, Serialize};

use crate::king_wen;

/// Commentary for one line of a hexagram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineText {
    /// The classical line statement.
    pub text: String,
    /// Optional modern-language gloss.
    pub modern: Option<String>,
}

impl LineText {
    /// A line with text and no gloss.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            modern: None,
        }
    }

    /// Whether neither text nor gloss is present.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.modern.as_deref().is_none_or(str::is_empty)
    }
}

/// Static texts for one hexagram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    /// King Wen ordinal, 1..=64.
    pub code: u8,
    /// Canonical name.
    pub name: String,
    /// The judgement (卦辞).
    pub judgement: String,
    /// The image commentary (象传).
    pub image: String,
    /// Line statements, bottom to top.
    pub lines: Vec<LineText>,
}

impl ReferenceRecord {
    /// A record carrying only the canonical name of `code`, with empty texts.
    pub fn placeholder(code: u8) -> Self {
        Self {
            code,
            name: king_wen::name(code).unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    /// Whether this record has no text at all.
    pub fn is_placeholder(&self) -> bool {
        self.judgement.is_empty()
            && self.image.is_empty()
            && self.lines.iter().all(LineText::is_empty)
    }

    /// Line commentary at `index` (0 = bottom), empty when absent.
    pub fn line(&self, index: usize) -> LineText {
        self.lines.get(index).cloned().unwrap_or_default()
    }
}
