//! The hexagram facts handed to the language model.

use serde::{Deserialize, Serialize};

use yj_engine::line::position_label;
use yj_engine::{Divination, Hexagram, LineText, ReferenceRecord};

/// One line statement as received from a client: a bare string or a
/// `{text, modern}` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextLine {
    /// Plain statement.
    Text(String),
    /// Statement with an optional modern gloss.
    Structured {
        /// The statement.
        #[serde(default)]
        text: String,
        /// Optional gloss.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        modern: Option<String>,
    },
}

impl From<LineText> for ContextLine {
    fn from(line: LineText) -> Self {
        match line.modern {
            Some(modern) => Self::Structured {
                text: line.text,
                modern: Some(modern),
            },
            None => Self::Text(line.text),
        }
    }
}

impl std::fmt::Display for ContextLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Structured {
                text,
                modern: Some(modern),
            } if !modern.is_empty() => write!(f, "{text}（{modern}）"),
            Self::Structured { text, .. } => write!(f, "{text}"),
        }
    }
}

/// Named facts about a hexagram used to build an interpretation prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HexagramContext {
    /// Canonical name, e.g. `乾`.
    pub name: String,
    /// King Wen ordinal.
    pub sequence: Option<u32>,
    /// Descriptive name, e.g. `乾为天`.
    pub full_name: String,
    /// The judgement.
    pub judgement: String,
    /// The image commentary.
    pub image: String,
    /// Line statements, bottom to top.
    pub lines: Vec<ContextLine>,
    /// Labels of the moving lines, e.g. `初九`.
    pub change_list: Vec<String>,
}

impl HexagramContext {
    /// Context for the primary hexagram of a cast, enriched with its texts.
    pub fn from_divination(divination: &Divination, record: &ReferenceRecord) -> Self {
        let mut ctx = Self::from_hexagram(&divination.primary, record);
        ctx.change_list = divination
            .change_list()
            .into_iter()
            .map(str::to_string)
            .collect();
        ctx
    }

    /// Context for a hexagram with no moving lines.
    pub fn from_hexagram(hexagram: &Hexagram, record: &ReferenceRecord) -> Self {
        Self {
            name: hexagram.name().to_string(),
            sequence: Some(u32::from(hexagram.ordinal())),
            full_name: hexagram.full_name(),
            judgement: record.judgement.clone(),
            image: record.image.clone(),
            lines: record.lines.iter().cloned().map(ContextLine::from).collect(),
            change_list: Vec::new(),
        }
    }

    /// Context focused on a single line (0 = bottom) of a hexagram.
    pub fn for_line(hexagram: &Hexagram, record: &ReferenceRecord, index: usize) -> Self {
        let mut ctx = Self::from_hexagram(hexagram, record);
        ctx.lines = vec![ContextLine::from(record.line(index))];
        ctx.change_list = hexagram
            .lines()
            .get(index)
            .and_then(|p| position_label(*p, index))
            .map(|label| vec![label.to_string()])
            .unwrap_or_default();
        ctx
    }
}
