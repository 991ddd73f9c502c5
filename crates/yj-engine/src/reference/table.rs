//! Parsing the reference data file.
//!
//! Two layouts are accepted:
//!
//! ```json
//! { "1": { "name": "乾", "judgement": "...", "image": "...", "lines": ["..."] } }
//! ```
//!
//! ```json
//! { "hexagrams": [ { "code": 1, "name": "乾", "judgement": "...", "lines": [] } ] }
//! ```
//!
//! Line entries are either a bare string or `{ "text": ..., "modern": ... }`.
//! Records are matched to an ordinal by key, by `code`/`sequence`, or by
//! canonical name, in that order. Entries that fit no record shape are
//! skipped one by one; they never invalidate the rest of the file.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::record::{LineText, ReferenceRecord};
use crate::error::{EngineError, EngineResult};
use crate::king_wen;

/// Immutable ordinal-keyed collection of reference records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTable {
    records: BTreeMap<u8, ReferenceRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTable {
    Listed { hexagrams: Vec<serde_json::Value> },
    Keyed(BTreeMap<String, serde_json::Value>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCode {
    Number(i64),
    Text(String),
}

impl RawCode {
    fn ordinal(&self) -> Option<u8> {
        match self {
            Self::Number(n) => u8::try_from(*n).ok(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawRecord {
    #[serde(alias = "sequence")]
    code: Option<RawCode>,
    name: Option<String>,
    judgement: Option<String>,
    image: Option<String>,
    lines: Option<Vec<RawLine>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLine {
    Plain(String),
    Structured {
        #[serde(default)]
        text: Option<String>,
        #[serde(default, alias = "modern_gloss")]
        modern: Option<String>,
    },
    Other(serde_json::Value),
}

impl From<RawLine> for LineText {
    fn from(raw: RawLine) -> Self {
        match raw {
            RawLine::Plain(text) => LineText::plain(text),
            RawLine::Structured { text, modern } => LineText {
                text: text.unwrap_or_default(),
                modern: modern.filter(|m| !m.is_empty()),
            },
            RawLine::Other(_) => LineText::default(),
        }
    }
}

impl RawRecord {
    fn into_record(self, code: u8) -> ReferenceRecord {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| king_wen::name(code).unwrap_or_default().to_string());
        ReferenceRecord {
            code,
            name,
            judgement: self.judgement.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            lines: self
                .lines
                .unwrap_or_default()
                .into_iter()
                .map(LineText::from)
                .collect(),
        }
    }

    fn ordinal(&self, key: Option<&str>) -> Option<u8> {
        let from_key = key.and_then(|k| {
            k.trim()
                .parse::<u8>()
                .ok()
                .or_else(|| king_wen::ordinal_for_name(k))
        });
        let from_code = self.code.as_ref().and_then(RawCode::ordinal);
        let from_name = self.name.as_deref().and_then(king_wen::ordinal_for_name);
        from_key
            .or(from_code)
            .or(from_name)
            .filter(|n| king_wen::is_valid(i64::from(*n)))
    }
}

impl ReferenceTable {
    /// A table with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from records. Later records replace earlier ones with
    /// the same code; records with an invalid code are dropped.
    pub fn from_records(records: impl IntoIterator<Item = ReferenceRecord>) -> Self {
        let records = records
            .into_iter()
            .filter(|r| king_wen::is_valid(i64::from(r.code)))
            .map(|r| (r.code, r))
            .collect();
        Self { records }
    }

    /// Parse a table from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawTable = serde_json::from_str(json)?;
        let entries: Vec<(Option<String>, serde_json::Value)> = match raw {
            RawTable::Listed { hexagrams } => hexagrams.into_iter().map(|v| (None, v)).collect(),
            RawTable::Keyed(map) => map.into_iter().map(|(k, v)| (Some(k), v)).collect(),
        };

        let mut records = BTreeMap::new();
        for (key, value) in entries {
            let raw = match serde_json::from_value::<RawRecord>(value) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::debug!(key = ?key, "skipping malformed reference entry: {e}");
                    continue;
                }
            };
            match raw.ordinal(key.as_deref()) {
                Some(code) => {
                    records.insert(code, raw.into_record(code));
                }
                None => tracing::debug!(key = ?key, "skipping reference entry without a valid ordinal"),
            }
        }
        Ok(Self { records })
    }

    /// Read and parse a table from a file.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let unavailable = |reason: String| EngineError::ReferenceDataUnavailable {
            path: path.to_path_buf(),
            reason,
        };
        let text = std::fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?;
        Self::from_json_str(&text).map_err(|e| unavailable(e.to_string()))
    }

    /// Record for `code`, if present.
    pub fn get(&self, code: u8) -> Option<&ReferenceRecord> {
        self.records.get(&code)
    }

    /// Record whose stored or canonical name matches `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&ReferenceRecord> {
        let wanted = name.trim();
        self.records
            .values()
            .find(|r| r.name == wanted)
            .or_else(|| king_wen::ordinal_for_name(wanted).and_then(|code| self.get(code)))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = &ReferenceRecord> {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYED: &str = r#"{
        "1": {
            "name": "乾",
            "judgement": "元亨利贞。",
            "image": "天行健，君子以自强不息。",
            "lines": [
                {"text": "初九：潜龙勿用。", "modern": "Hold back."},
                "九二：见龙在田，利见大人。"
            ]
        },
        "2": {"name": "坤", "judgement": "元亨，利牝马之贞。"}
    }"#;

    const LISTED: &str = r#"{
        "hexagrams": [
            {"code": 11, "name": "泰", "judgement": "小往大来，吉亨。"},
            {"name": "否", "judgement": "否之匪人。"},
            {"sequence": 63, "judgement": "亨小，利贞。", "lines": null}
        ]
    }"#;

    #[test]
    fn keyed_layout() {
        let t = ReferenceTable::from_json_str(KEYED).unwrap();
        assert_eq!(t.len(), 2);
        let qian = t.get(1).unwrap();
        assert_eq!(qian.judgement, "元亨利贞。");
        assert_eq!(qian.lines.len(), 2);
        assert_eq!(qian.lines[0].modern.as_deref(), Some("Hold back."));
        assert_eq!(qian.lines[1].text, "九二：见龙在田，利见大人。");
        assert_eq!(qian.lines[1].modern, None);
        assert!(t.get(2).unwrap().image.is_empty());
    }

    #[test]
    fn listed_layout_matches_by_code_and_name() {
        let t = ReferenceTable::from_json_str(LISTED).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.get(11).unwrap().name, "泰");
        assert_eq!(t.get(12).unwrap().judgement, "否之匪人。");
        let jiji = t.get(63).unwrap();
        assert_eq!(jiji.name, "既济");
        assert!(jiji.lines.is_empty());
    }

    #[test]
    fn name_keys_and_bad_entries() {
        let t = ReferenceTable::from_json_str(
            r#"{"未济": {"judgement": "亨。"}, "99": {"judgement": "x"}, "notes": {}}"#,
        )
        .unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(64).unwrap().judgement, "亨。");
    }

    #[test]
    fn metadata_and_malformed_entries_are_skipped() {
        let t = ReferenceTable::from_json_str(
            r#"{
                "version": "2024-01",
                "count": 64,
                "1": {"name": "乾", "judgement": "元亨利贞。"},
                "2": {"judgement": ["not", "text"]}
            }"#,
        )
        .unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(1).unwrap().judgement, "元亨利贞。");
        assert!(t.get(2).is_none());
    }

    #[test]
    fn listed_codes_may_be_strings() {
        let t = ReferenceTable::from_json_str(
            r#"{
                "source": "classic",
                "hexagrams": [
                    {"code": "2", "judgement": "元亨，利牝马之贞。"},
                    {"sequence": " 11 ", "name": "泰"},
                    "stray text",
                    {"code": 1, "judgement": "元亨利贞。"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.get(2).unwrap().name, "坤");
        assert_eq!(t.get(11).unwrap().name, "泰");
        assert_eq!(t.get(1).unwrap().judgement, "元亨利贞。");
    }

    #[test]
    fn odd_line_entries_become_empty() {
        let t = ReferenceTable::from_json_str(r#"{"1": {"lines": [null, 3, "上九：亢龙有悔。"]}}"#)
            .unwrap();
        let lines = &t.get(1).unwrap().lines;
        assert!(lines[0].is_empty());
        assert!(lines[1].is_empty());
        assert_eq!(lines[2].text, "上九：亢龙有悔。");
    }

    #[test]
    fn find_by_name() {
        let t = ReferenceTable::from_json_str(KEYED).unwrap();
        assert_eq!(t.find_by_name("坤").unwrap().code, 2);
        assert_eq!(t.find_by_name("乾卦").unwrap().code, 1);
        assert!(t.find_by_name("泰").is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ReferenceTable::from_json_str("{not json").is_err());
        assert!(ReferenceTable::from_json_str("[1, 2]").is_err());
    }

    #[test]
    fn load_missing_file() {
        let err = ReferenceTable::load(Path::new("/nonexistent/iching.json")).unwrap_err();
        assert!(matches!(err, EngineError::ReferenceDataUnavailable { .. }));
    }

    #[test]
    fn from_records_drops_invalid_codes() {
        let t = ReferenceTable::from_records([
            ReferenceRecord::placeholder(5),
            ReferenceRecord {
                code: 0,
                ..ReferenceRecord::default()
            },
        ]);
        assert_eq!(t.len(), 1);
        assert!(t.get(5).is_some());
    }
}
