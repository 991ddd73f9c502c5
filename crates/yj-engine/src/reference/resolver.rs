//! Lazily loaded reference lookups.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::record::{LineText, ReferenceRecord};
use super::table::ReferenceTable;
use crate::error::{EngineError, EngineResult};
use crate::king_wen;

/// Resolves hexagram ordinals and names to their reference texts.
///
/// The backing file is read at most once, on first access, even under
/// concurrent callers. A missing or unreadable file yields an empty table
/// and a warning; lookups then return placeholder records.
#[derive(Debug)]
pub struct ReferenceResolver {
    source: Option<PathBuf>,
    table: OnceLock<ReferenceTable>,
}

impl ReferenceResolver {
    /// A resolver that loads `path` on first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(path.into()),
            table: OnceLock::new(),
        }
    }

    /// A resolver over an already-built table.
    pub fn from_table(table: ReferenceTable) -> Self {
        Self {
            source: None,
            table: OnceLock::from(table),
        }
    }

    /// The backing data file, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Whether the table has been loaded yet.
    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    /// The table, loading it on first call.
    pub fn table(&self) -> &ReferenceTable {
        self.table.get_or_init(|| match &self.source {
            Some(path) => load_or_empty(path),
            None => ReferenceTable::empty(),
        })
    }

    /// The stored record for `ordinal`, or `None` when the data has no entry.
    pub fn lookup(&self, ordinal: i64) -> EngineResult<Option<&ReferenceRecord>> {
        let code = checked(ordinal)?;
        Ok(self.table().get(code))
    }

    /// Texts for `ordinal`. A valid ordinal without data yields a
    /// placeholder record carrying only the canonical name.
    pub fn resolve_hexagram(&self, ordinal: i64) -> EngineResult<ReferenceRecord> {
        let code = checked(ordinal)?;
        Ok(self
            .table()
            .get(code)
            .cloned()
            .unwrap_or_else(|| ReferenceRecord::placeholder(code)))
    }

    /// Texts for a canonical hexagram name (a trailing `卦` is allowed).
    pub fn resolve_name(&self, name: &str) -> Option<ReferenceRecord> {
        if let Some(record) = self.table().find_by_name(name) {
            return Some(record.clone());
        }
        king_wen::ordinal_for_name(name).map(ReferenceRecord::placeholder)
    }

    /// Commentary for line `line_index` (0 = bottom) of `ordinal`.
    ///
    /// An index outside 0..=5 or missing data yields an empty result.
    pub fn resolve_line(&self, ordinal: i64, line_index: i64) -> EngineResult<LineText> {
        let record = self.lookup(ordinal)?;
        let text = match (record, usize::try_from(line_index)) {
            (Some(record), Ok(index)) if index < 6 => record.line(index),
            _ => LineText::default(),
        };
        Ok(text)
    }
}

fn checked(ordinal: i64) -> EngineResult<u8> {
    if !king_wen::is_valid(ordinal) {
        return Err(EngineError::OutOfRangeOrdinal(ordinal));
    }
    u8::try_from(ordinal).map_err(|_| EngineError::OutOfRangeOrdinal(ordinal))
}

fn load_or_empty(path: &Path) -> ReferenceTable {
    match ReferenceTable::load(path) {
        Ok(table) => {
            tracing::info!(path = %path.display(), records = table.len(), "loaded reference data");
            table
        }
        Err(e) => {
            tracing::warn!("{e}; serving placeholder texts");
            ReferenceTable::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Arc;

    fn write_data(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn sample() -> tempfile::NamedTempFile {
        write_data(
            r#"{
                "1": {
                    "name": "乾",
                    "judgement": "元亨利贞。",
                    "image": "天行健，君子以自强不息。",
                    "lines": [
                        {"text": "初九：潜龙勿用。", "modern": "Not yet."},
                        "九二：见龙在田，利见大人。",
                        "九三：君子终日乾乾，夕惕若厉，无咎。",
                        "九四：或跃在渊，无咎。",
                        "九五：飞龙在天，利见大人。",
                        "上九：亢龙有悔。"
                    ]
                }
            }"#,
        )
    }

    #[test]
    fn boundary_ordinals() {
        let file = sample();
        let r = ReferenceResolver::new(file.path());
        assert!(matches!(
            r.resolve_hexagram(0),
            Err(EngineError::OutOfRangeOrdinal(0))
        ));
        assert!(matches!(
            r.resolve_hexagram(65),
            Err(EngineError::OutOfRangeOrdinal(65))
        ));
        assert_eq!(r.resolve_hexagram(1).unwrap().judgement, "元亨利贞。");
        let last = r.resolve_hexagram(64).unwrap();
        assert_eq!(last.name, "未济");
        assert!(last.is_placeholder());
    }

    #[test]
    fn lookup_distinguishes_missing_data() {
        let file = sample();
        let r = ReferenceResolver::new(file.path());
        assert!(r.lookup(1).unwrap().is_some());
        assert!(r.lookup(2).unwrap().is_none());
        assert!(r.lookup(-1).is_err());
    }

    #[test]
    fn line_lookup() {
        let file = sample();
        let r = ReferenceResolver::new(file.path());
        let first = r.resolve_line(1, 0).unwrap();
        assert_eq!(first.text, "初九：潜龙勿用。");
        assert_eq!(first.modern.as_deref(), Some("Not yet."));
        assert_eq!(r.resolve_line(1, 5).unwrap().text, "上九：亢龙有悔。");
    }

    #[test]
    fn line_index_out_of_range_is_empty() {
        let file = sample();
        let r = ReferenceResolver::new(file.path());
        let line = r.resolve_line(1, 10).unwrap();
        assert_eq!(line.text, "");
        assert_eq!(line.modern, None);
        assert!(r.resolve_line(1, -1).unwrap().is_empty());
        assert!(r.resolve_line(2, 0).unwrap().is_empty());
        assert!(r.resolve_line(0, 0).is_err());
    }

    #[test]
    fn missing_file_degrades() {
        let r = ReferenceResolver::new("/nonexistent/iching_basic.json");
        assert!(!r.is_loaded());
        let rec = r.resolve_hexagram(1).unwrap();
        assert!(r.is_loaded());
        assert_eq!(rec.name, "乾");
        assert!(rec.is_placeholder());
        assert!(r.resolve_line(1, 0).unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_degrades() {
        let file = write_data("{ definitely not json");
        let r = ReferenceResolver::new(file.path());
        assert!(r.table().is_empty());
        assert!(r.resolve_hexagram(30).unwrap().is_placeholder());
    }

    #[test]
    fn loads_once() {
        let file = sample();
        let r = ReferenceResolver::new(file.path());
        assert_eq!(r.table().len(), 1);
        // Later changes to the file are not observed.
        std::fs::write(file.path(), "{}").unwrap();
        assert_eq!(r.table().len(), 1);
    }

    #[test]
    fn concurrent_first_access() {
        let file = sample();
        let r = Arc::new(ReferenceResolver::new(file.path()));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let r = Arc::clone(&r);
                std::thread::spawn(move || r.resolve_hexagram(1).unwrap().judgement)
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), "元亨利贞。");
        }
    }

    #[test]
    fn resolve_by_name() {
        let file = sample();
        let r = ReferenceResolver::new(file.path());
        assert_eq!(r.resolve_name("乾").unwrap().judgement, "元亨利贞。");
        assert!(r.resolve_name("坤").unwrap().is_placeholder());
        assert!(r.resolve_name("nothing").is_none());
    }

    #[test]
    fn from_table_skips_loading() {
        let r = ReferenceResolver::from_table(ReferenceTable::empty());
        assert!(r.is_loaded());
        assert!(r.source().is_none());
    }
}
