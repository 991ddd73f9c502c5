//! Offline commentary composed from the reference texts.
//!
//! Combines the primary hexagram's judgement and image, the statements of
//! its first two moving lines, and the changed hexagram's judgement into a
//! short reading. No network access is involved.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::reference::ReferenceResolver;

/// Question used when the caller leaves it blank.
pub const DEFAULT_QUESTION: &str = "综合运势";

/// Closing advice attached to every commentary.
pub const GENERAL_ADVICE: &str = "结合卦意与现实资源，小步快跑、持续验证；与关键人保持顺畅沟通。";

/// How many moving-line statements are quoted.
const QUOTED_MOVING_LINES: usize = 2;

/// A composed traditional reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commentary {
    /// One-paragraph overview.
    pub summary: String,
    /// Supporting quotations.
    pub details: Vec<String>,
    /// General advice.
    pub advice: String,
}

/// What a commentary is composed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentaryRequest<'a> {
    /// The question asked; blank means [`DEFAULT_QUESTION`].
    pub question: &'a str,
    /// Ordinal of the primary hexagram.
    pub primary: i64,
    /// Moving flags of the primary lines, bottom to top.
    pub moving: &'a [bool],
    /// Ordinal of the changed hexagram.
    pub changed: i64,
}

/// Compose a commentary. Fails only for out-of-range ordinals.
pub fn compose(
    request: &CommentaryRequest<'_>,
    resolver: &ReferenceResolver,
) -> EngineResult<Commentary> {
    let primary = resolver.resolve_hexagram(request.primary)?;
    let changed = resolver.resolve_hexagram(request.changed)?;

    let question = match request.question.trim() {
        "" => DEFAULT_QUESTION,
        q => q,
    };
    let moving_count = request.moving.iter().filter(|m| **m).count();
    let judgement = if primary.judgement.is_empty() {
        format!("{}：利于正道与循序渐进。", primary.name)
    } else {
        primary.judgement.clone()
    };
    let summary = format!(
        "卦名：{}。针对「{question}」，{judgement} 动爻{moving_count}。若推进受阻，可参考变卦「{}」。",
        primary.name, changed.name
    );

    let mut details = Vec::new();
    if !primary.image.is_empty() {
        details.push(format!("象传：{}", primary.image));
    }
    let quoted = request
        .moving
        .iter()
        .enumerate()
        .filter(|(_, m)| **m)
        .take(QUOTED_MOVING_LINES)
        .filter_map(|(i, _)| primary.lines.get(i))
        .filter(|line| !line.text.is_empty());
    for line in quoted {
        details.push(format!("动爻·{}", line.text));
    }
    if !changed.judgement.is_empty() {
        details.push(format!("变卦启示：{}", changed.judgement));
    }

    Ok(Commentary {
        summary,
        details,
        advice: GENERAL_ADVICE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{LineText, ReferenceRecord, ReferenceTable};

    fn resolver() -> ReferenceResolver {
        ReferenceResolver::from_table(ReferenceTable::from_records([
            ReferenceRecord {
                code: 1,
                name: "乾".into(),
                judgement: "元亨利贞。".into(),
                image: "天行健，君子以自强不息。".into(),
                lines: vec![
                    LineText::plain("初九：潜龙勿用。"),
                    LineText::plain("九二：见龙在田，利见大人。"),
                    LineText::plain("九三：君子终日乾乾，夕惕若厉，无咎。"),
                ],
            },
            ReferenceRecord {
                code: 2,
                name: "坤".into(),
                judgement: "元亨，利牝马之贞。".into(),
                ..ReferenceRecord::default()
            },
        ]))
    }

    #[test]
    fn full_commentary() {
        let c = compose(
            &CommentaryRequest {
                question: "事业",
                primary: 1,
                moving: &[true, true, true, true, true, true],
                changed: 2,
            },
            &resolver(),
        )
        .unwrap();
        assert_eq!(
            c.summary,
            "卦名：乾。针对「事业」，元亨利贞。 动爻6。若推进受阻，可参考变卦「坤」。"
        );
        assert_eq!(
            c.details,
            vec![
                "象传：天行健，君子以自强不息。",
                "动爻·初九：潜龙勿用。",
                "动爻·九二：见龙在田，利见大人。",
                "变卦启示：元亨，利牝马之贞。",
            ]
        );
        assert_eq!(c.advice, GENERAL_ADVICE);
    }

    #[test]
    fn blank_question_and_missing_texts() {
        let c = compose(
            &CommentaryRequest {
                question: "  ",
                primary: 3,
                moving: &[],
                changed: 3,
            },
            &resolver(),
        )
        .unwrap();
        assert_eq!(
            c.summary,
            "卦名：屯。针对「综合运势」，屯：利于正道与循序渐进。 动爻0。若推进受阻，可参考变卦「屯」。"
        );
        assert!(c.details.is_empty());
    }

    #[test]
    fn moving_line_without_text_is_skipped() {
        let c = compose(
            &CommentaryRequest {
                question: "q",
                primary: 1,
                moving: &[false, false, false, false, true, false],
                changed: 14,
            },
            &resolver(),
        )
        .unwrap();
        assert_eq!(c.details, vec!["象传：天行健，君子以自强不息。"]);
    }

    #[test]
    fn out_of_range_ordinal() {
        let r = compose(
            &CommentaryRequest {
                question: "",
                primary: 0,
                moving: &[],
                changed: 1,
            },
            &resolver(),
        );
        assert!(r.is_err());
    }
}
