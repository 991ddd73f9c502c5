//! Prompt construction.

use crate::context::HexagramContext;

/// System instructions sent with every interpretation.
pub const SYSTEM_PROMPT: &str = "你是一位严谨且通俗易懂的《周易》分析助手。\
结合用户问题与卦象（卦名、卦辞、象辞、爻辞、变爻），给出结构化的中文解读：\n\
- 结论（一句话）\n- 形势分析\n- 建议（行动要点）\n- 注意事项\n\
要求：真实、简洁、避免迷信表达，避免绝对化断语。";

/// Shown in place of an empty moving-line list.
const NO_CHANGES: &str = "无";

/// Build the user message for `question` about the hexagram in `ctx`.
pub fn user_prompt(question: &str, ctx: &HexagramContext) -> String {
    let sequence = ctx.sequence.map(|n| n.to_string()).unwrap_or_default();
    let changes = if ctx.change_list.is_empty() {
        NO_CHANGES.to_string()
    } else {
        ctx.change_list.join(", ")
    };
    let lines = ctx
        .lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "问题：{question}\n\
         卦象：{}（序号 {sequence}，{}）\n\
         变爻：{changes}\n\
         卦辞：{}\n\
         象曰：{}\n\
         爻辞：{lines}",
        ctx.name, ctx.full_name, ctx.judgement, ctx.image
    )
}
