use std::path::Path;

use colored::Colorize;
use yj_engine::{Polarity, ReferenceResolver, SIX_SPIRITS, generate_divination};
use yj_server::types::CoinResponse;

use super::{glyph, styled_glyph};

pub fn run(seed: Option<&str>, topic: Option<&str>, json: bool, data: &Path) -> Result<(), String> {
    let divination = generate_divination(seed, topic);

    if json {
        let out = serde_json::to_string_pretty(&CoinResponse::from(&divination))
            .map_err(|e| format!("failed to serialize cast: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    if !divination.topic.is_empty() {
        println!("  问题：{}", divination.topic.bold());
        println!();
    }

    let has_moving = divination.has_moving_lines();
    for (position, (spirit, line)) in SIX_SPIRITS
        .iter()
        .zip(divination.lines.iter())
        .enumerate()
        .rev()
    {
        let label = line.label(position).unwrap_or_default();
        let marker = match (line.polarity, line.moving) {
            (Polarity::Yang, true) => "○",
            (Polarity::Yin, true) => "×",
            _ => " ",
        };
        let art = styled_glyph(line.polarity, line.moving);
        if has_moving {
            let changed = glyph(line.settled().polarity);
            println!("  {spirit} {label}  {art} {marker}   {changed}");
        } else {
            println!("  {spirit} {label}  {art}");
        }
    }

    println!();
    println!("  本卦：{}", divination.primary.to_string().bold());
    if has_moving {
        println!("  变卦：{}", divination.changed.to_string().bold());
        println!("  动爻：{}", divination.change_list().join("、"));
    } else {
        println!("  无动爻");
    }

    if data.is_file() {
        let resolver = ReferenceResolver::new(data);
        let ordinal = i64::from(divination.primary.ordinal());
        if let Ok(Some(record)) = resolver.lookup(ordinal) {
            if !record.judgement.is_empty() {
                println!("  卦辞：{}", record.judgement);
            }
        }
    }

    Ok(())
}
