use std::path::Path;

use colored::Colorize;
use yj_engine::{Hexagram, ReferenceResolver};

use super::styled_glyph;

pub fn run(data: &Path, ordinal: i64, json: bool) -> Result<(), String> {
    let resolver = ReferenceResolver::new(data);
    let record = resolver
        .resolve_hexagram(ordinal)
        .map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&record)
            .map_err(|e| format!("failed to serialize record: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    let hexagram = Hexagram::from_ordinal(record.code)
        .ok_or_else(|| format!("no hexagram with ordinal {}", record.code))?;

    println!(
        "  {}",
        format!("第{}卦 {}", record.code, record.name).bold()
    );
    println!("  {} · {}", hexagram.full_name(), hexagram.position_desc());
    println!("  上卦 {}", hexagram.upper());
    println!("  下卦 {}", hexagram.lower());
    println!();
    for polarity in hexagram.lines().iter().rev() {
        println!("    {}", styled_glyph(*polarity, false));
    }
    println!();

    if record.is_placeholder() {
        println!("  (no reference text available)");
        return Ok(());
    }

    if !record.judgement.is_empty() {
        println!("  卦辞：{}", record.judgement);
    }
    if !record.image.is_empty() {
        println!("  象曰：{}", record.image);
    }
    if !record.lines.is_empty() {
        println!();
    }
    for line in record.lines.iter().filter(|l| !l.is_empty()) {
        println!("  {}", line.text);
        if let Some(modern) = line.modern.as_deref().filter(|m| !m.is_empty()) {
            println!("      {}", modern.dimmed());
        }
    }

    Ok(())
}
