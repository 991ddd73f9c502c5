use std::path::Path;

use colored::Colorize;
use yj_engine::ReferenceResolver;

pub fn run(data: &Path, ordinal: i64, index: i64) -> Result<(), String> {
    let resolver = ReferenceResolver::new(data);
    let line = resolver
        .resolve_line(ordinal, index)
        .map_err(|e| e.to_string())?;

    if line.is_empty() {
        println!("  (no text for line {index} of hexagram {ordinal})");
        return Ok(());
    }

    println!("  {}", line.text);
    if let Some(modern) = line.modern.as_deref().filter(|m| !m.is_empty()) {
        println!("  {}", modern.dimmed());
    }
    Ok(())
}
