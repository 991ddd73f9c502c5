use comfy_table::{ContentArrangement, Table};
use yj_engine::{Trigram, king_wen};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["上＼下".to_string()];
    header.extend(Trigram::all().iter().map(|t| trigram_cell(*t)));
    table.set_header(header);

    for upper in Trigram::all() {
        let mut row = vec![trigram_cell(*upper)];
        row.extend(Trigram::all().iter().map(|lower| {
            let ordinal = king_wen::ordinal(*upper, *lower);
            format!("{ordinal} {}", king_wen::name(ordinal).unwrap_or_default())
        }));
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!("  rows: upper trigram, columns: lower trigram");

    Ok(())
}

fn trigram_cell(trigram: Trigram) -> String {
    format!("{} {}", trigram.symbol(), trigram.name())
}
