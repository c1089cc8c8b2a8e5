//! Report rendering: human table or JSON.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use fieldlink_model::{RelationshipReport, RelationshipSnapshot};

use crate::cli::{OutputFormatArg, ScanArgs};

pub fn print_report(report: &RelationshipReport, args: &ScanArgs) -> anyhow::Result<()> {
    match args.output {
        OutputFormatArg::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormatArg::Table => print_table(report, args.limit),
    }
    Ok(())
}

fn print_table(report: &RelationshipReport, limit: Option<usize>) {
    if report.is_empty() {
        println!("No relationships found.");
    } else {
        let shown = limit.unwrap_or(usize::MAX).min(report.len());
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            header_cell("Source"),
            header_cell("Target"),
            header_cell("Matches"),
            header_cell("Coverage"),
            header_cell("Confidence"),
            header_cell("Name sim."),
            header_cell("Samples"),
        ]);
        for idx in [2, 3, 4, 5] {
            if let Some(column) = table.column_mut(idx) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
        for snapshot in &report.snapshots()[..shown] {
            table.add_row(snapshot_row(snapshot));
        }
        println!("{table}");
        if shown < report.len() {
            println!("({shown} of {} relationships shown)", report.len());
        }
    }

    let metadata = report.metadata();
    println!(
        "Scanned {} sources, {} candidate fields in {:.2?}.",
        metadata.sources_scanned, metadata.candidate_fields, metadata.elapsed
    );
    if !metadata.skipped_sources.is_empty() {
        eprintln!("Skipped sources:");
        for skipped in &metadata.skipped_sources {
            eprintln!("- {}: {}", skipped.source, skipped.reason);
        }
    }
}

fn snapshot_row(snapshot: &RelationshipSnapshot) -> Vec<Cell> {
    vec![
        Cell::new(format!("{}.{}", snapshot.source_file, snapshot.source_field)),
        Cell::new(format!("{}.{}", snapshot.target_file, snapshot.target_field)),
        Cell::new(snapshot.match_count),
        Cell::new(format!(
            "{} / {}",
            percent(snapshot.source_coverage),
            percent(snapshot.target_coverage)
        )),
        Cell::new(percent(snapshot.confidence)),
        Cell::new(percent(snapshot.name_similarity)),
        Cell::new(snapshot.sample_values.join(", ")),
    ]
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_to_whole_numbers() {
        assert_eq!(percent(1.0), "100%");
        assert_eq!(percent(2.0 / 3.0), "67%");
        assert_eq!(percent(0.0), "0%");
    }
}
